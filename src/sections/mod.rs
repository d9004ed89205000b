pub mod about;
pub mod contact;
pub mod cursor;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod projects;
pub mod services;
pub mod skills;

pub use about::About;
pub use contact::Contact;
pub use cursor::TechyCursor;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Navigation;
pub use projects::Projects;
pub use services::Services;
pub use skills::Skills;
