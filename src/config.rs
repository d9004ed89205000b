use log::Level;

/// Fraction of a section that has to be on screen before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.3;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Public EmailJS identifiers. They ship to the browser anyway, so they are
/// baked in at build time and can be overridden from the build environment.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailJsConfig {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

pub fn emailjs() -> EmailJsConfig {
    EmailJsConfig {
        service_id: option_env!("EMAILJS_SERVICE_ID").unwrap_or("service_6jknjpa"),
        template_id: option_env!("EMAILJS_TEMPLATE_ID").unwrap_or("template_h5pk4jr"),
        public_key: option_env!("EMAILJS_PUBLIC_KEY").unwrap_or("wpvdVVFH-PNfrOip5"),
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emailjs_identifiers_are_never_empty() {
        let cfg = emailjs();
        assert!(!cfg.service_id.is_empty());
        assert!(!cfg.template_id.is_empty());
        assert!(!cfg.public_key.is_empty());
    }

    #[test]
    fn reveal_threshold_is_a_fraction() {
        assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    }
}
