use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Services,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Services,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id of the section root.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Services => "services",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Services => "Services",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }
}

/// Smooth-scrolls to a section. A missing anchor is simply ignored.
pub fn scroll_to_section(section: Section) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()))
    else {
        debug!("No element for anchor {}", section.anchor());
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_unique_fragments() {
        let mut ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
        assert_eq!(Section::Contact.anchor(), "#contact");
    }

    #[test]
    fn labels_match_ids() {
        for section in Section::ALL {
            assert_eq!(section.label().to_lowercase(), section.id());
        }
    }
}
