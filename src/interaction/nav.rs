//! Active section highlighting

use super::accordion::{Accordion, BUTTON_CLASS};
use super::dom::{Document, NodeId};

/// Top-level site section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Travel,
    Recruitment,
    Flavors,
    Estates,
    Contact,
    Home,
}

const SECTION_PATHS: [(&str, Section); 5] = [
    ("/travel/", Section::Travel),
    ("/recruitment/", Section::Recruitment),
    ("/flavors/", Section::Flavors),
    ("/estates/", Section::Estates),
    ("/contact/", Section::Contact),
];

impl Section {
    /// Section for a location path, first match wins
    pub fn from_path(path: &str) -> Self {
        let path = path.to_lowercase();
        SECTION_PATHS
            .iter()
            .find(|(fragment, _)| path.contains(fragment))
            .map(|(_, section)| *section)
            .unwrap_or(Section::Home)
    }

    /// Value used by `data-nav`
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Travel => "travel",
            Section::Recruitment => "recruitment",
            Section::Flavors => "flavors",
            Section::Estates => "estates",
            Section::Contact => "contact",
            Section::Home => "home",
        }
    }

    /// Mobile submenu panel for sections that have one
    pub fn panel_id(&self) -> Option<&'static str> {
        match self {
            Section::Travel => Some("m-travel"),
            Section::Recruitment => Some("m-recruitment"),
            Section::Flavors => Some("m-flavors"),
            _ => None,
        }
    }
}

/// Marks the navigation for the current path and opens its submenu
pub fn apply_active_nav(doc: &mut Document, scope: NodeId) -> Section {
    let section = Section::from_path(doc.path());

    for el in doc.query_attribute(scope, "data-nav", section.as_str()) {
        doc.add_class(el, "active");
    }

    if let Some(panel_id) = section.panel_id() {
        let button = doc
            .query_attribute(scope, "aria-controls", panel_id)
            .into_iter()
            .find(|b| doc.has_class(*b, BUTTON_CLASS));
        if let Some(button) = button {
            doc.set_attribute(button, "aria-expanded", "true");
            if let Some(panel) = Accordion::panel_for(doc, button) {
                doc.set_hidden(panel, false);
            }
        }
    }

    section
}
