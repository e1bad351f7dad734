//! Full-screen mobile menu

use super::dom::{Document, NodeId};

pub const MENU_BUTTON_ID: &str = "central-menu-btn";
pub const CLOSE_BUTTON_ID: &str = "close-menu";
pub const OVERLAY_ID: &str = "mobile-menu-overlay";
/// Any element carrying this attribute closes the menu when clicked
pub const CLOSE_MARKER: &str = "data-close";
/// Body class that locks page scrolling
pub const SCROLL_LOCK_CLASS: &str = "menu-open";

/// Opens and closes the overlay menu and restores focus on close
#[derive(Debug, Clone)]
pub struct MenuController {
    button: NodeId,
    close_button: NodeId,
    overlay: NodeId,
    last_focus: Option<NodeId>,
    open: bool,
}

impl MenuController {
    /// Attaches when the button, the close button, and the overlay all exist
    pub fn init(doc: &Document) -> Option<Self> {
        Some(Self {
            button: doc.element_by_id(MENU_BUTTON_ID)?,
            close_button: doc.element_by_id(CLOSE_BUTTON_ID)?,
            overlay: doc.element_by_id(OVERLAY_ID)?,
            last_focus: None,
            open: false,
        })
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self, doc: &mut Document) {
        self.last_focus = doc.active_element();
        self.open = true;

        doc.add_class(self.overlay, "active");
        doc.set_attribute(self.overlay, "aria-hidden", "false");
        doc.set_attribute(self.button, "aria-expanded", "true");
        let body = doc.body();
        doc.add_class(body, SCROLL_LOCK_CLASS);

        if let Some(first) = doc.first_with_tag(self.overlay, &["a", "button"]) {
            doc.focus(first);
        }
    }

    pub fn close(&mut self, doc: &mut Document) {
        self.open = false;

        doc.remove_class(self.overlay, "active");
        doc.set_attribute(self.overlay, "aria-hidden", "true");
        doc.set_attribute(self.button, "aria-expanded", "false");
        let body = doc.body();
        doc.remove_class(body, SCROLL_LOCK_CLASS);

        if let Some(previous) = self.last_focus.take() {
            doc.focus(previous);
        }
    }

    /// Handles a click on `target`. Returns true if the menu reacted.
    pub fn on_click(&mut self, doc: &mut Document, target: NodeId) -> bool {
        let path: Vec<NodeId> = doc.ancestors_or_self(target).collect();

        if path.contains(&self.button) {
            self.open(doc);
            true
        } else if path.contains(&self.close_button) {
            self.close(doc);
            true
        } else if path.contains(&self.overlay)
            && doc.closest_with_attribute(target, CLOSE_MARKER).is_some()
        {
            self.close(doc);
            true
        } else {
            false
        }
    }

    /// Closes on Escape. Returns true if the key was handled.
    pub fn on_key(&mut self, doc: &mut Document, key: &str) -> bool {
        if key == "Escape" {
            self.close(doc);
            true
        } else {
            false
        }
    }

    /// Leaves the page unlocked and the menu closed
    pub fn teardown(mut self, doc: &mut Document) {
        if self.open {
            self.close(doc);
        }
    }
}
