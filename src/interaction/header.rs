//! Scroll-driven header state

use super::dom::{Document, NodeId};

pub const HEADER_ID: &str = "main-header";
/// Past this offset the header carries `scrolled`
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// Past this offset scrolling down hides the header (`nav-up`)
pub const NAV_UP_THRESHOLD: f64 = 100.0;

/// Tracks the last scroll offset for the header
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    header: NodeId,
    last_y: f64,
}

impl ScrollTracker {
    /// Attaches to `#main-header`; `None` if the page has none
    pub fn init(doc: &Document) -> Option<Self> {
        let header = doc.element_by_id(HEADER_ID)?;
        Some(Self {
            header,
            last_y: doc.scroll_y(),
        })
    }

    pub fn header(&self) -> NodeId {
        self.header
    }

    pub fn last_y(&self) -> f64 {
        self.last_y
    }

    /// Applies the header classes for a scroll to `y`
    pub fn on_scroll(&mut self, doc: &mut Document, y: f64) {
        let moving_down = y > self.last_y && y > NAV_UP_THRESHOLD;
        doc.toggle_class(self.header, "nav-up", moving_down);
        doc.toggle_class(self.header, "scrolled", y > SCROLLED_THRESHOLD);
        self.last_y = y.max(0.0);
    }

    /// Removes the classes this tracker manages
    pub fn teardown(self, doc: &mut Document) {
        doc.remove_class(self.header, "nav-up");
        doc.remove_class(self.header, "scrolled");
    }
}
