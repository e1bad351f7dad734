//! Mobile submenu accordion
//!
//! Each `.mobile-acc-btn` names its panel through `aria-controls`. Opening
//! measures the panel's `.mobile-sub-inner` content; closing animates the
//! height to zero and hides the panel once the transition is over.

use super::dom::{Document, NodeId};
use super::timers::{TimerHandle, TimerQueue};
use std::collections::HashMap;

pub const BUTTON_CLASS: &str = "mobile-acc-btn";
pub const INNER_CLASS: &str = "mobile-sub-inner";
/// Delay before a collapsed panel is hidden
pub const HIDE_DELAY_MS: u64 = 260;
/// Re-measure delay after init
pub const REFRESH_DELAY_MS: u64 = 150;
/// Re-measure delay after web fonts finish loading
pub const FONTS_REFRESH_DELAY_MS: u64 = 120;
pub const MIN_OPEN_HEIGHT: f64 = 80.0;
pub const HEIGHT_PADDING: f64 = 16.0;

/// Height in pixels an open panel is given
pub fn open_height(inner_scroll_height: f64) -> f64 {
    (inner_scroll_height + HEIGHT_PADDING).max(MIN_OPEN_HEIGHT)
}

fn px(value: f64) -> String {
    format!("{value}px")
}

/// Accordion state: pending hide timers keyed by panel
#[derive(Debug, Default)]
pub struct Accordion {
    pending_hides: HashMap<NodeId, TimerHandle>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buttons under `scope`
    pub fn buttons(doc: &Document, scope: NodeId) -> Vec<NodeId> {
        doc.query_class(scope, BUTTON_CLASS)
    }

    /// Panel a button controls, if it exists
    pub fn panel_for(doc: &Document, button: NodeId) -> Option<NodeId> {
        let id = doc.attribute(button, "aria-controls")?;
        doc.element_by_id(id)
    }

    pub fn is_expanded(doc: &Document, button: NodeId) -> bool {
        doc.attribute(button, "aria-expanded") == Some("true")
    }

    /// Sets the panel's max-height from its measured content
    pub fn measure(doc: &mut Document, panel: NodeId) {
        let inner = doc
            .query_class(panel, INNER_CLASS)
            .first()
            .map(|n| doc.scroll_height(*n))
            .unwrap_or(0.0);
        doc.set_style(panel, "max-height", &px(open_height(inner)));
    }

    /// Flips the button's state and opens or collapses its panel
    pub fn toggle<A>(
        &mut self,
        doc: &mut Document,
        timers: &mut TimerQueue<A>,
        button: NodeId,
        hide_action: impl FnOnce(NodeId) -> A,
    ) {
        let Some(panel) = Self::panel_for(doc, button) else {
            return;
        };
        let expand = !Self::is_expanded(doc, button);
        doc.set_attribute(button, "aria-expanded", if expand { "true" } else { "false" });

        if let Some(handle) = self.pending_hides.remove(&panel) {
            timers.cancel(handle);
        }

        if expand {
            doc.set_hidden(panel, false);
            Self::measure(doc, panel);
        } else {
            doc.set_style(panel, "max-height", "0px");
            let handle = timers.schedule(HIDE_DELAY_MS, hide_action(panel));
            self.pending_hides.insert(panel, handle);
        }
    }

    /// Runs a due hide. Ignored if the panel was re-opened meanwhile.
    pub fn hide(&mut self, doc: &mut Document, panel: NodeId, handle: TimerHandle) {
        if self.pending_hides.get(&panel) == Some(&handle) {
            self.pending_hides.remove(&panel);
            doc.set_hidden(panel, true);
        }
    }

    /// Re-measures every open panel under `scope`
    pub fn refresh(doc: &mut Document, scope: NodeId) {
        for button in Self::buttons(doc, scope) {
            if !Self::is_expanded(doc, button) {
                continue;
            }
            if let Some(panel) = Self::panel_for(doc, button) {
                doc.set_hidden(panel, false);
                Self::measure(doc, panel);
            }
        }
    }

    pub fn has_pending_hide(&self, panel: NodeId) -> bool {
        self.pending_hides.contains_key(&panel)
    }

    /// Cancels every pending hide
    pub fn teardown<A>(&mut self, timers: &mut TimerQueue<A>) {
        for (_, handle) in self.pending_hides.drain() {
            timers.cancel(handle);
        }
    }
}
