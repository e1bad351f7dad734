//! Page interaction behaviours
//!
//! Controllers for the site's client-side behaviour, written against a
//! small in-memory [`Document`]. [`Site`] wires them together the way a
//! page load does and routes host events (scroll, click, key, pointer,
//! elapsed time) to them.

pub mod accordion;
pub mod dom;
pub mod header;
pub mod letters;
pub mod logo;
pub mod menu;
pub mod nav;
pub mod timers;

pub use accordion::Accordion;
pub use dom::{Document, NodeId, Rect};
pub use header::ScrollTracker;
pub use letters::build_letters;
pub use logo::{LOGO_IDS, LogoEffect};
pub use menu::MenuController;
pub use nav::{Section, apply_active_nav};
pub use timers::{TimerHandle, TimerQueue};

use tracing::debug;

/// Work scheduled for later by the behaviours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    HidePanel(NodeId),
    RefreshAccordions,
}

/// Every behaviour bound to one page
#[derive(Debug)]
pub struct Site {
    scope: NodeId,
    section: Section,
    header: Option<ScrollTracker>,
    menu: Option<MenuController>,
    accordion: Option<Accordion>,
    logos: Vec<LogoEffect>,
    timers: TimerQueue<Deferred>,
}

impl Site {
    /// Binds every behaviour to the whole document
    pub fn init(doc: &mut Document) -> Self {
        let root = doc.root();
        Self::init_within(doc, root)
    }

    /// Binds the behaviours, building letters and navigation state under
    /// `scope` only. Safe to call again on the same scope.
    pub fn init_within(doc: &mut Document, scope: NodeId) -> Self {
        build_letters(doc, scope);
        let section = apply_active_nav(doc, scope);

        let mut timers = TimerQueue::new();
        let accordion = if Accordion::buttons(doc, scope).is_empty() {
            None
        } else {
            Accordion::refresh(doc, scope);
            timers.schedule(accordion::REFRESH_DELAY_MS, Deferred::RefreshAccordions);
            Some(Accordion::new())
        };

        let logos: Vec<LogoEffect> = LOGO_IDS
            .iter()
            .filter_map(|id| LogoEffect::init(doc, id))
            .collect();

        let site = Self {
            scope,
            section,
            header: ScrollTracker::init(doc),
            menu: MenuController::init(doc),
            accordion,
            logos,
            timers,
        };

        debug!(
            section = section.as_str(),
            header = site.header.is_some(),
            menu = site.menu.is_some(),
            accordion = site.accordion.is_some(),
            logos = site.logos.len(),
            "page behaviours bound"
        );
        site
    }

    pub fn active_section(&self) -> Section {
        self.section
    }

    pub fn menu(&self) -> Option<&MenuController> {
        self.menu.as_ref()
    }

    pub fn scroll_tracker(&self) -> Option<&ScrollTracker> {
        self.header.as_ref()
    }

    pub fn timers(&self) -> &TimerQueue<Deferred> {
        &self.timers
    }

    pub fn on_scroll(&mut self, doc: &mut Document, y: f64) {
        doc.set_scroll_y(y);
        if let Some(header) = self.header.as_mut() {
            header.on_scroll(doc, y);
        }
    }

    /// Routes a click on `target`. Returns true if a behaviour reacted.
    pub fn on_click(&mut self, doc: &mut Document, target: NodeId) -> bool {
        let mut handled = false;

        if let Some(accordion) = self.accordion.as_mut() {
            let button = doc
                .closest_with_class(target, accordion::BUTTON_CLASS)
                .filter(|b| doc.ancestors_or_self(*b).any(|n| n == self.scope));
            if let Some(button) = button {
                accordion.toggle(doc, &mut self.timers, button, Deferred::HidePanel);
                handled = true;
            }
        }

        if let Some(menu) = self.menu.as_mut() {
            handled |= menu.on_click(doc, target);
        }

        handled
    }

    pub fn on_keydown(&mut self, doc: &mut Document, key: &str) -> bool {
        self.menu
            .as_mut()
            .is_some_and(|menu| menu.on_key(doc, key))
    }

    /// Pointer moved over `target` at viewport `client_x`
    pub fn on_mouse_move(&mut self, doc: &mut Document, target: NodeId, client_x: f64) {
        for logo in &self.logos {
            if logo.contains(doc, target) {
                logo.on_mouse_move(doc, client_x);
            }
        }
    }

    /// Pointer left `element`
    pub fn on_mouse_leave(&mut self, doc: &mut Document, element: NodeId) {
        for logo in self.logos.iter().filter(|l| l.logo() == element) {
            logo.on_mouse_leave(doc);
        }
    }

    /// Web fonts finished loading; open panels are re-measured shortly after
    pub fn fonts_ready(&mut self) {
        if self.accordion.is_some() {
            self.timers
                .schedule(accordion::FONTS_REFRESH_DELAY_MS, Deferred::RefreshAccordions);
        }
    }

    /// Moves time forward and runs whatever came due
    pub fn advance(&mut self, doc: &mut Document, elapsed_ms: u64) {
        for (handle, action) in self.timers.advance(elapsed_ms) {
            match action {
                Deferred::HidePanel(panel) => {
                    if let Some(accordion) = self.accordion.as_mut() {
                        accordion.hide(doc, panel, handle);
                    }
                }
                Deferred::RefreshAccordions => Accordion::refresh(doc, self.scope),
            }
        }
    }

    /// Unbinds everything: closes the menu, clears header classes and
    /// drops pending timers
    pub fn teardown(mut self, doc: &mut Document) {
        if let Some(header) = self.header.take() {
            header.teardown(doc);
        }
        if let Some(menu) = self.menu.take() {
            menu.teardown(doc);
        }
        if let Some(accordion) = self.accordion.as_mut() {
            accordion.teardown(&mut self.timers);
        }
        for logo in &self.logos {
            logo.on_mouse_leave(doc);
        }
        self.timers.clear();
    }
}
