//! Logo hover effect
//!
//! Letters of the logo swell and take the flag colours as the pointer
//! passes over them. The `.font-it` word glows with proximity.

use super::dom::{Document, NodeId};
use super::letters::LETTER_CLASS;

pub const LOGO_IDS: [&str; 2] = ["logo-header", "logo-footer"];
pub const GLOW_CLASS: &str = "font-it";

pub const GLOW_RADIUS: f64 = 200.0;
pub const LETTER_RADIUS: f64 = 110.0;
/// Pointer offset from a letter's centre inside which it stays white
pub const COLOUR_DEADBAND: f64 = 14.0;
pub const NEUTRAL_COLOUR: &str = "#FFF";

/// Hover effect bound to one logo element
#[derive(Debug, Clone)]
pub struct LogoEffect {
    logo: NodeId,
    glow: NodeId,
    letters: Vec<NodeId>,
    green: String,
    red: String,
}

impl LogoEffect {
    /// Binds to the logo with `id`. Requires a fine pointer, a `.font-it`
    /// child and at least one `.letter`.
    pub fn init(doc: &Document, id: &str) -> Option<Self> {
        let logo = doc.element_by_id(id)?;
        if !doc.has_fine_pointer() {
            return None;
        }

        let glow = doc.query_class(logo, GLOW_CLASS).into_iter().next()?;
        let letters = doc.query_class(logo, LETTER_CLASS);
        if letters.is_empty() {
            return None;
        }

        Some(Self {
            logo,
            glow,
            letters,
            green: doc.root_property("--it-green").to_string(),
            red: doc.root_property("--it-red").to_string(),
        })
    }

    pub fn logo(&self) -> NodeId {
        self.logo
    }

    /// Returns true if `target` is inside this logo
    pub fn contains(&self, doc: &Document, target: NodeId) -> bool {
        doc.ancestors_or_self(target).any(|n| n == self.logo)
    }

    /// Applies the effect for a pointer at viewport `client_x`
    pub fn on_mouse_move(&self, doc: &mut Document, client_x: f64) {
        let left = doc.rect(self.logo).left;
        let x = client_x - left;

        let glow_x = doc.rect(self.glow).center() - left;
        let p = ((GLOW_RADIUS - (x - glow_x).abs()) / GLOW_RADIUS).max(0.0);
        doc.set_style(
            self.glow,
            "text-shadow",
            &format!("0 0 {}px rgba(197,160,89,0.5)", 15.0 * p),
        );
        doc.set_style(self.glow, "transform", &format!("scale({})", 1.0 + p * 0.05));

        for &letter in &self.letters {
            let lx = doc.rect(letter).center() - left;
            let dx = (x - lx).abs();

            if dx < LETTER_RADIUS {
                let p = (LETTER_RADIUS - dx) / LETTER_RADIUS;
                let colour = if x > lx + COLOUR_DEADBAND {
                    self.green.as_str()
                } else if x < lx - COLOUR_DEADBAND {
                    self.red.as_str()
                } else {
                    NEUTRAL_COLOUR
                };
                doc.set_style(letter, "color", colour);
                doc.set_style(
                    letter,
                    "transform",
                    &format!("scale({}) translateY({}px)", 1.0 + p * 0.42, -p * 10.0),
                );
                doc.set_style(letter, "z-index", "20");
            } else {
                doc.set_style(letter, "color", "");
                doc.set_style(letter, "transform", "");
                doc.set_style(letter, "z-index", "10");
            }
        }
    }

    /// Clears every style the effect set
    pub fn on_mouse_leave(&self, doc: &mut Document) {
        doc.set_style(self.glow, "text-shadow", "");
        doc.set_style(self.glow, "transform", "");
        for &letter in &self.letters {
            doc.set_style(letter, "color", "");
            doc.set_style(letter, "transform", "");
            doc.set_style(letter, "z-index", "");
        }
    }
}
