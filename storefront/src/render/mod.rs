//! View models for the presentation layer
//!
//! Renderers are pure: they read catalog records and price displays and
//! return plain data. Markup is the presentation layer's concern.

pub mod card;
pub mod modal;

pub use card::{CardRenderer, GIFT_LINE, PLACEHOLDER_IMAGE, ProductCard};
pub use modal::{ModalContext, ModalView, SizeOption};

use serde::Serialize;

/// Five-star rating split into glyph counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    pub const MAX: u8 = 5;

    /// `full = floor(rating)`, a half star for any fractional part
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_finite() {
            rating.clamp(0.0, f64::from(Self::MAX))
        } else {
            0.0
        };
        let full = rating.floor() as u8;
        let half = rating.fract() > 0.0;
        Self {
            full,
            half,
            empty: Self::MAX - full - u8::from(half),
        }
    }

    pub fn glyphs(&self) -> String {
        let mut out = "★".repeat(self.full as usize);
        if self.half {
            out.push('⯪');
        }
        out.push_str(&"☆".repeat(self.empty as usize));
        out
    }
}
