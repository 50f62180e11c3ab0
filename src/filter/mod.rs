//! Per-draw color filters and output brightness mapping.

mod brightness;

use heapless::Vec;

use crate::{color::Rgb, math8::mul8};

pub use brightness::BrightnessRange;

/// Maximum number of filters carried by one draw call
pub const MAX_FILTERS: usize = 4;

/// Fixed-capacity, ordered list of filters for one draw call
pub type FilterChain = Vec<ColorFilter, MAX_FILTERS>;

/// How a filter combines its color with the source pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Per-channel `src * filter / 255`
    Multiply,
}

/// A blend mode paired with the color it applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorFilter {
    pub mode: BlendMode,
    pub color: Rgb,
}

impl ColorFilter {
    /// Create a multiply (tint) filter
    pub const fn multiply(color: Rgb) -> Self {
        Self {
            mode: BlendMode::Multiply,
            color,
        }
    }

    /// Apply this filter to a single color
    pub const fn apply(self, src: Rgb) -> Rgb {
        match self.mode {
            BlendMode::Multiply => Rgb {
                r: mul8(src.r, self.color.r),
                g: mul8(src.g, self.color.g),
                b: mul8(src.b, self.color.b),
            },
        }
    }
}

/// Apply filters in order; an empty list is the identity
pub fn apply_filters(src: Rgb, filters: &[ColorFilter]) -> Rgb {
    filters.iter().fold(src, |acc, filter| filter.apply(acc))
}

/// Build a chain holding a single filter
pub fn single(filter: ColorFilter) -> FilterChain {
    core::iter::once(filter).collect()
}
