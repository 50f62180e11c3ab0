use crate::{
    color::Rgb,
    math8::{average8, blend_alpha8},
};

/// Composite `src` over `old` with the given alpha
///
/// # Arguments
/// * `old` - Color already in the buffer
/// * `src` - Incoming color
/// * `alpha` - Opacity of `src` (0 = keep `old`, 255 = replace with `src`)
#[inline]
pub fn blend_over(old: Rgb, src: Rgb, alpha: u8) -> Rgb {
    Rgb {
        r: blend_alpha8(old.r, src.r, alpha),
        g: blend_alpha8(old.g, src.g, alpha),
        b: blend_alpha8(old.b, src.b, alpha),
    }
}

/// Equal-weight mix of two colors
#[inline]
pub const fn average_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: average8(a.r, b.r),
        g: average8(a.g, b.g),
        b: average8(a.b, b.b),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Create an RGB color from `[r, g, b]`
pub const fn rgb_from_array(color: [u8; 3]) -> Rgb {
    Rgb {
        r: color[0],
        g: color[1],
        b: color[2],
    }
}
