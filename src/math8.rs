//! 8-bit channel math shared by filters and the compositor.

/// Multiply two 8-bit values, treating 255 as 1.0
///
/// The result is truncated, so `mul8(x, 255) == x` and `mul8(x, 0) == 0`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn mul8(value: u8, factor: u8) -> u8 {
    ((value as u16 * factor as u16) / 255) as u8
}

/// Blend `src` over `old` with an 8-bit alpha (0 = keep `old`, 255 = `src`)
///
/// Computes `round(old * (1 - a) + src * a)` with `a = alpha / 255`,
/// clamped to the channel range.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn blend_alpha8(old: u8, src: u8, alpha: u8) -> u8 {
    match alpha {
        0 => old,
        255 => src,
        _ => {
            let a = f32::from(alpha) / 255.0;
            let mixed = f32::from(old) * (1.0 - a) + f32::from(src) * a;
            libm::roundf(mixed).clamp(0.0, 255.0) as u8
        }
    }
}

/// Average two 8-bit values, rounding down
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn average8(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16) / 2) as u8
}

