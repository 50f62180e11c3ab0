mod utils;

use rgb::RGBA8;
use smart_leds::RGB8;

pub use utils::{average_colors, blend_over, rgb_from_array, rgb_from_u32};

/// Displayed pixel: already composited, no alpha
pub type Rgb = RGB8;
/// Sprite pixel with straight (non-premultiplied) alpha
pub type Rgba = RGBA8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
