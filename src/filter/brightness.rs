/// Output brightness bounds for the display driver
///
/// A daylight level in `[0, 1]` is mapped into `[min, max]` before it
/// reaches the hardware, so night-time never fully blanks the clock
/// unless `min` is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessRange {
    min: f32,
    max: f32,
}

impl BrightnessRange {
    /// Create a range; bounds are clamped to `[0, 1]` and swapped if reversed
    pub fn new(min: f32, max: f32) -> Self {
        let min = min.clamp(0.0, 1.0);
        let max = max.clamp(0.0, 1.0);
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub const fn min(self) -> f32 {
        self.min
    }

    pub const fn max(self) -> f32 {
        self.max
    }

    /// `min + (max - min) * level`, with `level` clamped to `[0, 1]`
    pub fn map(self, level: f32) -> f32 {
        let level = if level.is_nan() { 0.0 } else { level.clamp(0.0, 1.0) };
        self.min + (self.max - self.min) * level
    }
}

impl Default for BrightnessRange {
    fn default() -> Self {
        Self { min: 0.1, max: 1.0 }
    }
}
