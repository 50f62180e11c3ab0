//! Static options record.
//!
//! Every field has a default, so a partial document deserializes into a
//! complete record. Reading the document is left to the embedder.

use embassy_time::Duration;
use serde::Deserialize;

use crate::bounds::PixelMapping;
use crate::color::rgb_from_array;
use crate::face::FaceOptions;
use crate::filter::BrightnessRange;
use crate::frame_scheduler::{SchedulerConfig, frame_duration_for_fps};
use crate::poller::PollPolicy;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Options {
    pub clock: ClockOptions,
    pub led: LedOptions,
    pub weather: WeatherOptions,
    pub sunrise: SunriseOptions,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClockOptions {
    #[serde(rename = "12hrFormat")]
    pub twelve_hour_format: bool,
    pub demo: bool,
    pub omit_leading_zeros: bool,
    pub color: [u8; 3],
}

impl Default for ClockOptions {
    fn default() -> Self {
        Self {
            twelve_hour_format: true,
            demo: false,
            omit_leading_zeros: true,
            color: [255, 255, 255],
        }
    }
}

impl ClockOptions {
    pub const fn face_options(&self) -> FaceOptions {
        FaceOptions {
            twelve_hour: self.twelve_hour_format,
            omit_leading_zero: self.omit_leading_zeros,
            color: rgb_from_array(self.color),
            demo: self.demo,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LedOptions {
    pub fps: f32,
    pub min_brightness: f32,
    pub max_brightness: f32,
    pub rotation: u16,
    /// Blend each frame with the previous one
    pub ghosting: bool,
    /// Panel columns are wired right to left
    pub mirror_x: bool,
    pub debt_cap_ms: u64,
}

impl Default for LedOptions {
    fn default() -> Self {
        Self {
            fps: 10.0,
            min_brightness: 0.1,
            max_brightness: 1.0,
            rotation: 0,
            ghosting: true,
            mirror_x: true,
            debt_cap_ms: 500,
        }
    }
}

impl LedOptions {
    pub fn brightness_range(&self) -> BrightnessRange {
        BrightnessRange::new(self.min_brightness, self.max_brightness)
    }

    pub fn scheduler_config(&self) -> SchedulerConfig {
        SchedulerConfig {
            frame_duration: frame_duration_for_fps(self.fps),
            debt_cap: saturating_millis(self.debt_cap_ms),
            brightness: self.brightness_range(),
            rotation: self.rotation,
            mapping: PixelMapping {
                mirror_x: self.mirror_x,
                mirror_y: false,
            },
            ghosting: self.ghosting,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeatherOptions {
    pub enabled: bool,
    /// Seconds between successful fetches
    pub update_interval: u64,
    /// Seconds before retrying a failed fetch
    pub retry_interval: u64,
}

impl Default for WeatherOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            update_interval: 1800,
            retry_interval: 60,
        }
    }
}

impl WeatherOptions {
    pub const fn policy(&self) -> PollPolicy {
        PollPolicy::new(
            saturating_secs(self.update_interval),
            saturating_secs(self.retry_interval),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SunriseOptions {
    pub enabled: bool,
    pub update_interval: u64,
    pub retry_interval: u64,
}

impl Default for SunriseOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            update_interval: 86_400,
            retry_interval: 60,
        }
    }
}

impl SunriseOptions {
    pub const fn policy(&self) -> PollPolicy {
        PollPolicy::new(
            saturating_secs(self.update_interval),
            saturating_secs(self.retry_interval),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Intervals too long for the tick counter are treated as "never"
const fn saturating_secs(secs: u64) -> Duration {
    match Duration::try_from_secs(secs) {
        Some(duration) => duration,
        None => Duration::MAX,
    }
}

const fn saturating_millis(millis: u64) -> Duration {
    match Duration::try_from_millis_floor(millis) {
        Some(duration) => duration,
        None => Duration::MAX,
    }
}
