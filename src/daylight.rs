//! Daylight-driven brightness curve.
//!
//! Brightness ramps linearly from 0 to 1 between the start of civil
//! twilight and sunrise, stays at 1 until sunset, then ramps back down
//! to 0 at the end of civil twilight.

use chrono::{NaiveTime, Timelike};
use thiserror::Error;

/// Minutes in one day
pub const MINUTES_PER_DAY: f32 = 1440.0;

/// Level used until twilight marks are known
pub const UNKNOWN_DAYLIGHT_LEVEL: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TwilightError {
    #[error("twilight marks must be non-decreasing")]
    Unordered,
    #[error("twilight mark outside of the day")]
    OutOfRange,
}

/// The four daily marks bounding the dawn and dusk ramps
///
/// Each mark is minutes since local midnight. Construction guarantees
/// `civil_twilight_begin <= sunrise <= sunset <= civil_twilight_end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwilightMarks {
    civil_twilight_begin: f32,
    sunrise: f32,
    sunset: f32,
    civil_twilight_end: f32,
}

impl TwilightMarks {
    pub fn new(
        civil_twilight_begin: f32,
        sunrise: f32,
        sunset: f32,
        civil_twilight_end: f32,
    ) -> Result<Self, TwilightError> {
        let marks = [civil_twilight_begin, sunrise, sunset, civil_twilight_end];
        if marks
            .iter()
            .any(|mark| !(0.0..=MINUTES_PER_DAY).contains(mark))
        {
            return Err(TwilightError::OutOfRange);
        }
        if marks.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(TwilightError::Unordered);
        }
        Ok(Self {
            civil_twilight_begin,
            sunrise,
            sunset,
            civil_twilight_end,
        })
    }

    /// Build marks from local wall-clock times, truncated to whole minutes
    pub fn from_times(
        civil_twilight_begin: NaiveTime,
        sunrise: NaiveTime,
        sunset: NaiveTime,
        civil_twilight_end: NaiveTime,
    ) -> Result<Self, TwilightError> {
        Self::new(
            whole_minutes(civil_twilight_begin),
            whole_minutes(sunrise),
            whole_minutes(sunset),
            whole_minutes(civil_twilight_end),
        )
    }

    pub const fn civil_twilight_begin(&self) -> f32 {
        self.civil_twilight_begin
    }

    pub const fn sunrise(&self) -> f32 {
        self.sunrise
    }

    pub const fn sunset(&self) -> f32 {
        self.sunset
    }

    pub const fn civil_twilight_end(&self) -> f32 {
        self.civil_twilight_end
    }
}

/// Daylight level in `[0, 1]` for a time of day in minutes since midnight
///
/// Without marks the neutral [`UNKNOWN_DAYLIGHT_LEVEL`] is returned.
/// Zero-length ramps behave as an instant step at the shared boundary.
pub fn evaluate(marks: Option<&TwilightMarks>, now: f32) -> f32 {
    let Some(marks) = marks else {
        return UNKNOWN_DAYLIGHT_LEVEL;
    };

    if now < marks.civil_twilight_begin {
        0.0
    } else if now < marks.sunrise {
        ramp(marks.civil_twilight_begin, marks.sunrise, now)
    } else if now < marks.sunset {
        1.0
    } else if now < marks.civil_twilight_end {
        1.0 - ramp(marks.sunset, marks.civil_twilight_end, now)
    } else {
        0.0
    }
}

/// Progress of `now` through `[start, end)`, never dividing by zero
fn ramp(start: f32, end: f32, now: f32) -> f32 {
    let span = end - start;
    if span <= 0.0 {
        return if now < end { 0.0 } else { 1.0 };
    }
    ((now - start) / span).clamp(0.0, 1.0)
}

/// Minutes since midnight including the fractional seconds
#[allow(clippy::cast_precision_loss)]
pub fn minute_of_day(time: NaiveTime) -> f32 {
    time.num_seconds_from_midnight() as f32 / 60.0
}

#[allow(clippy::cast_precision_loss)]
fn whole_minutes(time: NaiveTime) -> f32 {
    (time.hour() * 60 + time.minute()) as f32
}
