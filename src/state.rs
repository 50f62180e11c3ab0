//! Externally published state read by the render loop.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::daylight::TwilightMarks;
use crate::snapshot::Snapshot;
use crate::sprite::SpriteKind;
use crate::weather::{Forecast, WeatherCondition};

/// Read side of the data the background tasks collect
///
/// Every method must return immediately; stale or missing data is
/// expressed through the return values, never by blocking.
pub trait StateProvider {
    /// Today's twilight marks, `None` until fetched
    fn twilight(&self) -> Option<TwilightMarks>;

    /// Weather glyph for the given instant
    fn weather_sprite(&self, now: DateTime<Utc>) -> SpriteKind;

    /// Whether the system clock has been synchronized
    fn time_synced(&self) -> bool;
}

/// Snapshot cells written by one background task each
#[derive(Debug, Default)]
pub struct SharedState {
    pub forecast: Snapshot<Arc<Forecast>>,
    pub twilight: Snapshot<TwilightMarks>,
    pub time_synced: Snapshot<bool>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateProvider for SharedState {
    fn twilight(&self) -> Option<TwilightMarks> {
        self.twilight.latest()
    }

    fn weather_sprite(&self, now: DateTime<Utc>) -> SpriteKind {
        match self.forecast.latest() {
            Some(forecast) => forecast.sprite_at(now),
            None => WeatherCondition::None.sprite(true),
        }
    }

    fn time_synced(&self) -> bool {
        self.time_synced.latest().unwrap_or(false)
    }
}

impl<S: StateProvider + ?Sized> StateProvider for Arc<S> {
    fn twilight(&self) -> Option<TwilightMarks> {
        (**self).twilight()
    }

    fn weather_sprite(&self, now: DateTime<Utc>) -> SpriteKind {
        (**self).weather_sprite(now)
    }

    fn time_synced(&self) -> bool {
        (**self).time_synced()
    }
}
