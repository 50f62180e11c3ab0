//! Weather conditions and their glyphs.
//!
//! Forecast codes follow the WMO weather interpretation table. Negative
//! codes are sentinels used while no forecast is available.

use chrono::{DateTime, Utc};

use crate::sprite::SpriteKind;

/// WMO weather condition, plus connection-state sentinels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCondition {
    Disconnected,
    Loading,
    /// No forecast to show
    None,
    ClearSky,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    FreezingDrizzle,
    SlightRain,
    Rain,
    FreezingRain,
    Snow,
    SnowGrains,
    RainShowers,
    SnowShowers,
    Thunderstorm,
    ThunderstormWithHail,
    /// Any code not listed above
    Unknown(i32),
}

impl WeatherCondition {
    pub const fn from_code(code: i32) -> Self {
        match code {
            -3 => Self::Disconnected,
            -2 => Self::Loading,
            -1 => Self::None,
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            56 | 57 => Self::FreezingDrizzle,
            61 => Self::SlightRain,
            63 | 65 => Self::Rain,
            66 | 67 => Self::FreezingRain,
            71 | 73 | 75 => Self::Snow,
            77 => Self::SnowGrains,
            80..=82 => Self::RainShowers,
            85 | 86 => Self::SnowShowers,
            95 => Self::Thunderstorm,
            96 | 99 => Self::ThunderstormWithHail,
            other => Self::Unknown(other),
        }
    }

    /// Glyph for this condition; clear and partly cloudy skies differ by day and night
    pub const fn sprite(self, is_day: bool) -> SpriteKind {
        match self {
            Self::Disconnected => SpriteKind::Disconnected,
            Self::Loading => SpriteKind::Loading,
            Self::None | Self::Unknown(_) => SpriteKind::Nothing,
            Self::ClearSky | Self::MainlyClear => {
                if is_day {
                    SpriteKind::Sun
                } else {
                    SpriteKind::Moon
                }
            }
            Self::PartlyCloudy => {
                if is_day {
                    SpriteKind::SunAndCloud
                } else {
                    SpriteKind::MoonAndCloud
                }
            }
            Self::Overcast => SpriteKind::Clouds,
            Self::Fog => SpriteKind::Fog,
            Self::SlightRain => SpriteKind::Rain,
            Self::Drizzle
            | Self::FreezingDrizzle
            | Self::Rain
            | Self::FreezingRain
            | Self::RainShowers => SpriteKind::RainAndCloud,
            Self::Snow | Self::SnowGrains => SpriteKind::Snow,
            Self::SnowShowers => SpriteKind::SnowAndCloud,
            Self::Thunderstorm | Self::ThunderstormWithHail => SpriteKind::Storm,
        }
    }
}

/// One hourly forecast entry
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastItem {
    pub time: DateTime<Utc>,
    pub is_day: bool,
    pub temperature: f32,
    pub code: i32,
    pub wind_speed: f32,
}

impl ForecastItem {
    pub const fn condition(&self) -> WeatherCondition {
        WeatherCondition::from_code(self.code)
    }

    pub const fn sprite(&self) -> SpriteKind {
        self.condition().sprite(self.is_day)
    }
}

/// Time-ordered forecast as published by the weather poller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    items: Vec<ForecastItem>,
}

impl Forecast {
    /// Create a forecast; items are sorted by time
    pub fn new(mut items: Vec<ForecastItem>) -> Self {
        items.sort_by_key(|item| item.time);
        Self { items }
    }

    pub fn items(&self) -> &[ForecastItem] {
        &self.items
    }

    /// First entry that starts after `now`
    pub fn current(&self, now: DateTime<Utc>) -> Option<&ForecastItem> {
        self.items.iter().find(|item| now < item.time)
    }

    /// Glyph to show at `now`; [`SpriteKind::Nothing`] past the end of the forecast
    pub fn sprite_at(&self, now: DateTime<Utc>) -> SpriteKind {
        self.current(now)
            .map_or(SpriteKind::Nothing, ForecastItem::sprite)
    }
}
