//! Closed set of weather glyph sprites.
//!
//! Names match the file stems of the weather icon sheets, so a sheet
//! imported from `sun and cloud.png` is found by `SpriteKind::SunAndCloud`.

const SPRITE_NAME_NOTHING: &str = "nothing";
const SPRITE_NAME_DISCONNECTED: &str = "disconnected";
const SPRITE_NAME_LOADING: &str = "loading";
const SPRITE_NAME_SUN: &str = "sun";
const SPRITE_NAME_SUN_AND_CLOUD: &str = "sun and cloud";
const SPRITE_NAME_SUN_AND_HAZE: &str = "sun and haze";
const SPRITE_NAME_CLOUDS: &str = "clouds";
const SPRITE_NAME_FOG: &str = "fog";
const SPRITE_NAME_RAIN: &str = "rain";
const SPRITE_NAME_RAIN_AND_CLOUD: &str = "rain and cloud";
const SPRITE_NAME_STORM: &str = "storm";
const SPRITE_NAME_SNOW: &str = "snow";
const SPRITE_NAME_SNOW_AND_CLOUD: &str = "snow and cloud";
const SPRITE_NAME_HOT: &str = "hot";
const SPRITE_NAME_COLD: &str = "cold";
const SPRITE_NAME_WIND: &str = "wind";
const SPRITE_NAME_MOON: &str = "moon";
const SPRITE_NAME_MOON_AND_CLOUD: &str = "moon and cloud";
const SPRITE_NAME_MOON_AND_HAZE: &str = "moon and haze";

/// Known weather glyphs that can be drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    /// Draw no weather glyph
    Nothing,
    Disconnected,
    Loading,
    Sun,
    SunAndCloud,
    SunAndHaze,
    Clouds,
    Fog,
    Rain,
    RainAndCloud,
    Storm,
    Snow,
    SnowAndCloud,
    Hot,
    Cold,
    Wind,
    Moon,
    MoonAndCloud,
    MoonAndHaze,
}

impl SpriteKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 19] = [
        Self::Nothing,
        Self::Disconnected,
        Self::Loading,
        Self::Sun,
        Self::SunAndCloud,
        Self::SunAndHaze,
        Self::Clouds,
        Self::Fog,
        Self::Rain,
        Self::RainAndCloud,
        Self::Storm,
        Self::Snow,
        Self::SnowAndCloud,
        Self::Hot,
        Self::Cold,
        Self::Wind,
        Self::Moon,
        Self::MoonAndCloud,
        Self::MoonAndHaze,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nothing => SPRITE_NAME_NOTHING,
            Self::Disconnected => SPRITE_NAME_DISCONNECTED,
            Self::Loading => SPRITE_NAME_LOADING,
            Self::Sun => SPRITE_NAME_SUN,
            Self::SunAndCloud => SPRITE_NAME_SUN_AND_CLOUD,
            Self::SunAndHaze => SPRITE_NAME_SUN_AND_HAZE,
            Self::Clouds => SPRITE_NAME_CLOUDS,
            Self::Fog => SPRITE_NAME_FOG,
            Self::Rain => SPRITE_NAME_RAIN,
            Self::RainAndCloud => SPRITE_NAME_RAIN_AND_CLOUD,
            Self::Storm => SPRITE_NAME_STORM,
            Self::Snow => SPRITE_NAME_SNOW,
            Self::SnowAndCloud => SPRITE_NAME_SNOW_AND_CLOUD,
            Self::Hot => SPRITE_NAME_HOT,
            Self::Cold => SPRITE_NAME_COLD,
            Self::Wind => SPRITE_NAME_WIND,
            Self::Moon => SPRITE_NAME_MOON,
            Self::MoonAndCloud => SPRITE_NAME_MOON_AND_CLOUD,
            Self::MoonAndHaze => SPRITE_NAME_MOON_AND_HAZE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }

    /// Animation speed in frames per second
    ///
    /// Zero means the glyph is static and always shows its first frame.
    pub const fn frame_rate(self) -> f32 {
        match self {
            Self::Nothing | Self::Disconnected => 1.0,
            Self::Sun | Self::SunAndCloud | Self::SunAndHaze | Self::Clouds | Self::Fog => 0.5,
            Self::MoonAndCloud => 0.5,
            Self::Moon | Self::MoonAndHaze => 0.0,
            Self::Snow | Self::SnowAndCloud => 2.0,
            Self::Loading
            | Self::Rain
            | Self::RainAndCloud
            | Self::Storm
            | Self::Hot
            | Self::Wind => 6.0,
            Self::Cold => 12.0,
        }
    }
}
