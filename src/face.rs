//! Clock face scene: weather glyph, seconds blinker and four digits.
//!
//! Layout on a 16x16 panel, drawn back to front:
//! - weather glyph with its top-left corner at (0, 0)
//! - blinker glyph at (-2, 9), shown on even seconds
//! - hour digits at (2, 3) and (8, 3), minute digits at (2, 9) and (8, 9)

use chrono::{DateTime, Local, Timelike, Utc};
use embassy_time::Instant;

use crate::clock::ClockSource;
use crate::color::{Rgb, WHITE, rgb_from_u32};
use crate::compositor::Compositor;
use crate::daylight::{self, minute_of_day};
use crate::filter::{ColorFilter, FilterChain, single};
use crate::frame_scheduler::Scene;
use crate::sprite::{DIGITS_SPRITE, Sprite, SpriteCache, SpriteKind};
use crate::state::StateProvider;

/// Top-left corner of the hour tens digit
pub const TIME_ORIGIN: (i32, i32) = (2, 3);
/// Horizontal and vertical distance between digits
pub const DIGIT_ADVANCE: i32 = 6;
/// Index of the blinker glyph within the digit sheet
pub const BLINKER_GLYPH: usize = 10;
pub const BLINKER_POSITION: (i32, i32) = (-2, 9);
pub const WEATHER_POSITION: (i32, i32) = (0, 0);
/// Seconds each weather glyph stays on screen in demo mode
pub const DEMO_SPRITE_PERIOD_SECS: f64 = 5.0;

const BLINKER_SYNCED: Rgb = rgb_from_u32(0x80_80_80);
const BLINKER_UNSYNCED: Rgb = rgb_from_u32(0x80_00_00);

/// Presentation options of the clock face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceOptions {
    pub twelve_hour: bool,
    pub omit_leading_zero: bool,
    /// Tint applied to the digit glyphs
    pub color: Rgb,
    /// Cycle through every cached weather glyph instead of the forecast
    pub demo: bool,
}

impl Default for FaceOptions {
    fn default() -> Self {
        Self {
            twelve_hour: true,
            omit_leading_zero: true,
            color: WHITE,
            demo: false,
        }
    }
}

/// Digits to show for an hour (0-23)
///
/// In 12-hour format midnight and noon read "12".
#[allow(clippy::cast_possible_truncation)]
pub const fn hour_digits(hour: u32, twelve_hour: bool) -> [u8; 2] {
    let hour = if twelve_hour {
        match hour % 12 {
            0 => 12,
            h => h,
        }
    } else {
        hour
    };
    [(hour / 10) as u8, (hour % 10) as u8]
}

#[allow(clippy::cast_possible_truncation)]
pub const fn minute_digits(minute: u32) -> [u8; 2] {
    [(minute / 10) as u8, (minute % 10) as u8]
}

/// Frame index of an animation running at `frame_rate` frames per second
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn animation_tick(animation_secs: f64, frame_rate: f32) -> u64 {
    let ticks = libm::floor(animation_secs * f64::from(frame_rate));
    if ticks.is_finite() && ticks > 0.0 {
        ticks as u64
    } else {
        0
    }
}

/// The clock scene driven by the render loop
pub struct ClockFace<'a, C, S> {
    sprites: &'a SpriteCache,
    clock: C,
    state: S,
    options: FaceOptions,
    glyph_filters: FilterChain,
    started: Instant,
}

impl<'a, C: ClockSource, S: StateProvider> ClockFace<'a, C, S> {
    pub fn new(sprites: &'a SpriteCache, clock: C, state: S, options: FaceOptions) -> Self {
        Self {
            sprites,
            clock,
            state,
            options,
            glyph_filters: single(ColorFilter::multiply(options.color)),
            started: Instant::now(),
        }
    }

    pub const fn options(&self) -> &FaceOptions {
        &self.options
    }

    /// Daylight level for a local time
    pub fn daylight_level(&self, now: DateTime<Local>) -> f32 {
        daylight::evaluate(self.state.twilight().as_ref(), minute_of_day(now.time()))
    }

    /// Draw the whole face for `now`
    ///
    /// `animation_secs` is a monotonic time base for glyph animation, kept
    /// separate from `now` so demo time does not speed up the animations.
    pub fn compose(&self, compositor: &mut Compositor, now: DateTime<Local>, animation_secs: f64) {
        self.draw_weather(compositor, now, animation_secs);
        self.draw_blinker(compositor, now);
        self.draw_time(compositor, now);
    }

    /// Weather glyph to show at `now`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn weather_kind(&self, now: DateTime<Local>, animation_secs: f64) -> Option<SpriteKind> {
        if !self.options.demo {
            return Some(self.state.weather_sprite(now.with_timezone(&Utc)));
        }
        let count = self.sprites.kinds().count();
        if count == 0 {
            return None;
        }
        let slot = libm::floor(animation_secs.max(0.0) / DEMO_SPRITE_PERIOD_SECS) as usize;
        self.sprites.kinds().nth(slot % count)
    }

    fn draw_weather(&self, compositor: &mut Compositor, now: DateTime<Local>, animation_secs: f64) {
        let Some(kind) = self.weather_kind(now, animation_secs) else {
            return;
        };
        let Some(sprite) = self.sprites.get_kind(kind) else {
            return;
        };
        let tick = animation_tick(animation_secs, kind.frame_rate());
        if let Some(frame) = sprite.cycle(tick) {
            let (x, y) = WEATHER_POSITION;
            compositor.stamp(frame, x, y, &[]);
        }
    }

    fn draw_blinker(&self, compositor: &mut Compositor, now: DateTime<Local>) {
        if now.second() % 2 != 0 {
            return;
        }
        let Some(frame) = self.digits().and_then(|digits| digits.frame(BLINKER_GLYPH)) else {
            return;
        };
        let color = if self.state.time_synced() {
            BLINKER_SYNCED
        } else {
            BLINKER_UNSYNCED
        };
        let (x, y) = BLINKER_POSITION;
        compositor.stamp(frame, x, y, &[ColorFilter::multiply(color)]);
    }

    fn draw_time(&self, compositor: &mut Compositor, now: DateTime<Local>) {
        let Some(digits) = self.digits() else {
            return;
        };
        let [hour_tens, hour_ones] = hour_digits(now.hour(), self.options.twelve_hour);
        let [minute_tens, minute_ones] = minute_digits(now.minute());
        let (x, y) = TIME_ORIGIN;

        if !(self.options.omit_leading_zero && hour_tens == 0) {
            self.draw_digit(compositor, digits, hour_tens, x, y);
        }
        self.draw_digit(compositor, digits, hour_ones, x + DIGIT_ADVANCE, y);
        self.draw_digit(compositor, digits, minute_tens, x, y + DIGIT_ADVANCE);
        self.draw_digit(
            compositor,
            digits,
            minute_ones,
            x + DIGIT_ADVANCE,
            y + DIGIT_ADVANCE,
        );
    }

    fn draw_digit(&self, compositor: &mut Compositor, digits: &Sprite, digit: u8, x: i32, y: i32) {
        if let Some(frame) = digits.frame(usize::from(digit)) {
            compositor.stamp(frame, x, y, &self.glyph_filters);
        }
    }

    fn digits(&self) -> Option<&'a Sprite> {
        self.sprites.get(DIGITS_SPRITE)
    }
}

impl<C: ClockSource, S: StateProvider> Scene for ClockFace<'_, C, S> {
    fn brightness(&mut self) -> f32 {
        self.daylight_level(self.clock.now())
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw(&mut self, compositor: &mut Compositor) {
        let animation_secs = self.started.elapsed().as_millis() as f64 / 1000.0;
        self.compose(compositor, self.clock.now(), animation_secs);
    }
}
