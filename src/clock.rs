//! Wall-clock sources for the clock face.

use chrono::{DateTime, Local, TimeDelta};

/// How much faster than real time the demo clock runs
pub const DEMO_SPEEDUP: i32 = 600;

/// Source of the local time shown on the face
pub trait ClockSource {
    fn now(&self) -> DateTime<Local>;
}

/// The system clock, optionally accelerated for demos
#[derive(Debug, Clone)]
pub struct SystemClock {
    /// Real time at which the demo clock started
    demo_origin: Option<DateTime<Local>>,
}

impl SystemClock {
    /// Real local time
    pub const fn new() -> Self {
        Self { demo_origin: None }
    }

    /// Virtual time starting now and running [`DEMO_SPEEDUP`] times faster
    pub fn demo() -> Self {
        Self {
            demo_origin: Some(Local::now()),
        }
    }

    pub fn with_demo(demo: bool) -> Self {
        if demo { Self::demo() } else { Self::new() }
    }

    pub const fn is_demo(&self) -> bool {
        self.demo_origin.is_some()
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSource for SystemClock {
    fn now(&self) -> DateTime<Local> {
        let real = Local::now();
        match self.demo_origin {
            Some(origin) => accelerate(origin, real, DEMO_SPEEDUP),
            None => real,
        }
    }
}

/// Virtual time that has advanced `factor` times faster than `real` since `origin`
pub fn accelerate(origin: DateTime<Local>, real: DateTime<Local>, factor: i32) -> DateTime<Local> {
    let elapsed = real.signed_duration_since(origin);
    let scaled = elapsed.checked_mul(factor).unwrap_or(TimeDelta::zero());
    origin.checked_add_signed(scaled).unwrap_or(real)
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl ClockSource for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
