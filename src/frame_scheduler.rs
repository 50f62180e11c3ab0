//! Fixed-rate render loop with drift compensation.
//!
//! Each tick clears the compositor, forwards the scene brightness to the
//! driver, lets the scene draw, flushes the finished frame and then
//! sleeps for whatever is left of the frame period. Overruns are carried
//! forward as debt that later ticks pay back by sleeping less, so the
//! long-run frame rate holds. Debt is capped to bound catch-up bursts.

use std::sync::atomic::{AtomicBool, Ordering};

use embassy_time::{Duration, Instant};
use log::{debug, info, warn};
use thiserror::Error;

use crate::bounds::PixelMapping;
use crate::compositor::Compositor;
use crate::driver::MatrixDriver;
use crate::filter::BrightnessRange;

/// Default target frame rate (10 FPS).
pub const DEFAULT_FPS: u32 = 10;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Default ceiling for carried-over overrun time.
pub const DEFAULT_DEBT_CAP: Duration = Duration::from_millis(500);

/// Convert a scheduler duration into one `std::thread::sleep` accepts
pub fn to_std_duration(duration: Duration) -> core::time::Duration {
    core::time::Duration::from_micros(duration.as_micros())
}

/// Frame period for a frame rate; non-positive rates fall back to the default
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn frame_duration_for_fps(fps: f32) -> Duration {
    if fps.is_nan() || fps <= 0.0 {
        return DEFAULT_FRAME_DURATION;
    }
    // Periods too long for the tick counter saturate
    Duration::try_from_micros_floor(libm::roundf(1_000_000.0 / fps) as u64)
        .unwrap_or(Duration::MAX)
}

/// Result of pacing one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// How long to wait before the next frame (zero while paying off debt).
    pub sleep_duration: Duration,
    /// Overrun still owed after this frame.
    pub debt: Duration,
}

/// Debt-tracking frame pacer
///
/// Given how long a frame took, decides how long to sleep. The sleep is
/// never negative and the debt never exceeds the cap.
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_duration: Duration,
    debt: Duration,
    debt_cap: Duration,
}

impl FramePacer {
    pub const fn new(frame_duration: Duration, debt_cap: Duration) -> Self {
        Self {
            frame_duration,
            debt: Duration::MIN,
            debt_cap,
        }
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    pub const fn debt(&self) -> Duration {
        self.debt
    }

    pub const fn debt_cap(&self) -> Duration {
        self.debt_cap
    }

    /// Forget any accumulated debt
    pub fn reset(&mut self) {
        self.debt = Duration::MIN;
    }

    /// Account for a frame that took `elapsed` and return the sleep to apply
    pub fn pace(&mut self, elapsed: Duration) -> FrameResult {
        let sleep_duration = match self.frame_duration.checked_sub(elapsed) {
            // Enough slack to pay everything back
            Some(slack) if slack >= self.debt => {
                let sleep = slack - self.debt;
                self.debt = Duration::MIN;
                sleep
            }
            // Some slack, but not enough: pay back part of the debt
            Some(slack) => {
                self.debt = (self.debt - slack).min(self.debt_cap);
                Duration::MIN
            }
            // Overrun
            None => {
                let overrun = elapsed - self.frame_duration;
                self.debt = self
                    .debt
                    .checked_add(overrun)
                    .unwrap_or(Duration::MAX)
                    .min(self.debt_cap);
                debug!(
                    "[Scheduler] Frame overran by {}us, debt {}us",
                    overrun.as_micros(),
                    self.debt.as_micros()
                );
                Duration::MIN
            }
        };

        FrameResult {
            sleep_duration,
            debt: self.debt,
        }
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_DURATION, DEFAULT_DEBT_CAP)
    }
}

/// What the render loop draws every tick
pub trait Scene {
    /// Daylight level in `[0, 1]` for this tick
    fn brightness(&mut self) -> f32;

    /// Compose the frame; the compositor has already been cleared
    fn draw(&mut self, compositor: &mut Compositor);
}

/// Render loop configuration
#[derive(Debug, Clone, Copy)]
pub struct SchedulerConfig {
    pub frame_duration: Duration,
    pub debt_cap: Duration,
    pub brightness: BrightnessRange,
    /// Panel rotation in degrees
    pub rotation: u16,
    pub mapping: PixelMapping,
    /// Mix every flushed frame 50/50 with the previous one
    pub ghosting: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            frame_duration: DEFAULT_FRAME_DURATION,
            debt_cap: DEFAULT_DEBT_CAP,
            brightness: BrightnessRange::default(),
            rotation: 0,
            mapping: PixelMapping::IDENTITY,
            ghosting: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
    Stopped,
}

#[derive(Debug, Error)]
pub enum RenderError<E> {
    #[error("matrix driver failed")]
    Driver(#[source] E),
    #[error("render loop already started")]
    NotIdle,
}

/// Owns the compositor and the driver and drives the frame loop
pub struct RenderScheduler<D: MatrixDriver> {
    driver: D,
    compositor: Compositor,
    pacer: FramePacer,
    brightness: BrightnessRange,
    mapping: PixelMapping,
    state: SchedulerState,
}

impl<D: MatrixDriver> RenderScheduler<D> {
    /// Create a scheduler sized to the driver and apply the panel rotation
    pub fn new(mut driver: D, config: &SchedulerConfig) -> Result<Self, RenderError<D::Error>> {
        driver
            .set_rotation(config.rotation)
            .map_err(RenderError::Driver)?;
        let shape = driver.shape();
        Ok(Self {
            driver,
            compositor: Compositor::new(shape, config.ghosting),
            pacer: FramePacer::new(config.frame_duration, config.debt_cap),
            brightness: config.brightness,
            mapping: config.mapping,
            state: SchedulerState::Idle,
        })
    }

    pub const fn state(&self) -> SchedulerState {
        self.state
    }

    pub const fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    pub const fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Render and present a single frame, without pacing
    pub fn render_frame<S: Scene + ?Sized>(
        &mut self,
        scene: &mut S,
    ) -> Result<(), RenderError<D::Error>> {
        self.compositor.clear();
        self.driver.clear().map_err(RenderError::Driver)?;

        let level = scene.brightness();
        self.driver
            .set_brightness(self.brightness.map(level))
            .map_err(RenderError::Driver)?;

        scene.draw(&mut self.compositor);

        let shape = self.compositor.shape();
        let frame = self.compositor.snapshot_and_swap();
        for (x, y, color) in frame.cells() {
            let (x, y) = self.mapping.map(x, y, shape);
            self.driver
                .set_pixel(x, y, color)
                .map_err(RenderError::Driver)?;
        }
        self.driver.show().map_err(RenderError::Driver)
    }

    /// Run the loop until `cancel` is set, then power the panel off
    ///
    /// A driver failure ends the loop immediately after a best-effort
    /// power-off.
    pub fn run<S: Scene + ?Sized>(
        &mut self,
        scene: &mut S,
        cancel: &AtomicBool,
    ) -> Result<(), RenderError<D::Error>> {
        if self.state != SchedulerState::Idle {
            return Err(RenderError::NotIdle);
        }
        self.state = SchedulerState::Running;
        info!(
            "[Scheduler] Started, frame period {}us",
            self.pacer.frame_duration().as_micros()
        );

        while !cancel.load(Ordering::Relaxed) {
            let started = Instant::now();
            if let Err(err) = self.render_frame(scene) {
                warn!("[Scheduler] Driver failure, powering off");
                let _ = self.driver.off();
                self.state = SchedulerState::Stopped;
                return Err(err);
            }
            let result = self.pacer.pace(started.elapsed());
            if result.sleep_duration.as_ticks() > 0 {
                std::thread::sleep(to_std_duration(result.sleep_duration));
            }
        }

        self.state = SchedulerState::Stopped;
        info!("[Scheduler] Stopped");
        self.driver.off().map_err(RenderError::Driver)
    }
}
