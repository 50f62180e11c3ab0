pub mod bounds;
pub mod clock;
pub mod color;
pub mod compositor;
pub mod config;
pub mod daylight;
pub mod driver;
pub mod face;
pub mod filter;
pub mod frame_scheduler;
pub mod math8;
pub mod poller;
pub mod snapshot;
pub mod sprite;
pub mod state;
pub mod weather;

pub use bounds::{PixelMapping, Shape};
pub use clock::{ClockSource, FixedClock, SystemClock};
pub use compositor::{Compositor, FrameBuffer};
pub use config::Options;
pub use daylight::{TwilightMarks, evaluate as daylight_level};
pub use driver::{MatrixDriver, MemoryMatrix};
pub use face::{ClockFace, FaceOptions};
pub use filter::{BlendMode, BrightnessRange, ColorFilter, FilterChain};
pub use frame_scheduler::{
    FramePacer, FrameResult, RenderError, RenderScheduler, Scene, SchedulerConfig, SchedulerState,
};
pub use poller::{PollPolicy, spawn_poller};
pub use snapshot::Snapshot;
pub use sprite::{Frame, Sprite, SpriteCache, SpriteError, SpriteKind};
pub use state::{SharedState, StateProvider};
pub use weather::{Forecast, ForecastItem, WeatherCondition};

pub use color::{Rgb, Rgba};
pub use embassy_time::{Duration, Instant};
