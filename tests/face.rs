mod tests {
    use chrono::{DateTime, Local, TimeZone, Utc};
    use myrtio_matrix_composer::face::{animation_tick, hour_digits, minute_digits};
    use myrtio_matrix_composer::{
        BrightnessRange, ClockFace, Compositor, FaceOptions, FixedClock, Frame, MemoryMatrix,
        RenderScheduler, Rgb, Rgba, Scene, SchedulerConfig, Shape, Sprite, SpriteCache, SpriteKind,
        StateProvider, TwilightMarks,
    };

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    struct StubState {
        synced: bool,
        weather: SpriteKind,
        twilight: Option<TwilightMarks>,
    }

    impl StateProvider for StubState {
        fn twilight(&self) -> Option<TwilightMarks> {
            self.twilight
        }

        fn weather_sprite(&self, _now: DateTime<Utc>) -> SpriteKind {
            self.weather
        }

        fn time_synced(&self) -> bool {
            self.synced
        }
    }

    fn stub(synced: bool) -> StubState {
        StubState {
            synced,
            weather: SpriteKind::Nothing,
            twilight: None,
        }
    }

    /// Red channel a glyph leaves at its anchor pixel
    fn code(digit: u8) -> u8 {
        digit * 10 + 5
    }

    fn opaque(r: u8, g: u8, b: u8) -> Rgba {
        Rgba { r, g, b, a: 255 }
    }

    /// Digits 0-9 as 3x1 frames marked at their first pixel, then a
    /// blinker marked at its last pixel
    fn digit_sheet() -> Sprite {
        let clear = Rgba::default();
        let mut frames: Vec<Frame> = (0..10)
            .map(|digit| {
                Frame::from_pixels(3, 1, vec![opaque(code(digit), 0, 0), clear, clear]).unwrap()
            })
            .collect();
        frames.push(Frame::from_pixels(3, 1, vec![clear, clear, opaque(255, 255, 255)]).unwrap());
        Sprite::new("digits", frames)
    }

    fn weather_sprite(kind: SpriteKind, frames: u8) -> Sprite {
        let frames = (1..=frames)
            .map(|n| Frame::solid(1, 1, opaque(0, n, 0)))
            .collect();
        Sprite::new(kind.as_str(), frames)
    }

    fn cache() -> SpriteCache {
        let mut cache = SpriteCache::new();
        cache.insert(digit_sheet());
        cache.insert(weather_sprite(SpriteKind::Rain, 4));
        cache.insert(weather_sprite(SpriteKind::Moon, 3));
        cache
    }

    fn local(hour: u32, minute: u32, second: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 1, 15, hour, minute, second)
            .unwrap()
    }

    fn options(twelve_hour: bool, omit_leading_zero: bool) -> FaceOptions {
        FaceOptions {
            twelve_hour,
            omit_leading_zero,
            ..FaceOptions::default()
        }
    }

    fn compose(face: &ClockFace<'_, FixedClock, StubState>, now: DateTime<Local>) -> Compositor {
        let mut compositor = Compositor::new(Shape::new(16, 16), false);
        face.compose(&mut compositor, now, 0.0);
        compositor
    }

    fn red_at(compositor: &Compositor, x: i32, y: i32) -> u8 {
        compositor.current().get(x, y).unwrap().r
    }

    #[test]
    fn test_digit_helpers() {
        assert_eq!(hour_digits(0, true), [1, 2]);
        assert_eq!(hour_digits(12, true), [1, 2]);
        assert_eq!(hour_digits(13, true), [0, 1]);
        assert_eq!(hour_digits(0, false), [0, 0]);
        assert_eq!(hour_digits(23, false), [2, 3]);
        assert_eq!(minute_digits(7), [0, 7]);
        assert_eq!(minute_digits(59), [5, 9]);
    }

    #[test]
    fn test_animation_tick() {
        assert_eq!(animation_tick(0.0, 6.0), 0);
        assert_eq!(animation_tick(0.5, 6.0), 3);
        assert_eq!(animation_tick(10.0, 0.0), 0);
        assert_eq!(animation_tick(3.9, 0.5), 1);
        assert_eq!(animation_tick(-1.0, 6.0), 0);
    }

    #[test]
    fn test_twenty_four_hour_layout() {
        let sprites = cache();
        let now = local(12, 34, 10);
        let face = ClockFace::new(&sprites, FixedClock(now), stub(true), options(false, true));
        let compositor = compose(&face, now);

        assert_eq!(red_at(&compositor, 2, 3), code(1));
        assert_eq!(red_at(&compositor, 8, 3), code(2));
        assert_eq!(red_at(&compositor, 2, 9), code(3));
        assert_eq!(red_at(&compositor, 8, 9), code(4));
        // Only the anchor pixel of each glyph is opaque
        assert_eq!(compositor.current().get(3, 3), Some(BLACK));
    }

    #[test]
    fn test_twelve_hour_midnight() {
        let sprites = cache();
        let now = local(0, 5, 11);
        let face = ClockFace::new(&sprites, FixedClock(now), stub(true), options(true, true));
        let compositor = compose(&face, now);

        assert_eq!(red_at(&compositor, 2, 3), code(1));
        assert_eq!(red_at(&compositor, 8, 3), code(2));
        assert_eq!(red_at(&compositor, 2, 9), code(0));
        assert_eq!(red_at(&compositor, 8, 9), code(5));
    }

    #[test]
    fn test_leading_zero() {
        let sprites = cache();
        let now = local(9, 5, 11);

        let face = ClockFace::new(&sprites, FixedClock(now), stub(true), options(false, true));
        let compositor = compose(&face, now);
        assert_eq!(compositor.current().get(2, 3), Some(BLACK));
        assert_eq!(red_at(&compositor, 8, 3), code(9));

        let face = ClockFace::new(&sprites, FixedClock(now), stub(true), options(false, false));
        let compositor = compose(&face, now);
        assert_eq!(red_at(&compositor, 2, 3), code(0));

        // Minutes always keep their leading zero
        assert_eq!(red_at(&compositor, 2, 9), code(0));
    }

    #[test]
    fn test_blinker_color_and_phase() {
        let sprites = cache();
        let options = options(false, true);

        let now = local(12, 34, 10);
        let face = ClockFace::new(&sprites, FixedClock(now), stub(true), options);
        let compositor = compose(&face, now);
        assert_eq!(compositor.current().get(0, 9), Some(Rgb { r: 128, g: 128, b: 128 }));

        let face = ClockFace::new(&sprites, FixedClock(now), stub(false), options);
        let compositor = compose(&face, now);
        assert_eq!(compositor.current().get(0, 9), Some(Rgb { r: 128, g: 0, b: 0 }));

        let now = local(12, 34, 11);
        let face = ClockFace::new(&sprites, FixedClock(now), stub(true), options);
        let compositor = compose(&face, now);
        assert_eq!(compositor.current().get(0, 9), Some(BLACK));
    }

    #[test]
    fn test_digit_tint() {
        let sprites = cache();
        let now = local(12, 34, 10);
        let options = FaceOptions {
            twelve_hour: false,
            color: Rgb { r: 0, g: 255, b: 255 },
            ..FaceOptions::default()
        };
        let face = ClockFace::new(&sprites, FixedClock(now), stub(true), options);
        let compositor = compose(&face, now);
        assert_eq!(compositor.current().get(2, 3), Some(BLACK));
    }

    #[test]
    fn test_weather_animation() {
        let sprites = cache();
        let now = local(12, 34, 10);
        let state = StubState {
            weather: SpriteKind::Rain,
            ..stub(true)
        };
        let face = ClockFace::new(&sprites, FixedClock(now), state, options(false, true));

        let mut compositor = Compositor::new(Shape::new(16, 16), false);
        face.compose(&mut compositor, now, 0.0);
        assert_eq!(compositor.current().get(0, 0).unwrap().g, 1);

        compositor.clear();
        face.compose(&mut compositor, now, 0.5);
        assert_eq!(compositor.current().get(0, 0).unwrap().g, 4);

        compositor.clear();
        face.compose(&mut compositor, now, 0.7);
        assert_eq!(compositor.current().get(0, 0).unwrap().g, 1);
    }

    #[test]
    fn test_static_and_missing_weather() {
        let sprites = cache();
        let now = local(23, 0, 1);
        let state = StubState {
            weather: SpriteKind::Moon,
            ..stub(true)
        };
        let face = ClockFace::new(&sprites, FixedClock(now), state, options(false, true));
        let mut compositor = Compositor::new(Shape::new(16, 16), false);
        face.compose(&mut compositor, now, 42.0);
        assert_eq!(compositor.current().get(0, 0).unwrap().g, 1);

        let state = StubState {
            weather: SpriteKind::Storm,
            ..stub(true)
        };
        let face = ClockFace::new(&sprites, FixedClock(now), state, options(false, true));
        let compositor = compose(&face, now);
        assert_eq!(compositor.current().get(0, 0), Some(BLACK));
    }

    #[test]
    fn test_demo_cycles_cached_kinds() {
        let sprites = cache();
        let now = local(12, 0, 0);
        let options = FaceOptions {
            demo: true,
            ..FaceOptions::default()
        };
        let face = ClockFace::new(&sprites, FixedClock(now), stub(true), options);

        assert_eq!(face.weather_kind(now, 0.0), Some(SpriteKind::Rain));
        assert_eq!(face.weather_kind(now, 4.9), Some(SpriteKind::Rain));
        assert_eq!(face.weather_kind(now, 5.0), Some(SpriteKind::Moon));
        assert_eq!(face.weather_kind(now, 10.0), Some(SpriteKind::Rain));

        let empty = SpriteCache::new();
        let face = ClockFace::new(&empty, FixedClock(now), stub(true), options);
        assert_eq!(face.weather_kind(now, 0.0), None);
    }

    #[test]
    fn test_daylight_level() {
        let sprites = cache();
        let now = local(3, 0, 0);
        let mut face = ClockFace::new(&sprites, FixedClock(now), stub(true), FaceOptions::default());
        assert!((face.brightness() - 0.5).abs() < 1e-6);

        let state = StubState {
            twilight: Some(TwilightMarks::new(360.0, 420.0, 1080.0, 1140.0).unwrap()),
            ..stub(true)
        };
        let mut face = ClockFace::new(&sprites, FixedClock(now), state, FaceOptions::default());
        assert!(face.brightness().abs() < 1e-6);
        assert!((face.daylight_level(local(6, 30, 0)) - 0.5).abs() < 1e-6);
        assert!((face.daylight_level(local(12, 0, 0)) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_render_through_scheduler() {
        let sprites = cache();
        let now = local(12, 34, 10);
        let mut face = ClockFace::new(&sprites, FixedClock(now), stub(true), options(false, true));
        let config = SchedulerConfig {
            brightness: BrightnessRange::new(0.2, 0.6),
            ghosting: false,
            ..SchedulerConfig::default()
        };
        let mut scheduler = RenderScheduler::new(MemoryMatrix::new(16, 16), &config).unwrap();
        scheduler.render_frame(&mut face).unwrap();

        let driver = scheduler.driver();
        assert_eq!(driver.frames_shown(), 1);
        assert!((driver.brightness() - 0.4).abs() < 1e-6);
        assert_eq!(driver.pixel(8, 9).map(|pixel| pixel.r), Some(code(4)));
        assert_eq!(driver.pixel(0, 9), Some(Rgb { r: 128, g: 128, b: 128 }));
    }
}
