mod tests {
    use chrono::NaiveTime;
    use myrtio_matrix_composer::daylight::{
        TwilightError, TwilightMarks, UNKNOWN_DAYLIGHT_LEVEL, evaluate, minute_of_day,
    };

    fn marks() -> TwilightMarks {
        TwilightMarks::new(360.0, 390.0, 1080.0, 1110.0).unwrap()
    }

    #[test]
    fn test_dawn_ramp_midpoint() {
        assert_eq!(evaluate(Some(&marks()), 375.0), 0.5);
    }

    #[test]
    fn test_night_after_twilight_end() {
        assert_eq!(evaluate(Some(&marks()), 1200.0), 0.0);
        assert_eq!(evaluate(Some(&marks()), 120.0), 0.0);
    }

    #[test]
    fn test_boundaries() {
        let marks = marks();
        assert_eq!(evaluate(Some(&marks), 360.0), 0.0);
        assert_eq!(evaluate(Some(&marks), 390.0), 1.0);
        assert_eq!(evaluate(Some(&marks), 720.0), 1.0);
        assert_eq!(evaluate(Some(&marks), 1080.0), 1.0);
        assert_eq!(evaluate(Some(&marks), 1095.0), 0.5);
        assert_eq!(evaluate(Some(&marks), 1110.0), 0.0);
    }

    #[test]
    fn test_continuity() {
        let marks = marks();
        for boundary in [360.0_f32, 390.0, 1080.0, 1110.0] {
            let before = evaluate(Some(&marks), boundary - 0.01);
            let at = evaluate(Some(&marks), boundary);
            assert!((before - at).abs() < 0.001, "jump at {boundary}");
        }
    }

    #[test]
    fn test_unknown_marks() {
        for now in [0.0, 375.0, 720.0, 1439.0] {
            assert_eq!(evaluate(None, now), UNKNOWN_DAYLIGHT_LEVEL);
        }
        assert_eq!(UNKNOWN_DAYLIGHT_LEVEL, 0.5);
    }

    #[test]
    fn test_degenerate_ramps_step() {
        let marks = TwilightMarks::new(360.0, 360.0, 1080.0, 1080.0).unwrap();
        assert_eq!(evaluate(Some(&marks), 359.9), 0.0);
        assert_eq!(evaluate(Some(&marks), 360.0), 1.0);
        assert_eq!(evaluate(Some(&marks), 1079.9), 1.0);
        assert_eq!(evaluate(Some(&marks), 1080.0), 0.0);

        let polar_night = TwilightMarks::new(600.0, 600.0, 600.0, 600.0).unwrap();
        for now in [0.0, 599.0, 600.0, 601.0] {
            let level = evaluate(Some(&polar_night), now);
            assert!(level == 0.0 || level == 1.0);
        }
    }

    #[test]
    fn test_marks_validation() {
        assert_eq!(
            TwilightMarks::new(400.0, 390.0, 1080.0, 1110.0),
            Err(TwilightError::Unordered)
        );
        assert_eq!(
            TwilightMarks::new(-1.0, 390.0, 1080.0, 1110.0),
            Err(TwilightError::OutOfRange)
        );
        assert_eq!(
            TwilightMarks::new(360.0, 390.0, 1080.0, 1500.0),
            Err(TwilightError::OutOfRange)
        );
    }

    #[test]
    fn test_marks_from_times() {
        let time = |h, m, s| NaiveTime::from_hms_opt(h, m, s).unwrap();
        let marks =
            TwilightMarks::from_times(time(6, 0, 30), time(6, 30, 0), time(18, 0, 0), time(18, 30, 59))
                .unwrap();
        assert_eq!(marks.civil_twilight_begin(), 360.0);
        assert_eq!(marks.sunrise(), 390.0);
        assert_eq!(marks.sunset(), 1080.0);
        assert_eq!(marks.civil_twilight_end(), 1110.0);
    }

    #[test]
    fn test_minute_of_day() {
        assert_eq!(minute_of_day(NaiveTime::from_hms_opt(6, 15, 30).unwrap()), 375.5);
        assert_eq!(minute_of_day(NaiveTime::from_hms_opt(0, 0, 0).unwrap()), 0.0);
    }
}
