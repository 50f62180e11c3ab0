mod tests {
    use myrtio_matrix_composer::color::{
        BLACK, Rgb, WHITE, average_colors, blend_over, rgb_from_array, rgb_from_u32,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn test_blend_over() {
        assert_eq!(blend_over(BLACK, RED, 255), RED);
        assert_eq!(blend_over(RED, BLUE, 0), RED);
        assert_eq!(
            blend_over(BLACK, WHITE, 128),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
    }

    #[test]
    fn test_average_colors() {
        assert_eq!(average_colors(RED, BLUE), Rgb { r: 127, g: 0, b: 127 });
        assert_eq!(average_colors(WHITE, WHITE), WHITE);
        assert_eq!(average_colors(BLACK, BLACK), BLACK);
    }

    #[test]
    fn test_rgb_constructors() {
        assert_eq!(rgb_from_u32(0x10_20_30), Rgb { r: 16, g: 32, b: 48 });
        assert_eq!(rgb_from_array([1, 2, 3]), Rgb { r: 1, g: 2, b: 3 });
    }
}
