mod tests {
    use flagstrip::LED_COUNT;
    use flagstrip::color::{PALETTES, Palette, Rgb};
    use flagstrip::compositor::{BandSpan, project_band, project_flag};

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const COLOR: Rgb = Rgb {
        r: 200,
        g: 100,
        b: 50,
    };
    static SOLID: [Rgb; 1] = [Rgb {
        r: 10,
        g: 20,
        b: 30,
    }];

    fn pixel_width() -> f32 {
        1.0 / LED_COUNT as f32
    }

    fn coverage_sum(start: f32, size: f32) -> f32 {
        BandSpan::new(LED_COUNT, start, size)
            .map(|span| span.coverage().map(|(_, cov)| cov).sum())
            .unwrap_or(0.0)
    }

    #[test]
    fn test_band_on_whole_pixel() {
        let mut frame = [BLACK; LED_COUNT];
        project_band(&mut frame, 3.0 * pixel_width(), pixel_width(), COLOR);

        for (i, pixel) in frame.iter().enumerate() {
            let expected = if i == 3 { COLOR } else { BLACK };
            assert_eq!(*pixel, expected, "pixel {i}");
        }
    }

    #[test]
    fn test_band_split_across_two_pixels() {
        let mut frame = [BLACK; LED_COUNT];
        project_band(&mut frame, 3.5 * pixel_width(), pixel_width(), COLOR);

        let half = Rgb::new(100, 50, 25);
        assert_eq!(frame[3], half);
        assert_eq!(frame[4], half);
        assert!(frame.iter().enumerate().all(|(i, p)| i == 3 || i == 4 || *p == BLACK));
    }

    #[test]
    fn test_empty_band_is_noop() {
        let mut frame = [COLOR; LED_COUNT];
        project_band(&mut frame, 0.5, 0.0, Rgb::new(1, 1, 1));
        project_band(&mut frame, 1.2, 0.3, Rgb::new(1, 1, 1));
        project_band(&mut frame, -0.5, 0.25, Rgb::new(1, 1, 1));
        assert_eq!(frame, [COLOR; LED_COUNT]);
    }

    #[test]
    fn test_band_accumulates() {
        let mut frame = [BLACK; LED_COUNT];
        let dim = Rgb::new(100, 20, 0);
        project_band(&mut frame, 0.0, pixel_width(), dim);
        project_band(&mut frame, 0.0, pixel_width(), dim);
        assert_eq!(frame[0], Rgb::new(200, 40, 0));

        project_band(&mut frame, 0.0, pixel_width(), dim);
        assert_eq!(frame[0], Rgb::new(255, 60, 0));
    }

    #[test]
    fn test_band_is_clamped_to_strip() {
        let span = BandSpan::new(LED_COUNT, -0.25, 0.5).unwrap();
        assert_eq!(span.start(), 0.0);
        assert_eq!(span.end(), 4.0);

        let span = BandSpan::new(LED_COUNT, 0.75, 0.5).unwrap();
        assert_eq!(span.start(), 12.0);
        assert_eq!(span.end(), 16.0);

        assert!(BandSpan::new(LED_COUNT, 1.0, 0.5).is_none());
    }

    #[test]
    fn test_coverage_conserves_band_mass() {
        let cases = [(0.1, 0.3), (0.0, 1.0), (0.33, 0.01), (0.9, 0.3), (0.5, 0.0625)];
        for (start, size) in cases {
            let count = LED_COUNT as f32;
            let expected = (size * count).min(count - (start * count).max(0.0));
            let total = coverage_sum(start, size);
            assert!((total - expected).abs() < 1e-4, "start {start} size {size}: {total}");
        }
    }

    #[test]
    fn test_coverage_never_exceeds_one() {
        let span = BandSpan::new(LED_COUNT, 0.03, 0.7).unwrap();
        assert!(span.coverage().all(|(_, cov)| cov > 0.0 && cov <= 1.0));
    }

    #[test]
    fn test_single_band_flag_fills_strip() {
        let palette = Palette::new("solid", &SOLID);
        let mut frame = [BLACK; LED_COUNT];
        project_flag(&mut frame, &palette, 0.0);
        assert_eq!(frame, [SOLID[0]; LED_COUNT]);
    }

    #[test]
    fn test_flag_offset_out_of_strip() {
        let non_binary = &PALETTES[2];
        let mut frame = [BLACK; LED_COUNT];
        project_flag(&mut frame, non_binary, -1.0);
        assert_eq!(frame, [BLACK; LED_COUNT]);
        project_flag(&mut frame, non_binary, 1.0);
        assert_eq!(frame, [BLACK; LED_COUNT]);
    }

    #[test]
    fn test_flag_half_offset() {
        let non_binary = &PALETTES[2];
        let mut frame = [BLACK; LED_COUNT];
        project_flag(&mut frame, non_binary, 0.5);

        assert_eq!(frame[..8], [BLACK; 8]);
        assert_eq!(frame[8..12], [non_binary.bands[0]; 4]);
        assert_eq!(frame[12..], [non_binary.bands[1]; 4]);
    }
}
