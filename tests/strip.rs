mod tests {
    use palette::LinSrgb;
    use ws2812_pwm_dma::PixelBuffer;

    #[test]
    fn test_new_buffer_is_dark() {
        let pixels = PixelBuffer::<4>::new();
        for index in 0..4 {
            assert_eq!(pixels.get(index), Some(&[0, 0, 0]));
        }
        assert_eq!(pixels.len(), 4);
    }

    #[cfg(feature = "gamma-correction")]
    #[test]
    fn test_set_stores_gamma_mapped_values() {
        let mut pixels = PixelBuffer::<4>::new();
        pixels.set(0, 255, 128, 0);
        assert_eq!(pixels.get(0), Some(&[255, 37, 0]));
        pixels.set(1, 80, 80, 80);
        assert_eq!(pixels.get(1), Some(&[10, 10, 10]));
    }

    #[cfg(not(feature = "gamma-correction"))]
    #[test]
    fn test_set_stores_raw_values() {
        let mut pixels = PixelBuffer::<4>::new();
        pixels.set(0, 255, 128, 3);
        assert_eq!(pixels.get(0), Some(&[255, 128, 3]));
    }

    #[test]
    fn test_clear_only_touches_its_pixel() {
        let mut pixels = PixelBuffer::<3>::new();
        pixels.set(0, 255, 255, 255);
        pixels.set(1, 255, 255, 255);
        pixels.clear(0);
        assert_eq!(pixels.get(0), Some(&[0, 0, 0]));
        assert_eq!(pixels.get(1), Some(&[255, 255, 255]));
    }

    #[test]
    fn test_clear_all() {
        let mut pixels = PixelBuffer::<8>::new();
        for index in 0..8 {
            pixels.set(index, 255, 255, 255);
        }
        pixels.clear_all();
        for index in 0..8 {
            assert_eq!(pixels.get(index), Some(&[0, 0, 0]));
        }
    }

    #[test]
    fn test_out_of_range_accesses_are_ignored() {
        let mut pixels = PixelBuffer::<4>::new();
        pixels.set(4, 255, 255, 255);
        pixels.set(usize::MAX, 255, 255, 255);
        pixels.clear(17);
        assert_eq!(pixels.get(4), None);
        for index in 0..4 {
            assert_eq!(pixels.get(index), Some(&[0, 0, 0]));
        }
    }

    #[test]
    fn test_set_from_linear_srgb() {
        let mut pixels = PixelBuffer::<2>::new();
        pixels.set_from(0, LinSrgb::new(255u8, 0, 255));
        pixels.set_from(1, [0u8, 255, 0]);
        assert_eq!(pixels.get(0), Some(&[255, 0, 255]));
        assert_eq!(pixels.get(1), Some(&[0, 255, 0]));
    }
}
