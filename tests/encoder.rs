mod tests {
    use ws2812_pwm_dma::{encode_half, BitSymbols, PixelBuffer, SYMBOLS_PER_PIXEL};

    const SYMBOLS: BitSymbols = BitSymbols { high: 60, low: 30 };

    /// Reads a channel byte back out of its eight-symbol window.
    fn decode_window(window: &[u8]) -> u8 {
        window.iter().enumerate().fold(0, |acc, (bit, &symbol)| {
            assert!(
                symbol == SYMBOLS.high || symbol == SYMBOLS.low,
                "unexpected symbol {symbol}"
            );
            if symbol == SYMBOLS.high {
                acc | (0x80 >> bit)
            } else {
                acc
            }
        })
    }

    #[test]
    fn test_full_channel_yields_high_symbols() {
        let mut pixels = PixelBuffer::<1>::new();
        pixels.set(0, 0x00, 0xFF, 0x00);
        let mut slots = [[0u8; SYMBOLS_PER_PIXEL]; 1];

        let cursor = encode_half(&mut slots, &pixels, 0, &SYMBOLS);

        assert_eq!(cursor, 1);
        // Green streams first and is fully on; red and blue stay low.
        assert!(slots[0][..8].iter().all(|&s| s == SYMBOLS.high));
        assert!(slots[0][8..].iter().all(|&s| s == SYMBOLS.low));
    }

    #[test]
    fn test_channel_order_is_green_red_blue() {
        let mut pixels = PixelBuffer::<1>::new();
        pixels.set(0, 255, 0, 128);
        let mut slots = [[0u8; SYMBOLS_PER_PIXEL]; 1];

        encode_half(&mut slots, &pixels, 0, &SYMBOLS);

        assert_eq!(decode_window(&slots[0][..8]), 0);
        assert_eq!(decode_window(&slots[0][8..16]), 255);
        #[cfg(feature = "gamma-correction")]
        assert_eq!(decode_window(&slots[0][16..]), 37);
        #[cfg(not(feature = "gamma-correction"))]
        assert_eq!(decode_window(&slots[0][16..]), 128);
    }

    #[cfg(feature = "gamma-correction")]
    #[test]
    fn test_bits_stream_msb_first() {
        let mut pixels = PixelBuffer::<1>::new();
        // 128 maps to 37 == 0b0010_0101.
        pixels.set(0, 0, 128, 0);
        let mut slots = [[0u8; SYMBOLS_PER_PIXEL]; 1];

        encode_half(&mut slots, &pixels, 0, &SYMBOLS);

        let (h, l) = (SYMBOLS.high, SYMBOLS.low);
        assert_eq!(slots[0][..8], [l, l, h, l, l, h, l, h]);
    }

    #[cfg(not(feature = "gamma-correction"))]
    #[test]
    fn test_bits_stream_msb_first() {
        let mut pixels = PixelBuffer::<1>::new();
        // 0b1010_0101
        pixels.set(0, 0, 165, 0);
        let mut slots = [[0u8; SYMBOLS_PER_PIXEL]; 1];

        encode_half(&mut slots, &pixels, 0, &SYMBOLS);

        let (h, l) = (SYMBOLS.high, SYMBOLS.low);
        assert_eq!(slots[0][..8], [h, l, h, l, l, h, l, h]);
    }

    #[test]
    fn test_trailing_slots_are_all_zero() {
        let pixels = PixelBuffer::<1>::new();
        let mut slots = [[0xAAu8; SYMBOLS_PER_PIXEL]; 3];

        let cursor = encode_half(&mut slots, &pixels, 0, &SYMBOLS);

        assert_eq!(cursor, 3);
        // Slot 0 is the (black) strip pixel: zero bits, short pulses.
        assert!(slots[0].iter().all(|&s| s == SYMBOLS.low));
        // Slots beyond the strip form the reset period: 0% duty, no pulses.
        assert!(slots[1].iter().all(|&s| s == 0));
        assert!(slots[2].iter().all(|&s| s == 0));
    }

    #[test]
    fn test_cursor_advances_from_offset() {
        let mut pixels = PixelBuffer::<4>::new();
        pixels.set(3, 0xFF, 0xFF, 0xFF);
        let mut slots = [[0u8; SYMBOLS_PER_PIXEL]; 4];

        let cursor = encode_half(&mut slots, &pixels, 2, &SYMBOLS);

        assert_eq!(cursor, 6);
        // Positions 2 and 3 are strip pixels, 4 and 5 trailing.
        assert!(slots[0].iter().all(|&s| s == SYMBOLS.low));
        assert!(slots[1].iter().all(|&s| s == SYMBOLS.high));
        assert!(slots[2].iter().all(|&s| s == 0));
        assert!(slots[3].iter().all(|&s| s == 0));
    }
}
