/// A color value that can be written into the pixel buffer.
pub trait Pixel {
    /// Returns the raw red, green and blue channel bytes.
    ///
    /// Channel reordering for the wire (WS2812 strips are GRB encoded)
    /// happens later, in the encoder.
    fn into_rgb(self) -> [u8; 3];
}

/// Raw RGB data.
impl Pixel for [u8; 3] {
    fn into_rgb(self) -> [u8; 3] {
        self
    }
}

impl Pixel for (u8, u8, u8) {
    fn into_rgb(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

/// 8-bit Linear sRGB, which is the color space
/// most NeoPixel strips are in.
///
/// Be aware that this differs from normal,
/// gamma-corrected sRGB. A conversion has to take place.
///
/// More info can be found in the documentation of the
/// [palette] crate.
impl Pixel for palette::LinSrgb<u8> {
    fn into_rgb(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl<P> Pixel for &P
where
    P: Pixel + Clone,
{
    fn into_rgb(self) -> [u8; 3] {
        self.clone().into_rgb()
    }
}
