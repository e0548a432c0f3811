use snafu::prelude::*;

/// Errors of the driver's `init` function.
///
/// A failed initialization leaves no hardware side effects behind; every
/// parameter is validated before the first register write.
#[derive(Debug, Snafu)]
pub enum InitError {
    /// The core clock cannot produce the 800 kHz carrier: it is at or below
    /// the 8 MHz minimum, or so fast that a one bit's compare value no longer
    /// fits into an 8-bit symbol.
    ClockOutOfRange,
    /// The timer output channel must be 1 to 4.
    InvalidTimerChannel,
    /// The DMA channel must be 1 to 7.
    InvalidDmaChannel,
}
