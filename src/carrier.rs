//! Timing of the bit-rate carrier.
//!
//! One carrier period transmits one protocol bit; the duty cycle within the
//! period distinguishes ones from zeros. The timer reload and compare values
//! are derived once, at initialization, from the core clock.

use crate::encoder::BitSymbols;
use crate::errors::InitError;

/// Bit rate of the WS2812 single-wire protocol.
pub const CARRIER_HZ: u32 = 800_000;

/// Slowest core clock the carrier can be derived from.
pub const MIN_CORE_CLOCK_HZ: u32 = 8_000_000;

/// Timer configuration for the bit-rate carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarrierConfig {
    /// Auto-reload value: core clock cycles per carrier period.
    pub period: u16,
    /// Per-bit compare values derived from the period.
    pub symbols: BitSymbols,
}

impl CarrierConfig {
    /// Derives the carrier timing from the core clock frequency.
    ///
    /// A one bit holds the line high for two thirds of the period, a zero
    /// bit for one third (at 72 MHz: period 90, compare values 60 and 30).
    ///
    /// Fails if the clock is at or below [`MIN_CORE_CLOCK_HZ`], or so fast
    /// that the one bit's compare value no longer fits the 8-bit symbol.
    pub fn from_core_clock(core_clock_hz: u32) -> Result<Self, InitError> {
        if core_clock_hz <= MIN_CORE_CLOCK_HZ {
            return Err(InitError::ClockOutOfRange);
        }

        let period = core_clock_hz / CARRIER_HZ;
        let high = period * 2 / 3;
        let low = period / 3;

        let Ok(high) = u8::try_from(high) else {
            return Err(InitError::ClockOutOfRange);
        };
        // `low` is half of `high`; if `high` fits, so does `low`.
        let low = low as u8;

        Ok(Self {
            period: period as u16,
            symbols: BitSymbols { high, low },
        })
    }
}
