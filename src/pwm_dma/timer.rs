use stm32_metapac::timer::{vals, TimGp16};

use crate::carrier::CarrierConfig;

/// Puts the timer into free-running PWM mode at the carrier rate.
///
/// The duty cycle is not touched again by software afterwards; the DMA
/// stream modulates it per period through the compare register.
pub(super) fn configure_carrier(tim: TimGp16, channel: usize, config: &CarrierConfig) {
    tim.arr().write(|w| w.set_arr(config.period));
    // Start with 0% duty; the line stays low until data streams.
    tim.ccr(channel).write(|w| w.set_ccr(0));

    // PWM mode 1 with compare preload, so a value written mid-period takes
    // effect at the following update event and pulses never tear.
    tim.ccmr_output(channel / 2).modify(|w| {
        w.set_ocm(channel % 2, vals::Ocm::PWMMODE1);
        w.set_ocpe(channel % 2, true);
    });

    // Active high, output enabled.
    tim.ccer().modify(|w| {
        w.set_ccp(channel, false);
        w.set_cce(channel, true);
    });

    tim.cr1().modify(|w| {
        w.set_arpe(true);
        // Only counter overflow may generate update events, which pace the
        // DMA requests.
        w.set_urs(vals::Urs::COUNTERONLY);
    });

    // Latch the preloaded reload and compare values.
    tim.egr().write(|w| w.set_ug(true));
    tim.cr1().modify(|w| w.set_cen(true));
}
