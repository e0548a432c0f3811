use super::InterruptHandler;

impl<const N: usize, const B: usize> InterruptHandler<N, B> {
    /// Signals to the [`Ws2812Driver`](super::Ws2812Driver) that the DMA
    /// channel interrupt happened.
    ///
    /// Needs to be called inside of the respective DMA channel
    /// interrupt handler function. Runs the termination check and, while
    /// pixel slots remain, re-encodes the buffer half the hardware has just
    /// vacated; it must therefore not be delayed by more than one half's
    /// streaming time.
    pub fn on_interrupt(&self) {
        critical_section::with(|cs| {
            if let Some(engine) = self.storage.engine.borrow_ref_mut(cs).as_mut() {
                engine.on_transfer_event();
            }
        });
    }
}
