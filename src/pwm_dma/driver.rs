use stm32_metapac::bdma;
use stm32_metapac::timer::TimGp16;

use super::{dma::PwmDma, timer, DriverStorage, InterruptHandler, Ws2812Driver};
use crate::carrier::CarrierConfig;
use crate::errors::InitError;
use crate::pixel::Pixel;
use crate::scheduler::{TransferBuffer, TransferScheduler};

impl<const N: usize, const B: usize> Ws2812Driver<N, B> {
    /// Initializes the driver: carrier timer, DMA channel, cleared pixel
    /// store.
    ///
    /// IMPORTANT! Three things stay the caller's responsibility and must be
    /// in place around this call: the timer's and the DMA controller's
    /// peripheral clocks are gated on and the timer channel's pin is muxed
    /// to its alternate function *before*; the DMA channel's interrupt line
    /// is unmasked in the NVIC, with [`InterruptHandler::on_interrupt`]
    /// wired into its handler, *after*, but before the first
    /// [`display`](Ws2812Driver::display).
    ///
    /// `dma_channel` is the 1-based DMA channel number (1..=7); it must be
    /// the channel the chosen timer's request lines map to. `timer_channel`
    /// selects the timer's output compare channel (1..=4). `core_clock_hz`
    /// must be above 8 MHz.
    ///
    /// No register is written until every parameter has passed validation;
    /// a failed init has no hardware side effects.
    pub fn init(
        storage: &'static DriverStorage<N, B>,
        dma: bdma::Dma,
        dma_channel: u8,
        tim: TimGp16,
        timer_channel: u8,
        core_clock_hz: u32,
    ) -> Result<(Self, InterruptHandler<N, B>), InitError> {
        let carrier = CarrierConfig::from_core_clock(core_clock_hz)?;

        if !(1..=4).contains(&timer_channel) {
            return Err(InitError::InvalidTimerChannel);
        }
        if !(1..=7).contains(&dma_channel) {
            return Err(InitError::InvalidDmaChannel);
        }

        log::debug!("Initializing WS2812 PWM/DMA driver.");
        log::debug!("    Strip length: {} pixels", N);
        log::debug!("    Buffered: 2x{} pixels", B);
        log::debug!("    DMA channel: {}", dma_channel);
        log::debug!("    Timer channel: {}", timer_channel);
        log::debug!("    Carrier period: {} cycles", carrier.period);
        log::debug!(
            "    Bit symbols: high {}, low {}",
            carrier.symbols.high,
            carrier.symbols.low
        );

        let handle = PwmDma::new(
            dma,
            usize::from(dma_channel - 1),
            tim,
            usize::from(timer_channel - 1),
            TransferBuffer::<B>::LEN as u16,
        );

        critical_section::with(|cs| {
            timer::configure_carrier(tim, usize::from(timer_channel - 1), &carrier);

            // The engine must reach its final, static address before the
            // DMA channel is pointed at its transfer buffer.
            let mut slot = storage.engine.borrow_ref_mut(cs);
            let engine = slot.insert(TransferScheduler::new(handle, carrier.symbols));
            handle.configure(engine.buffer().as_ptr() as u32);
        });

        Ok((Self { storage }, InterruptHandler { storage }))
    }

    /// Sets the pixel at `index`; out-of-range indices are ignored.
    ///
    /// With the `gamma-correction` feature enabled (default), every channel
    /// is mapped through the brightness lookup on write.
    ///
    /// Writing while a transfer is streaming cannot corrupt the protocol,
    /// but the frame on the wire may mix old and new pixel values.
    pub fn set_pixel(&mut self, index: usize, red: u8, green: u8, blue: u8) {
        self.with_engine(|engine| engine.pixels_mut().set(index, red, green, blue));
    }

    /// Sets the pixel at `index` from a typed color value.
    pub fn set_pixel_from<P: Pixel>(&mut self, index: usize, pixel: P) {
        self.with_engine(|engine| engine.pixels_mut().set_from(index, pixel));
    }

    /// Switches the pixel at `index` off.
    pub fn clear_pixel(&mut self, index: usize) {
        self.with_engine(|engine| engine.pixels_mut().clear(index));
    }

    /// Switches every pixel off.
    pub fn clear_all(&mut self) {
        self.with_engine(|engine| engine.pixels_mut().clear_all());
    }

    /// Arms and starts the asynchronous transfer of the current pixel data.
    ///
    /// Returns immediately; the strip is refreshed in the background. May be
    /// called while a previous transfer is still streaming; that transfer
    /// is stopped and the new one starts from pixel 0.
    pub fn display(&mut self) {
        self.with_engine(TransferScheduler::display);
    }

    /// Whether a transfer is currently streaming.
    pub fn is_busy(&self) -> bool {
        self.with_engine(|engine| engine.is_busy()).unwrap_or(false)
    }

    fn with_engine<R>(
        &self,
        f: impl FnOnce(&mut TransferScheduler<N, B, PwmDma>) -> R,
    ) -> Option<R> {
        critical_section::with(|cs| self.storage.engine.borrow_ref_mut(cs).as_mut().map(f))
    }
}
