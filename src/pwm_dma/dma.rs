use stm32_metapac::bdma::{self, vals};
use stm32_metapac::timer::{vals as timer_vals, TimGp16};

use crate::transfer::{TransferChannel, TransferEvent};

/// The peripheral pair the scheduler drives: one DMA channel wired to one
/// timer compare register. Plain register addresses, freely copyable.
#[derive(Clone, Copy)]
pub(super) struct PwmDma {
    dma: bdma::Dma,
    channel: usize,
    tim: TimGp16,
    timer_channel: usize,
    transfer_len: u16,
}

impl PwmDma {
    pub fn new(
        dma: bdma::Dma,
        channel: usize,
        tim: TimGp16,
        timer_channel: usize,
        transfer_len: u16,
    ) -> Self {
        Self {
            dma,
            channel,
            tim,
            timer_channel,
            transfer_len,
        }
    }

    /// One-time channel setup: circular memory-to-peripheral transfer from
    /// the symbol buffer into the compare register, byte-wide on the memory
    /// side, half-word on the peripheral side, interrupting at both the
    /// half-way point and the wrap.
    pub fn configure(&self, memory_address: u32) {
        let ch = self.dma.ch(self.channel);

        ch.cr().modify(|w| w.set_en(false));
        ch.par()
            .write_value(self.tim.ccr(self.timer_channel).as_ptr() as u32);
        ch.mar().write_value(memory_address);
        ch.ndtr().write(|w| w.set_ndt(self.transfer_len));
        ch.cr().write(|w| {
            w.set_pl(vals::Pl::HIGH);
            w.set_msize(vals::Size::BITS8);
            w.set_psize(vals::Size::BITS16);
            w.set_minc(true);
            w.set_pinc(false);
            w.set_circ(true);
            w.set_dir(vals::Dir::FROMMEMORY);
            w.set_htie(true);
            w.set_tcie(true);
        });

        // One symbol is fetched per carrier period: the compare channel's
        // request is redirected onto the update event, and updates are
        // restricted to counter overflow by the carrier setup.
        self.tim.dier().modify(|w| {
            w.set_ude(true);
            w.set_ccde(self.timer_channel, true);
        });
        self.tim
            .cr2()
            .modify(|w| w.set_ccds(timer_vals::Ccds::ONUPDATE));
    }
}

impl TransferChannel for PwmDma {
    fn enable(&mut self) {
        let ch = self.dma.ch(self.channel);
        // The transfer counter runs down as the hardware streams; reload it
        // for the new pass before switching the channel on.
        ch.ndtr().write(|w| w.set_ndt(self.transfer_len));
        ch.cr().modify(|w| w.set_en(true));
    }

    fn disable(&mut self) {
        self.dma.ch(self.channel).cr().modify(|w| w.set_en(false));
    }

    fn pending_event(&mut self) -> Option<TransferEvent> {
        let isr = self.dma.isr().read();
        if isr.htif(self.channel) {
            Some(TransferEvent::HalfComplete)
        } else if isr.tcif(self.channel) {
            Some(TransferEvent::Complete)
        } else {
            None
        }
    }

    fn acknowledge(&mut self, event: TransferEvent) {
        self.dma.ifcr().write(|w| match event {
            TransferEvent::HalfComplete => w.set_htif(self.channel, true),
            TransferEvent::Complete => w.set_tcif(self.channel, true),
        });
    }

    fn acknowledge_all(&mut self) {
        self.dma.ifcr().write(|w| w.set_gif(self.channel, true));
    }
}
