use crate::encoder::{self, BitSymbols, SYMBOLS_PER_PIXEL};
use crate::strip::PixelBuffer;
use crate::transfer::{TransferChannel, TransferEvent};

/// One of the two halves of the circular transfer buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    /// The front half, refilled after a half-complete event.
    First,
    /// The back half, refilled after a complete event.
    Second,
}

impl Half {
    fn index(self) -> usize {
        match self {
            Half::First => 0,
            Half::Second => 1,
        }
    }
}

/// Progress of the transfer engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No transfer has been armed yet.
    Idle,
    /// A display request is being prepared; the channel is stopped and the
    /// buffer halves are being pre-filled.
    Armed,
    /// The hardware is streaming; refills happen in interrupt context.
    Streaming,
    /// The strip plus its trailing reset slots have been flushed.
    /// Equivalent to [`State::Idle`] for the next display request.
    Done,
}

/// The circular buffer the hardware streams from, `B` pixel slots per half.
///
/// `#[repr(C)]` pins the two halves back to back in memory; the hardware
/// reads the whole region linearly and wraps.
#[repr(C, align(4))]
pub struct TransferBuffer<const B: usize> {
    halves: [[[u8; SYMBOLS_PER_PIXEL]; B]; 2],
}

impl<const B: usize> TransferBuffer<B> {
    /// Size of the streamed region in bytes.
    pub const LEN: usize = 2 * B * SYMBOLS_PER_PIXEL;

    /// Creates a zeroed buffer.
    pub const fn new() -> Self {
        Self {
            halves: [[[0; SYMBOLS_PER_PIXEL]; B]; 2],
        }
    }

    /// The pixel slots of one half.
    pub fn half(&self, half: Half) -> &[[u8; SYMBOLS_PER_PIXEL]; B] {
        &self.halves[half.index()]
    }

    fn half_mut(&mut self, half: Half) -> &mut [[u8; SYMBOLS_PER_PIXEL]; B] {
        &mut self.halves[half.index()]
    }

    /// Start address of the streamed region.
    pub fn as_ptr(&self) -> *const u8 {
        self.halves.as_ptr().cast()
    }

    /// Size of the streamed region in bytes.
    pub const fn len(&self) -> usize {
        Self::LEN
    }

    /// Whether the buffer holds zero slots.
    pub const fn is_empty(&self) -> bool {
        B == 0
    }
}

impl<const B: usize> Default for TransferBuffer<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// The double-buffered transfer engine for a strip of `N` pixels, keeping
/// `2 x B` pixels in flight.
///
/// Owns the pixel store, the circular transfer buffer, the cursor through
/// the pixel sequence and the hardware channel handle. [`display`] arms a
/// transfer; every subsequent completion signal must be routed into
/// [`on_transfer_event`], which refills the vacated half until the strip
/// plus one buffer's worth of trailing reset slots have been encoded.
///
/// [`display`]: TransferScheduler::display
/// [`on_transfer_event`]: TransferScheduler::on_transfer_event
pub struct TransferScheduler<const N: usize, const B: usize, C: TransferChannel> {
    pixels: PixelBuffer<N>,
    buffer: TransferBuffer<B>,
    symbols: BitSymbols,
    cursor: usize,
    state: State,
    channel: C,
}

impl<const N: usize, const B: usize, C: TransferChannel> TransferScheduler<N, B, C> {
    /// Pixel slots one display request encodes: the strip plus one full
    /// buffer of trailing reset slots. The trailing region guarantees that
    /// at least one all-zero slot has physically streamed out, parking the
    /// line low, before the channel is disabled.
    pub const TOTAL_SLOTS: usize = N + 2 * B;

    /// Creates an engine around a configured hardware channel.
    pub fn new(channel: C, symbols: BitSymbols) -> Self {
        Self {
            pixels: PixelBuffer::new(),
            buffer: TransferBuffer::new(),
            symbols,
            cursor: 0,
            state: State::Idle,
            channel,
        }
    }

    /// The pixel store.
    pub fn pixels(&self) -> &PixelBuffer<N> {
        &self.pixels
    }

    /// The pixel store, for writing.
    pub fn pixels_mut(&mut self) -> &mut PixelBuffer<N> {
        &mut self.pixels
    }

    /// The circular transfer buffer.
    pub fn buffer(&self) -> &TransferBuffer<B> {
        &self.buffer
    }

    /// The hardware channel handle.
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// The hardware channel handle, for driving the engine externally
    /// (host tests, diagnostics).
    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    /// Current engine state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Index of the next pixel slot to encode; values at or beyond `N`
    /// lie in the trailing reset region.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether a transfer is armed or streaming.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, State::Armed | State::Streaming)
    }

    /// Arms and starts a transfer of the current pixel data.
    ///
    /// Stops any transfer still in flight first, then pre-fills both buffer
    /// halves synchronously before enabling the channel, so the hardware
    /// never reads a half that has not been encoded for this request.
    /// Returns immediately; refills continue in interrupt context.
    pub fn display(&mut self) {
        self.channel.disable();
        self.state = State::Armed;
        self.cursor = 0;
        self.refill(Half::First);
        self.refill(Half::Second);
        self.state = State::Streaming;
        self.channel.enable();
    }

    /// Handles one completion signal from the hardware.
    ///
    /// Checks for termination first: once every slot of the request has been
    /// encoded, the already-queued tail is draining and the channel is shut
    /// down instead of refilled. Otherwise the half that just became free is
    /// re-encoded and its flag acknowledged.
    pub fn on_transfer_event(&mut self) {
        if self.cursor >= Self::TOTAL_SLOTS {
            self.channel.disable();
            self.channel.acknowledge_all();
            self.state = State::Done;
            return;
        }

        match self.channel.pending_event() {
            Some(TransferEvent::HalfComplete) => {
                self.refill(Half::First);
                self.channel.acknowledge(TransferEvent::HalfComplete);
            }
            Some(TransferEvent::Complete) => {
                self.refill(Half::Second);
                self.channel.acknowledge(TransferEvent::Complete);
            }
            None => {}
        }
    }

    fn refill(&mut self, half: Half) {
        self.cursor = encoder::encode_half(
            self.buffer.half_mut(half),
            &self.pixels,
            self.cursor,
            &self.symbols,
        );
    }
}
