/// Completion signals raised by the hardware transfer channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferEvent {
    /// The first half of the circular buffer has been streamed out; the
    /// hardware is now reading the second half.
    HalfComplete,
    /// The second half has been streamed out; the hardware wrapped back to
    /// the start of the buffer.
    Complete,
}

/// The hardware side of the transfer engine.
///
/// Implemented by the PWM/DMA register layer; host tests substitute a
/// recording mock.
pub trait TransferChannel {
    /// Reloads the transfer count and starts streaming from the buffer
    /// start. Must only be called on a disabled channel.
    fn enable(&mut self);

    /// Stops the hardware from reading the buffer.
    fn disable(&mut self);

    /// Returns the completion event currently flagged, if any.
    ///
    /// The events physically occur in alternation; if both flags are ever
    /// observed at once, [`TransferEvent::HalfComplete`] is reported first,
    /// matching the buffer's read order.
    fn pending_event(&mut self) -> Option<TransferEvent>;

    /// Clears the flag of a handled event.
    fn acknowledge(&mut self, event: TransferEvent);

    /// Clears every pending flag of the channel.
    fn acknowledge_all(&mut self);
}
