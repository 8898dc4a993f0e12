//! UART interface trait
//!
//! This module defines the UART communication interface that driver code
//! under test is written against.

use crate::error::Result;

/// UART interface trait
///
/// Drivers consume this capability surface; tests hand them a
/// [`SimulatedUart`](crate::sim::SimulatedUart) while production code
/// supplies a hardware-backed implementation.
///
/// # Contract
///
/// - A `read` returning `Ok(0)` means no data is currently available. It is
///   not end-of-stream; callers poll and retry. No distinct end-of-stream
///   signal exists.
/// - `buffered` may understate the amount of pending data: it reports what
///   the receive FIFO exposes, not the total in flight.
/// - Implementations hold no internal locking. Only one logical caller per
///   instance; callers sharing an instance across threads supply their own
///   synchronization.
pub trait UartInterface {
    /// Write data to the UART.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns `UartError::WriteFailed` if the write operation fails.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Read data from the UART.
    ///
    /// Reads up to `buffer.len()` bytes into the provided buffer and returns
    /// the number of bytes actually read. May return fewer bytes than are
    /// pending, including zero when nothing is available yet.
    ///
    /// # Errors
    ///
    /// Returns `UartError::ReadFailed` if the read operation fails.
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize>;

    /// Number of bytes ready to read without blocking.
    ///
    /// Reports the receive FIFO's view of pending data, which may be smaller
    /// than the total amount in flight.
    fn buffered(&self) -> usize;

    /// Flush the transmit path.
    ///
    /// Blocks until all pending transmit data has been sent.
    ///
    /// # Errors
    ///
    /// Returns `UartError::WriteFailed` if the flush operation fails.
    fn flush(&mut self) -> Result<()>;
}
