//! Error types for simulated peripheral operations.

/// Result type for UART operations.
pub type Result<T> = core::result::Result<T, UartError>;

/// UART-level errors.
///
/// These mirror the failures a hardware UART backend reports. The simulated
/// peripheral never produces them: in-memory buffer operations cannot fail,
/// and a zero-length read means "no data yet" rather than an error. The
/// variants exist so driver code written against
/// [`UartInterface`](crate::traits::UartInterface) compiles against the same
/// fallible surface it faces on hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UartError {
    /// Write operation failed
    #[error("write failed")]
    WriteFailed,
    /// Read operation failed
    #[error("read failed")]
    ReadFailed,
    /// Timeout occurred
    #[error("timeout")]
    Timeout,
    /// Receive overrun
    #[error("receive overrun")]
    Overrun,
}
