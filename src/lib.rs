//! uart_sim - Simulated UART peripheral for driver testing
//!
//! This library provides a software stand-in for a hardware UART so that
//! serial driver code can be exercised in automated tests without physical
//! hardware. Driver code talks to [`traits::UartInterface`]; tests hand it a
//! [`sim::SimulatedUart`] staged with receive data and inspect what the
//! driver transmitted.
//!
//! The simulator deliberately misbehaves within bounds: reads return
//! randomly sized chunks after a bounded random delay, and the
//! buffered-length query reports only what a small hardware receive FIFO
//! would expose. Drivers that survive it handle partial reads and jitter
//! correctly.

pub mod error;
pub mod sim;
pub mod traits;

// Re-export commonly used types
pub use error::{Result, UartError};
pub use sim::{NoiseSource, SimUartConfig, SimulatedUart, StdNoise};
pub use traits::UartInterface;
