//! Simulated peripheral implementations
//!
//! This module provides the software UART used by driver tests in place of
//! actual hardware. The simulator misbehaves within bounds on purpose:
//! reads return randomly sized chunks after a bounded random delay, and the
//! buffered-length query reports only what a small hardware receive FIFO
//! would expose.

mod noise;
mod uart;

pub use noise::{NoiseSource, StdNoise};
pub use uart::{SimUartConfig, SimulatedUart};
