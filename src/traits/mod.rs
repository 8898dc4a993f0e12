//! Peripheral interface traits
//!
//! This module defines the interfaces driver code under test consumes.
//! Simulated peripherals and real hardware backends both implement them.

pub mod uart;

// Re-export trait interfaces
pub use uart::UartInterface;
