//! Simulated UART peripheral
//!
//! Provides in-memory buffers for transmit and receive data plus a small
//! simulated hardware receive FIFO, letting driver tests run against
//! realistic partial reads and latency without hardware.

use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

use tracing::trace;

use crate::error::Result;
use crate::sim::noise::{NoiseSource, StdNoise};
use crate::traits::UartInterface;

/// Configuration for [`SimulatedUart`].
#[derive(Debug, Clone, Copy)]
pub struct SimUartConfig {
    /// Upper bound for injected read latency. Zero disables the delay.
    pub max_delay: Duration,
    /// RNG seed for deterministic mode. None = random.
    pub seed: Option<u64>,
}

impl Default for SimUartConfig {
    fn default() -> Self {
        Self {
            max_delay: Duration::ZERO,
            seed: None,
        }
    }
}

/// Simulated UART peripheral.
///
/// Transmitted data accumulates in an in-memory buffer for test assertions.
/// Received data is staged by the harness and served through a simulated
/// 16-byte hardware FIFO: [`buffered`](UartInterface::buffered) reports only
/// the slice of pending data the FIFO exposes, and
/// [`read`](UartInterface::read) returns randomly sized chunks after a
/// bounded random delay, so drivers cannot assume whole-buffer, zero-latency
/// reads.
///
/// Not internally synchronized: one logical caller per instance. Driver code
/// under test supplies its own locking discipline and the simulator does not
/// mask its absence. A test that must not stall while `read` sleeps runs the
/// call on a dedicated worker thread.
///
/// # Example
///
/// ```
/// use uart_sim::sim::{SimUartConfig, SimulatedUart};
/// use uart_sim::traits::UartInterface;
///
/// let mut uart = SimulatedUart::new(SimUartConfig::default());
///
/// // Verify what a driver transmitted
/// uart.write(b"AT\r\n").unwrap();
/// assert_eq!(uart.tx_buffer(), b"AT\r\n");
///
/// // Stage inbound data, then drain it the way a driver would
/// uart.inject_rx_data(b"OK\r\n");
/// let mut received = Vec::new();
/// let mut buf = [0u8; 8];
/// loop {
///     let n = uart.read(&mut buf).unwrap();
///     if n == 0 {
///         break;
///     }
///     received.extend_from_slice(&buf[..n]);
/// }
/// assert_eq!(received, b"OK\r\n");
/// ```
#[derive(Debug)]
pub struct SimulatedUart {
    config: SimUartConfig,
    tx_buffer: Vec<u8>,
    rx_buffer: VecDeque<u8>,
    available_len: usize,
    noise: Box<dyn NoiseSource>,
}

impl SimulatedUart {
    /// Capacity of the simulated receive FIFO in bytes.
    ///
    /// Real UARTs expose small hardware FIFOs (16, 32, 64 bytes). Pending
    /// data beyond this stays invisible to `buffered` until earlier bytes
    /// drain.
    const FIFO_CAP: usize = 16;

    /// Create a new simulated UART.
    pub fn new(config: SimUartConfig) -> Self {
        let noise = match config.seed {
            Some(seed) => StdNoise::seeded(seed),
            None => StdNoise::new(),
        };
        Self::with_noise(config, Box::new(noise))
    }

    /// Create a simulated UART with the given worst-case read latency.
    ///
    /// Zero keeps reads deterministic-fast for tests that do not exercise
    /// timing.
    pub fn with_max_delay_ms(max_delay_ms: u64) -> Self {
        Self::new(SimUartConfig {
            max_delay: Duration::from_millis(max_delay_ms),
            ..SimUartConfig::default()
        })
    }

    /// Create a simulated UART drawing latency and chunk sizes from a
    /// caller-supplied noise source.
    ///
    /// The `seed` field of `config` is ignored; the source already embodies
    /// whatever determinism the caller wants.
    pub fn with_noise(config: SimUartConfig, noise: Box<dyn NoiseSource>) -> Self {
        Self {
            config,
            tx_buffer: Vec::new(),
            rx_buffer: VecDeque::new(),
            available_len: 0,
            noise,
        }
    }

    /// Get transmitted data (for test verification)
    pub fn tx_buffer(&self) -> Vec<u8> {
        self.tx_buffer.clone()
    }

    /// Clear transmit buffer
    pub fn clear_tx_buffer(&mut self) {
        self.tx_buffer.clear();
    }

    /// Inject receive data (for test setup)
    ///
    /// Appends to any unread data already staged; earlier bytes stay queued
    /// ahead of the new ones.
    pub fn inject_rx_data(&mut self, data: &[u8]) {
        self.rx_buffer.extend(data);
        self.update_available();
    }

    /// Recalculate how much of the pending receive data the FIFO exposes.
    ///
    /// Called after every mutation of the receive buffer, so `buffered` is
    /// never stale when a read begins.
    fn update_available(&mut self) {
        let total = self.rx_buffer.len();
        if total == 0 {
            self.available_len = 0;
        } else if total <= Self::FIFO_CAP {
            self.available_len = total;
        } else {
            // More is pending than the FIFO holds: expose a random slice.
            // The min() is unreachable while FIFO_CAP <= total in this
            // branch; it keeps the available_len <= total invariant intact
            // if the capacity ever changes.
            self.available_len = self.noise.int_in_range(1, Self::FIFO_CAP).min(total);
        }
        trace!(
            available = self.available_len,
            pending = total,
            "rx FIFO recomputed"
        );
    }
}

impl UartInterface for SimulatedUart {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        // No partial-write simulation: the transmit path accepts everything.
        self.tx_buffer.extend_from_slice(data);
        Ok(data.len())
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        if !self.config.max_delay.is_zero() {
            let delay = self.noise.delay_before(self.config.max_delay);
            trace!(delay_us = delay.as_micros() as u64, "injected read latency");
            thread::sleep(delay);
        }

        // "No data yet", not end-of-stream; callers poll.
        if self.rx_buffer.is_empty() || buffer.is_empty() {
            return Ok(0);
        }

        // Withhold bytes even when more are ready so callers must loop.
        let max_size = buffer.len().min(self.rx_buffer.len());
        let chunk = self.noise.int_in_range(1, max_size);

        for (dst, byte) in buffer.iter_mut().zip(self.rx_buffer.drain(..chunk)) {
            *dst = byte;
        }
        self.update_available();

        trace!(chunk, requested = buffer.len(), "partial read served");
        Ok(chunk)
    }

    fn buffered(&self) -> usize {
        self.available_len
    }

    fn flush(&mut self) -> Result<()> {
        // Transmit data is already buffered; nothing is in flight.
        Ok(())
    }
}
