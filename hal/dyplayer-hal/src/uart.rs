//! UART serial communication abstractions
//!
//! Provides the blocking transmit/receive primitives the player driver
//! needs. Chip HALs (or test doubles) implement these directly, or wrap an
//! `embedded_io` port in [`crate::IoUart`].

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// UART receiver
pub trait UartRx {
    /// Error type for receive operations
    type Error;

    /// Read data from the UART
    ///
    /// Blocks until the buffer is filled, the line stays idle past the
    /// implementation's timeout, or an error occurs. Returns the number of
    /// bytes actually received, which may be less than `buf.len()`.
    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// UART configuration
///
/// DY-XXXX modules speak 9600 baud with fixed 8N1 framing, so the baud rate
/// is the only setting a board passes to its chip HAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
}

impl UartConfig {
    /// Line settings of the DY-XXXX module family
    pub const DY_MODULE: Self = Self { baudrate: 9600 };
}

impl Default for UartConfig {
    fn default() -> Self {
        Self::DY_MODULE
    }
}
