//! Adapter from `embedded_io` serial ports to the UART traits
//!
//! Most chip HALs (embassy, esp-hal, rp-hal) and host serial crates expose
//! their blocking UARTs through `embedded_io::{Read, Write}`. [`IoUart`]
//! lets those be handed straight to the player driver.

use embedded_io::{Read, Write};

use crate::uart::{UartRx, UartTx};

/// Wraps an `embedded_io` port as a [`UartTx`] + [`UartRx`]
#[derive(Debug)]
pub struct IoUart<T> {
    inner: T,
}

impl<T> IoUart<T> {
    /// Wrap a serial port
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped port
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the wrapped port
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Release the wrapped port
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Write> UartTx for IoUart<T> {
    type Error = T::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.inner.flush()
    }
}

impl<T: Read> UartRx for IoUart<T> {
    type Error = T::Error;

    /// Keeps reading until `buf` is full or the port reports end of data
    /// (a zero-length read, which timeout-capable ports use for idle lines).
    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..])? {
                0 => break,
                n => filled += n,
            }
        }
        Ok(filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_io::{ErrorKind, ErrorType};
    use heapless::Vec;

    /// Serial port that hands out at most `chunk` bytes per read
    struct ChunkedPort {
        rx: Vec<u8, 16>,
        pos: usize,
        chunk: usize,
        tx: Vec<u8, 16>,
    }

    impl ChunkedPort {
        fn new(rx: &[u8], chunk: usize) -> Self {
            Self {
                rx: Vec::from_slice(rx).unwrap(),
                pos: 0,
                chunk,
                tx: Vec::new(),
            }
        }
    }

    impl ErrorType for ChunkedPort {
        type Error = ErrorKind;
    }

    impl Read for ChunkedPort {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            let remaining = self.rx.len() - self.pos;
            let n = remaining.min(self.chunk).min(buf.len());
            buf[..n].copy_from_slice(&self.rx[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    impl Write for ChunkedPort {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.tx.extend_from_slice(buf).map_err(|_| ErrorKind::OutOfMemory)?;
            Ok(buf.len())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_read_reassembles_chunks() {
        let mut uart = IoUart::new(ChunkedPort::new(&[0xAA, 0x0C, 0x02, 0x01, 0x2C, 0xE5], 2));
        let mut buf = [0u8; 6];
        assert_eq!(uart.read_blocking(&mut buf), Ok(6));
        assert_eq!(buf, [0xAA, 0x0C, 0x02, 0x01, 0x2C, 0xE5]);
    }

    #[test]
    fn test_read_stops_on_idle_line() {
        let mut uart = IoUart::new(ChunkedPort::new(&[0xAA, 0x01], 4));
        let mut buf = [0u8; 6];
        assert_eq!(uart.read_blocking(&mut buf), Ok(2));
    }

    #[test]
    fn test_write_passes_through() {
        let mut uart = IoUart::new(ChunkedPort::new(&[], 1));
        uart.write_blocking(&[0xAA, 0x02, 0x00]).unwrap();
        uart.write_blocking(&[0xAC]).unwrap();
        uart.flush().unwrap();
        assert_eq!(uart.into_inner().tx.as_slice(), &[0xAA, 0x02, 0x00, 0xAC]);
    }
}
