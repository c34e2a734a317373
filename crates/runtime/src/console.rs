//! Byte output sink. Every higher-level write ends up as one
//! [`Device::put_char`] per byte, in order, unbuffered.
use core::fmt;

use types::Radix;

use crate::board::Device;
use crate::codec::{self, ConversionBuffer};
use crate::config::Config;

pub struct Console<'a, D: Device + ?Sized> {
    device: &'a mut D,
}

impl<'a, D: Device + ?Sized> Console<'a, D> {
    pub fn new(device: &'a mut D) -> Self {
        Self { device }
    }

    #[inline]
    pub fn emit_char(&mut self, c: u8) {
        self.device.put_char(c);
    }

    pub fn emit_string(&mut self, s: impl AsRef<[u8]>) {
        for &c in s.as_ref() {
            self.emit_char(c);
        }
    }

    pub fn emit_line(&mut self, s: impl AsRef<[u8]>) {
        self.emit_string(s);
        self.emit_char(b'\n');
    }

    pub fn emit_integer(&mut self, n: i64, radix: Radix) {
        let mut buf: ConversionBuffer = [0; Config::CONVERSION_BUFFER_LEN];
        let text = codec::integer_to_text(n, radix, &mut buf);
        self.emit_string(text);
    }

    pub fn emit_unsigned(&mut self, n: u64, radix: Radix) {
        let mut buf: ConversionBuffer = [0; Config::CONVERSION_BUFFER_LEN];
        let text = codec::unsigned_to_text(n, radix, &mut buf);
        self.emit_string(text);
    }

    /// newlib `write`: the descriptor is ignored, everything goes to the
    /// console. Returns the number of bytes written.
    pub fn write(&mut self, _fd: i32, bytes: &[u8]) -> usize {
        self.emit_string(bytes);
        bytes.len()
    }
}

impl<D: Device + ?Sized> fmt::Write for Console<'_, D> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.emit_string(s);
        Ok(())
    }
}
