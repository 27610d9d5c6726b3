//! 15-bit CRC over a byte slice.
//!
//! Polynomial feedback `0x4599`, initial register `0x7FFF`, MSB first.
//! The register is returned as-is: bit 15 is not masked off, and callers that
//! compare against stored checksums rely on that.
//!
//! ```
//! use crc15::crc::crc15;
//!
//! assert_eq!(crc15(b"AAAA"), 0xE397);
//! ```

/// Initial register value (all 15 low bits set).
pub const CRC15_INIT: u16 = 0x7FFF;

/// Feedback constant XORed in whenever bit 15 is set after a shift.
pub const CRC15_POLY: u16 = 0x4599;

const TOP_BIT: u16 = 0x8000;

/// CRC-15 of `data`, starting from [`CRC15_INIT`].
pub fn crc15(data: &[u8]) -> u16 {
    crc15_update(CRC15_INIT, data)
}

/// Continue a CRC-15 from a register previously returned by [`crc15`] or
/// this function.
pub fn crc15_update(crc: u16, data: &[u8]) -> u16 {
    let mut crc = crc;

    for &byte in data {
        crc ^= (byte as u16) << 7;
        for _ in 0..8 {
            crc <<= 1;
            if (crc & TOP_BIT) != 0 {
                crc ^= CRC15_POLY;
            }
        }
    }

    crc
}

/// Streaming CRC-15 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc15 {
    value: u16,
}

impl Crc15 {
    pub fn new() -> Self {
        Crc15 { value: CRC15_INIT }
    }

    /// Feed more bytes into the register.
    pub fn update(&mut self, data: &[u8]) {
        self.value = crc15_update(self.value, data);
    }

    /// Current register value.
    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = CRC15_INIT;
    }
}

impl Default for Crc15 {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Crc15> for u16 {
    fn from(crc: Crc15) -> Self {
        crc.value
    }
}
