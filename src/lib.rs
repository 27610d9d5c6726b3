//! 15-bit CRC (polynomial feedback 0x4599, init 0x7FFF) for integrity
//! checks on arbitrary byte buffers.

pub mod crc;

pub use crc::{CRC15_INIT, CRC15_POLY, Crc15, crc15, crc15_update};
