// src/common/protocol.rs

//! ChipCap 2 normal-mode wire protocol.
//!
//! The entire protocol surface is one command: Data Fetch (`0xDF`) written
//! to the device, followed in the same transaction by a block read of 2 or
//! 4 bytes. See Amphenol Advanced Sensors, "ChipCap 2 humidity and
//! temperature sensor," Datasheet AAS-920-558E, Feb. 2015.

/// The Data Fetch command code.
pub const DATA_FETCH: u8 = 0xDF;

/// Factory-default 7-bit I2C address of the ChipCap 2.
pub const DEFAULT_ADDRESS: u8 = 0x28;

/// Reply bytes needed for a humidity reading (status + humidity field).
pub const HUMIDITY_REPLY_LEN: usize = 2;

/// Reply bytes needed for a temperature reading. The device always orders
/// the reply humidity-then-temperature, so the humidity bytes come along.
pub const TEMPERATURE_REPLY_LEN: usize = 4;

/// Largest reply a Data Fetch can return.
pub const REPLY_MAX: usize = 5;

/// Humidity scale as (numerator, denominator): raw LSB = 1/163.84 %RH.
pub const HUMIDITY_SCALE: (i32, i32) = (100, 16384);

/// Temperature scale as (numerator, denominator): raw LSB = 1/99.29 °C.
pub const TEMPERATURE_SCALE: (i32, i32) = (100, 9929);

/// Temperature offset in °C, applied after scaling.
pub const TEMPERATURE_OFFSET: i32 = -40;

/// The raw bytes returned by one Data Fetch transaction.
///
/// Byte 0 carries the status field in bits 7:6 (masked off here; stale-data
/// and sleep-mode signalling are unsupported) and the humidity mantissa's
/// top bits in bits 5:0. Byte 1 is the humidity low byte. Bytes 2..4 carry
/// the temperature mantissa, with byte 3's low two bits unused and its next
/// two bits folded away by the divide.
///
/// Consumed immediately after the transaction that produced it; nothing is
/// cached across reads.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ReplyBuffer {
    bytes: [u8; REPLY_MAX],
    len: usize,
}

impl ReplyBuffer {
    /// Wraps a completed transaction's bytes. `len` is the count the
    /// transport actually returned; unread positions stay zero.
    pub(crate) fn new(bytes: [u8; REPLY_MAX], len: usize) -> Self {
        ReplyBuffer { bytes, len }
    }

    /// Number of bytes the transaction returned.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The returned bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// The 14-bit relative-humidity mantissa: byte 0 masked with `0x3F`,
    /// shifted left 8, plus byte 1. Meaningful only when the reply holds at
    /// least [`HUMIDITY_REPLY_LEN`] bytes.
    pub fn humidity_raw(&self) -> u16 {
        (((self.bytes[0] & 0x3F) as u16) << 8) + self.bytes[1] as u16
    }

    /// The 14-bit temperature mantissa: byte 2 shifted left 6, plus byte 3
    /// integer-divided by 4. The division is the calibrated bit
    /// arrangement, not a shortcut; byte 3's low bits are discarded.
    /// Meaningful only when the reply holds at least
    /// [`TEMPERATURE_REPLY_LEN`] bytes.
    pub fn temperature_raw(&self) -> u16 {
        ((self.bytes[2] as u16) << 6) + (self.bytes[3] as u16) / 4
    }
}
