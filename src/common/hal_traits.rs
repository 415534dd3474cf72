// src/common/hal_traits.rs

use core::fmt::Debug;

/// The bus primitives a transport offers, as reported before first use.
///
/// The Data Fetch exchange needs both: a command byte written out, then a
/// block read in the same transaction. A transport missing either cannot
/// drive this device at all.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusCapabilities {
    /// Can write a lone command byte to the peer.
    pub byte_write: bool,
    /// Can read a multi-byte block following a command byte.
    pub block_read: bool,
}

impl BusCapabilities {
    /// Capabilities of a fully featured bus.
    pub const fn full() -> Self {
        BusCapabilities {
            byte_write: true,
            block_read: true,
        }
    }

    /// True if the Data Fetch exchange can be carried out.
    pub fn supports_data_fetch(&self) -> bool {
        self.byte_write && self.block_read
    }
}

/// Abstraction over a bus transport addressed to a single ChipCap 2.
///
/// Implemented for `embedded-hal` I2C buses by
/// [`I2cBus`](crate::transport::I2cBus); a custom implementation can wrap
/// any transport that can express the command-then-read exchange.
pub trait Cc2Transport {
    /// Associated error type for transport failures.
    type Error: Debug;

    /// Reports the primitives this transport supports. Queried once when a
    /// driver is bound, not per transaction.
    fn capabilities(&self) -> BusCapabilities;

    /// Writes `command` to the peer, then reads back up to `buf.len()`
    /// bytes in the same transaction. Returns the number of bytes actually
    /// read; the caller decides whether a short read is acceptable.
    ///
    /// The whole exchange must be atomic with respect to other traffic on
    /// a shared bus: implementations may not interleave another peer's
    /// bytes between the command write and the read. Any timeout is the
    /// transport's to enforce and to report as `Self::Error`.
    fn command_read(&mut self, command: u8, buf: &mut [u8]) -> Result<usize, Self::Error>;
}
