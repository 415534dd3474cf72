// src/lib.rs

#![cfg_attr(not(test), no_std)]

//! Platform-agnostic driver for the Amphenol Advanced Sensors / Telaire
//! ChipCap 2 family of 14-bit digital humidity and temperature sensors.
//!
//! The ChipCap 2's normal-mode protocol is a single Data Fetch command byte
//! (`0xDF`) followed by a block read in the same I2C transaction. The reply
//! carries a 14-bit relative-humidity mantissa in bytes 0..2 and a 14-bit
//! temperature mantissa in bytes 2..4; this crate extracts those fields and
//! exposes the datasheet's fixed fractional scales and temperature offset.
//!
//! Supported parts (all protocol-identical in normal mode): CC2D23, CC2D25,
//! CC2D33, CC2D35. Devices configured to enter sleep mode after power-on
//! reset, Command Mode configuration, and the alarm/analog options are out
//! of scope.

pub mod common;
pub mod driver;
pub mod transport;

// Re-export key types for convenience
pub use common::error::Cc2Error;
pub use common::types::{ChannelInfo, ChannelType, ChannelValue};
pub use driver::ChipCap2;
pub use transport::I2cBus;
