// src/driver/mod.rs

//! The bound driver object.
//!
//! A [`ChipCap2`] owns one transport handle addressed to one device. It is
//! created with [`ChipCap2::new`] (which runs the one-time capability
//! check) and torn down with [`ChipCap2::release`]; it holds no other
//! state, so every read is an independent bus transaction and nothing is
//! cached between calls.

mod transaction;

use crate::common::{
    error::Cc2Error,
    hal_traits::Cc2Transport,
    protocol::{
        HUMIDITY_REPLY_LEN, HUMIDITY_SCALE, TEMPERATURE_OFFSET, TEMPERATURE_REPLY_LEN,
        TEMPERATURE_SCALE,
    },
    types::{ChannelInfo, ChannelType, ChannelValue},
};

/// Driver for a single ChipCap 2 device.
pub struct ChipCap2<B> {
    bus: B,
}

impl<B> ChipCap2<B>
where
    B: Cc2Transport,
{
    /// Binds the driver to a transport.
    ///
    /// Verifies once that the transport can carry the Data Fetch exchange;
    /// a transport that cannot is rejected outright rather than failing on
    /// every later read.
    pub fn new(bus: B) -> Result<Self, Cc2Error<B::Error>> {
        if !bus.capabilities().supports_data_fetch() {
            return Err(Cc2Error::UnsupportedTransport);
        }
        Ok(ChipCap2 { bus })
    }

    /// Consumes the driver and hands the transport back.
    pub fn release(self) -> B {
        self.bus
    }

    /// Reads one aspect of one channel.
    ///
    /// `Raw` performs a Data Fetch transaction; `Scale` and `Offset`
    /// answer from the datasheet constants without touching the bus.
    /// `(Humidity, Offset)` is undefined for this device and is rejected
    /// as [`Cc2Error::InvalidRequest`].
    pub fn read_channel(
        &mut self,
        channel: ChannelType,
        info: ChannelInfo,
    ) -> Result<ChannelValue, Cc2Error<B::Error>> {
        match info {
            ChannelInfo::Raw => {
                let raw = match channel {
                    ChannelType::Humidity => {
                        self.data_fetch(HUMIDITY_REPLY_LEN)?.humidity_raw()
                    }
                    ChannelType::Temperature => {
                        self.data_fetch(TEMPERATURE_REPLY_LEN)?.temperature_raw()
                    }
                };
                Ok(ChannelValue::Raw(raw))
            }
            ChannelInfo::Scale => {
                let (numerator, denominator) = match channel {
                    ChannelType::Humidity => HUMIDITY_SCALE,
                    ChannelType::Temperature => TEMPERATURE_SCALE,
                };
                Ok(ChannelValue::Fractional {
                    numerator,
                    denominator,
                })
            }
            ChannelInfo::Offset => match channel {
                ChannelType::Temperature => Ok(ChannelValue::Offset(TEMPERATURE_OFFSET)),
                // Humidity has no offset concept; fail loudly instead of
                // handing back an undefined value.
                ChannelType::Humidity => Err(Cc2Error::InvalidRequest { channel, info }),
            },
        }
    }

    /// Fetches the 14-bit humidity mantissa.
    pub fn raw_humidity(&mut self) -> Result<u16, Cc2Error<B::Error>> {
        Ok(self.data_fetch(HUMIDITY_REPLY_LEN)?.humidity_raw())
    }

    /// Fetches the 14-bit temperature mantissa.
    pub fn raw_temperature(&mut self) -> Result<u16, Cc2Error<B::Error>> {
        Ok(self.data_fetch(TEMPERATURE_REPLY_LEN)?.temperature_raw())
    }

    /// Fetches and scales a humidity reading, in thousandths of a %RH.
    ///
    /// Integer convenience on top of the raw/scale pair; hosts with their
    /// own numeric policy should use [`ChipCap2::read_channel`] and divide
    /// themselves.
    pub fn relative_humidity_milli_percent(&mut self) -> Result<i32, Cc2Error<B::Error>> {
        let raw = self.raw_humidity()? as i32;
        let (num, denom) = HUMIDITY_SCALE;
        Ok(raw * num * 1000 / denom)
    }

    /// Fetches, scales, and offsets a temperature reading, in m°C.
    pub fn temperature_milli_celsius(&mut self) -> Result<i32, Cc2Error<B::Error>> {
        let raw = self.raw_temperature()? as i32;
        let (num, denom) = TEMPERATURE_SCALE;
        Ok(raw * num * 1000 / denom + TEMPERATURE_OFFSET * 1000)
    }
}
