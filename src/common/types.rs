// src/common/types.rs

/// The two physical quantities a ChipCap 2 reports.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelType {
    /// Relative humidity, %RH after scaling.
    Humidity,
    /// Temperature, °C after scaling and offset.
    Temperature,
}

/// The aspects of a channel a host may query.
///
/// `Raw` triggers a bus transaction; `Scale` and `Offset` are fixed
/// datasheet constants and never touch the bus.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelInfo {
    /// The unscaled 14-bit mantissa from the last Data Fetch.
    Raw,
    /// The fractional scale to apply to a raw mantissa.
    Scale,
    /// The fixed offset to add after scaling.
    Offset,
}

/// A decoded query result. Exactly one variant is meaningful per
/// [`ChannelInfo`] kind; division of a `Fractional` scale is left to the
/// caller so the caller's numeric type sets the precision policy.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelValue {
    /// Integer raw code, range 0..=16383.
    Raw(u16),
    /// A fractional constant, numerator over denominator.
    Fractional { numerator: i32, denominator: i32 },
    /// A fixed integer offset.
    Offset(i32),
}

/// Which info kinds a channel provides.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChannelSpec {
    pub channel: ChannelType,
    pub info: &'static [ChannelInfo],
}

impl ChannelSpec {
    /// True if this channel answers queries for `info`.
    pub fn provides(&self, info: ChannelInfo) -> bool {
        self.info.contains(&info)
    }
}

/// The device's channel table. Humidity has no offset concept.
pub const CHANNELS: [ChannelSpec; 2] = [
    ChannelSpec {
        channel: ChannelType::Humidity,
        info: &[ChannelInfo::Raw, ChannelInfo::Scale],
    },
    ChannelSpec {
        channel: ChannelType::Temperature,
        info: &[ChannelInfo::Raw, ChannelInfo::Scale, ChannelInfo::Offset],
    },
];

impl ChannelType {
    /// Returns the spec table entry for this channel.
    pub fn spec(&self) -> &'static ChannelSpec {
        match self {
            ChannelType::Humidity => &CHANNELS[0],
            ChannelType::Temperature => &CHANNELS[1],
        }
    }
}
