// src/common/device.rs

//! Part-number table for the ChipCap 2 family.
//!
//! All four digital parts speak the identical normal-mode protocol; they
//! differ only in accuracy grade and supply voltage. The table exists so a
//! host can map its device identities (board config, devicetree-style
//! compatible strings) onto this driver; nothing in the read path branches
//! on it.
//!
//! Part numbers per Amphenol Thermometrics, App. Guide, AAS-916-127 Rev. J.

/// A supported ChipCap 2 part number.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PartNumber {
    /// ChipCap 2, digital, 2%, 3.3 V
    Cc2d23,
    /// ChipCap 2, digital, 2%, 5 V
    Cc2d25,
    /// ChipCap 2, digital, 3%, 3.3 V
    Cc2d33,
    /// ChipCap 2, digital, 3%, 5 V
    Cc2d35,
}

/// All supported parts.
pub const PART_NUMBERS: [PartNumber; 4] = [
    PartNumber::Cc2d23,
    PartNumber::Cc2d25,
    PartNumber::Cc2d33,
    PartNumber::Cc2d35,
];

impl PartNumber {
    /// The bare device id string, e.g. `"cc2d23"`.
    pub fn id(&self) -> &'static str {
        match self {
            PartNumber::Cc2d23 => "cc2d23",
            PartNumber::Cc2d25 => "cc2d25",
            PartNumber::Cc2d33 => "cc2d33",
            PartNumber::Cc2d35 => "cc2d35",
        }
    }

    /// The vendor-prefixed compatible string, e.g. `"amp,cc2d23"`.
    pub fn compatible(&self) -> &'static str {
        match self {
            PartNumber::Cc2d23 => "amp,cc2d23",
            PartNumber::Cc2d25 => "amp,cc2d25",
            PartNumber::Cc2d33 => "amp,cc2d33",
            PartNumber::Cc2d35 => "amp,cc2d35",
        }
    }

    /// Looks a part up by bare id string.
    pub fn from_id(id: &str) -> Option<Self> {
        PART_NUMBERS.iter().copied().find(|p| p.id() == id)
    }

    /// Looks a part up by vendor-prefixed compatible string.
    pub fn from_compatible(compatible: &str) -> Option<Self> {
        PART_NUMBERS
            .iter()
            .copied()
            .find(|p| p.compatible() == compatible)
    }
}
