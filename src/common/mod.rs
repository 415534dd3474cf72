// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod device;
pub mod error;
pub mod hal_traits;
pub mod protocol;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

// From device.rs
pub use device::PartNumber;

// From error.rs
pub use error::Cc2Error;

// From hal_traits.rs
pub use hal_traits::{BusCapabilities, Cc2Transport};

// From protocol.rs
pub use protocol::ReplyBuffer;

// From types.rs
pub use types::{ChannelInfo, ChannelSpec, ChannelType, ChannelValue, CHANNELS};
