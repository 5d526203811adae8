//! SCCP (Signaling Connection Control Part) addressing
//!
//! ITU-T Q.713 Called/Calling Party Address parameter.

mod address;
mod global_title;
mod indicator;

pub use address::PartyAddress;
pub use global_title::{header_len, layout, GlobalTitle, GtField};
pub use indicator::AddressIndicator;

/// SCCP parameter names carrying a party address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ParameterName {
    CalledPartyAddress = 0x03,
    CallingPartyAddress = 0x04,
}

impl ParameterName {
    pub fn decode(v: u8) -> Option<Self> {
        match v {
            0x03 => Some(Self::CalledPartyAddress),
            0x04 => Some(Self::CallingPartyAddress),
            _ => None,
        }
    }
}
