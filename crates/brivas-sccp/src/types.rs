//! Common types used by the SCCP address codec

use serde::{Deserialize, Serialize};
use std::fmt;

/// Signalling Point Code (14-bit ITU)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointCode(pub u16);

impl PointCode {
    /// Largest value a 14-bit point code can carry
    pub const MAX: u16 = 0x3FFF;

    /// Create ITU format point code (3-8-3)
    pub fn itu(zone: u8, network: u8, sp: u8) -> Self {
        let pc = ((zone as u16 & 0x07) << 11)
            | ((network as u16 & 0xFF) << 3)
            | (sp as u16 & 0x07);
        Self(pc)
    }

    /// Get raw value
    pub fn value(&self) -> u16 {
        self.0
    }

    pub fn zone(&self) -> u8 {
        ((self.0 >> 11) & 0x07) as u8
    }

    pub fn network(&self) -> u8 {
        ((self.0 >> 3) & 0xFF) as u8
    }

    pub fn signalling_point(&self) -> u8 {
        (self.0 & 0x07) as u8
    }

    /// Fits in 14 bits
    pub fn is_valid(&self) -> bool {
        self.0 <= Self::MAX
    }
}

impl From<u16> for PointCode {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

impl fmt::Display for PointCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.zone(), self.network(), self.signalling_point())
    }
}

/// Numbering Plan for Global Titles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum NumberingPlan {
    Unknown = 0,
    IsdnTelephony = 1,  // E.164
    Generic = 2,
    Data = 3,           // X.121
    Telex = 4,
    MaritimeMobile = 5,
    LandMobile = 6,
    IsdnMobile = 7,     // E.214
}

/// Nature of Address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum NatureOfAddress {
    Unknown = 0,
    SubscriberNumber = 1,
    Reserved = 2,
    NationalSignificant = 3,
    International = 4,
}

/// Encoding Scheme for Global Title digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum EncodingScheme {
    Unknown = 0,
    BcdOdd = 1,
    BcdEven = 2,
}

impl EncodingScheme {
    /// BCD scheme matching the parity of a digit count
    pub fn for_digit_count(count: usize) -> Self {
        if count % 2 == 1 {
            Self::BcdOdd
        } else {
            Self::BcdEven
        }
    }
}
