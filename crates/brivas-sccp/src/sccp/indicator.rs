//! Address Indicator octet
//!
//! ```text
//!   bit  7      6        5 4 3 2     1      0
//!      spare  routing      GTI      SSN    PC
//! ```

use serde::{Deserialize, Serialize};

const PC_PRESENT: u8 = 0x01;
const SSN_PRESENT: u8 = 0x02;
const GTI_SHIFT: u8 = 2;
const GTI_MASK: u8 = 0x0F;
const ROUTE_ON_SSN: u8 = 0x40;

/// Address Indicator
///
/// Holds the raw octet so that spare bits survive a decode/encode cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressIndicator(pub u8);

impl AddressIndicator {
    /// Build an indicator from its fields. `gti` is truncated to 4 bits.
    pub fn new(pc_indicator: bool, ssn_indicator: bool, gti: u8, route_on_gt: bool) -> Self {
        let mut ai = (gti & GTI_MASK) << GTI_SHIFT;
        if pc_indicator {
            ai |= PC_PRESENT;
        }
        if ssn_indicator {
            ai |= SSN_PRESENT;
        }
        if !route_on_gt {
            ai |= ROUTE_ON_SSN;
        }
        Self(ai)
    }

    /// Signalling point code present (bit 0)
    pub fn has_point_code(&self) -> bool {
        self.0 & PC_PRESENT != 0
    }

    /// Subsystem number present (bit 1)
    pub fn has_subsystem_number(&self) -> bool {
        self.0 & SSN_PRESENT != 0
    }

    /// Global Title Indicator (bits 2-5)
    pub fn gti(&self) -> u8 {
        (self.0 >> GTI_SHIFT) & GTI_MASK
    }

    /// Routing indicator clear: route on Global Title, otherwise on PC/SSN.
    /// Has no effect on the layout.
    pub fn route_on_gt(&self) -> bool {
        self.0 & ROUTE_ON_SSN == 0
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<u8> for AddressIndicator {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

impl From<AddressIndicator> for u8 {
    fn from(ai: AddressIndicator) -> Self {
        ai.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_bits() {
        let ai = AddressIndicator(0x12);
        assert!(!ai.has_point_code());
        assert!(ai.has_subsystem_number());
        assert_eq!(ai.gti(), 4);
        assert!(ai.route_on_gt());

        let ai = AddressIndicator(0x43);
        assert!(ai.has_point_code());
        assert!(ai.has_subsystem_number());
        assert_eq!(ai.gti(), 0);
        assert!(!ai.route_on_gt());
    }

    #[test]
    fn test_indicator_build() {
        assert_eq!(AddressIndicator::new(false, true, 4, true).value(), 0x12);
        assert_eq!(AddressIndicator::new(true, true, 0, false).value(), 0x43);
        // GTI wider than 4 bits is masked
        assert_eq!(AddressIndicator::new(false, false, 0x1F, true).gti(), 0x0F);
    }

    #[test]
    fn test_spare_bit_ignored() {
        let ai = AddressIndicator(0x80 | 0x12);
        assert_eq!(ai.gti(), 4);
        assert!(ai.has_subsystem_number());
        assert!(ai.route_on_gt());
    }
}
