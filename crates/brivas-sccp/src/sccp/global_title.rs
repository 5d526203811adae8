//! Global Title
//!
//! The GTI selects which one-octet fields precede the address digits. The
//! table in [`layout`] is the only description of that ordering; length
//! computation, encoding and decoding all walk it.

use crate::bcd;
use crate::errors::{Result, SccpError};
use crate::types::{EncodingScheme, NatureOfAddress, NumberingPlan};
use serde::{Deserialize, Serialize};

/// Widest value a nibble field can take
const NIBBLE_MAX: u8 = 0x0F;

/// One fixed octet of the Global Title header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GtField {
    NatureOfAddress,
    TranslationType,
    /// Numbering plan in the high nibble, encoding scheme in the low nibble
    NumberingPlanEncoding,
}

/// Fixed fields carried for a GTI, in wire order.
///
/// GTI 0 and 5-15 carry none.
pub fn layout(gti: u8) -> &'static [GtField] {
    use GtField::*;

    match gti {
        1 => &[NatureOfAddress],
        2 => &[TranslationType],
        3 => &[TranslationType, NumberingPlanEncoding],
        4 => &[TranslationType, NumberingPlanEncoding, NatureOfAddress],
        _ => &[],
    }
}

/// Octets the GTI adds in front of the digits
pub fn header_len(gti: u8) -> usize {
    layout(gti).len()
}

/// Global Title
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalTitle {
    /// GTI 2, 3, 4
    pub translation_type: u8,
    /// GTI 3, 4 (4 bits)
    pub numbering_plan: u8,
    /// GTI 3, 4 (4 bits); 1 means odd number of digits
    pub encoding_scheme: u8,
    /// GTI 1, 4
    pub nature_of_address: u8,
    /// Packed address digits
    pub global_title_info: Vec<u8>,
}

impl GlobalTitle {
    /// Create E.164 Global Title (most common)
    pub fn e164(digits: &str) -> Result<Self> {
        let (info, odd) = bcd::string_to_swapped_bytes(digits)?;
        let encoding_scheme = if odd {
            EncodingScheme::BcdOdd
        } else {
            EncodingScheme::BcdEven
        };

        Ok(Self {
            translation_type: 0,
            numbering_plan: NumberingPlan::IsdnTelephony as u8,
            encoding_scheme: encoding_scheme as u8,
            nature_of_address: NatureOfAddress::International as u8,
            global_title_info: info,
        })
    }

    /// Octet written for one header field.
    ///
    /// Nibble fields wider than 4 bits are not rejected here: the numbering
    /// plan loses its high bits to the shift and the encoding scheme is masked.
    pub fn field_octet(&self, field: GtField) -> u8 {
        match field {
            GtField::NatureOfAddress => self.nature_of_address,
            GtField::TranslationType => self.translation_type,
            GtField::NumberingPlanEncoding => {
                (self.numbering_plan << 4) | (self.encoding_scheme & NIBBLE_MAX)
            }
        }
    }

    /// Store one header octet read off the wire
    pub fn set_field(&mut self, field: GtField, octet: u8) {
        match field {
            GtField::NatureOfAddress => self.nature_of_address = octet,
            GtField::TranslationType => self.translation_type = octet,
            GtField::NumberingPlanEncoding => {
                self.numbering_plan = (octet >> 4) & NIBBLE_MAX;
                self.encoding_scheme = octet & NIBBLE_MAX;
            }
        }
    }

    /// Copy keeping only the header fields `gti` carries, others zeroed
    pub fn gated(self, gti: u8) -> Self {
        let mut gt = Self {
            global_title_info: self.global_title_info,
            ..Default::default()
        };
        for &field in layout(gti) {
            match field {
                GtField::NatureOfAddress => gt.nature_of_address = self.nature_of_address,
                GtField::TranslationType => gt.translation_type = self.translation_type,
                GtField::NumberingPlanEncoding => {
                    gt.numbering_plan = self.numbering_plan;
                    gt.encoding_scheme = self.encoding_scheme;
                }
            }
        }
        gt
    }

    /// Reject nibble fields that would not survive packing
    pub fn validate(&self) -> Result<()> {
        check_nibble("numbering_plan", self.numbering_plan)?;
        check_nibble("encoding_scheme", self.encoding_scheme)
    }

    pub fn is_odd_digits(&self) -> bool {
        self.encoding_scheme == EncodingScheme::BcdOdd as u8
    }

    /// Address digits as a string, empty when no digits are present
    pub fn digits(&self) -> String {
        if self.global_title_info.is_empty() {
            return String::new();
        }
        bcd::swapped_bytes_to_string(&self.global_title_info, self.is_odd_digits())
    }
}

fn check_nibble(field: &'static str, value: u8) -> Result<()> {
    if value > NIBBLE_MAX {
        return Err(SccpError::FieldOutOfRange {
            field,
            value: value as u32,
            max: NIBBLE_MAX as u32,
        });
    }
    Ok(())
}
