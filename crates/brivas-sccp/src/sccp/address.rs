//! SCCP Called/Calling Party Address
//!
//! ```text
//! +--------+-----------+--------+-----+-----------------+------------------+
//! | length | indicator | PC (2) | SSN | GT header (0-3) | GT address info  |
//! +--------+-----------+--------+-----+-----------------+------------------+
//! ```
//!
//! PC and SSN are present when the indicator says so; the GT header fields
//! follow [`layout`]. `length` counts every octet after itself.

use super::global_title::{header_len, layout, GlobalTitle};
use super::indicator::AddressIndicator;
use crate::errors::{Result, SccpError};
use crate::types::PointCode;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Length and indicator octets
const HEADER_LEN: usize = 2;

/// Largest encoding a one-octet length can describe
const MAX_WIRE_LEN: usize = u8::MAX as usize + 1;

/// SCCP Party Address parameter
///
/// Deserializing goes through [`PartyAddress::new`]; a serialized `length`
/// is ignored and derived again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PartyAddressFields")]
pub struct PartyAddress {
    /// Octets following the length octet
    length: u8,
    /// Address indicator
    pub indicator: AddressIndicator,
    /// Signalling Point Code, on the wire when the indicator says so.
    /// Decoding keeps the low 14 bits.
    pub point_code: u16,
    /// Subsystem Number, on the wire when the indicator says so
    pub subsystem_number: u8,
    /// Global Title
    pub global_title: GlobalTitle,
}

impl PartyAddress {
    /// Create a party address, deriving its length.
    ///
    /// Fields the indicator does not put on the wire are zeroed, so the value
    /// equals what decoding its encoding yields. Rejects a point code wider
    /// than 14 bits, nibble fields wider than 4 bits and contents that would
    /// not fit a one-octet length.
    pub fn new(
        indicator: AddressIndicator,
        point_code: u16,
        subsystem_number: u8,
        global_title: GlobalTitle,
    ) -> Result<Self> {
        let point_code = if indicator.has_point_code() { point_code } else { 0 };
        let subsystem_number = if indicator.has_subsystem_number() {
            subsystem_number
        } else {
            0
        };
        let global_title = global_title.gated(indicator.gti());

        if point_code > PointCode::MAX {
            return Err(SccpError::FieldOutOfRange {
                field: "point_code",
                value: point_code as u32,
                max: PointCode::MAX as u32,
            });
        }
        global_title.validate()?;

        let mut address = Self {
            length: 0,
            indicator,
            point_code,
            subsystem_number,
            global_title,
        };

        let wire_len = address.wire_len();
        if wire_len > MAX_WIRE_LEN {
            return Err(SccpError::ParameterTooLong(wire_len));
        }
        address.set_length();

        Ok(address)
    }

    /// Create address routed on PC/SSN without a Global Title
    pub fn from_ssn_pc(ssn: u8, pc: PointCode) -> Result<Self> {
        let indicator = AddressIndicator::new(true, true, 0, false);
        Self::new(indicator, pc.value(), ssn, GlobalTitle::default())
    }

    /// Create address routed on Global Title
    pub fn from_gt(gti: u8, gt: GlobalTitle, ssn: Option<u8>) -> Result<Self> {
        let indicator = AddressIndicator::new(false, ssn.is_some(), gti, true);
        Self::new(indicator, 0, ssn.unwrap_or(0), gt)
    }

    /// Declared length: octets following the length octet
    pub fn length(&self) -> u8 {
        self.length
    }

    /// Recompute the length octet from the current fields.
    ///
    /// Needed after editing the public fields. Saturates at 255; such a value
    /// is refused by the encoder.
    pub fn set_length(&mut self) {
        self.length = self.derived_length();
    }

    /// Total encoded size, length octet included
    pub fn wire_len(&self) -> usize {
        let mut len = HEADER_LEN + self.global_title.global_title_info.len();
        if self.has_point_code() {
            len += 2;
        }
        if self.has_subsystem_number() {
            len += 1;
        }
        len + header_len(self.gti())
    }

    pub fn has_point_code(&self) -> bool {
        self.indicator.has_point_code()
    }

    pub fn has_subsystem_number(&self) -> bool {
        self.indicator.has_subsystem_number()
    }

    pub fn gti(&self) -> u8 {
        self.indicator.gti()
    }

    pub fn route_on_gt(&self) -> bool {
        self.indicator.route_on_gt()
    }

    pub fn is_odd_digits(&self) -> bool {
        self.global_title.is_odd_digits()
    }

    /// Global Title digits in human readable form
    pub fn digits(&self) -> String {
        self.global_title.digits()
    }

    /// Encode to bytes.
    ///
    /// Fails when edited fields no longer fit a one-octet length.
    pub fn encode(&self) -> Result<BytesMut> {
        let needed = self.checked_wire_len()?;
        let mut buf = BytesMut::with_capacity(needed);
        self.put(&mut buf);
        Ok(buf)
    }

    /// Encode into `dst`, returning the number of octets written
    pub fn encode_to(&self, dst: &mut [u8]) -> Result<usize> {
        let needed = self.checked_wire_len()?;
        if dst.len() < needed {
            return Err(SccpError::BufferTooSmall {
                needed,
                available: dst.len(),
            });
        }

        let mut out = &mut dst[..needed];
        self.put(&mut out);
        Ok(needed)
    }

    /// Encode to an immutable buffer
    pub fn serialize(&self) -> Result<Bytes> {
        Ok(self.encode()?.freeze())
    }

    /// Decode from bytes.
    ///
    /// Octets past the declared length are ignored; the digits are copied out
    /// of `data`.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let total = data.len();
        if total < HEADER_LEN {
            return Err(truncated(HEADER_LEN, total));
        }

        let mut buf = data;
        let length = buf.get_u8();
        if length as usize >= total {
            return Err(truncated(length as usize + 1, total));
        }
        let indicator = AddressIndicator(buf.get_u8());

        let mut point_code = 0;
        if indicator.has_point_code() {
            ensure_remaining(buf, 2, total)?;
            point_code = buf.get_u16() & PointCode::MAX;
        }

        let mut subsystem_number = 0;
        if indicator.has_subsystem_number() {
            ensure_remaining(buf, 1, total)?;
            subsystem_number = buf.get_u8();
        }

        let mut global_title = GlobalTitle::default();
        for &field in layout(indicator.gti()) {
            ensure_remaining(buf, 1, total)?;
            global_title.set_field(field, buf.get_u8());
        }

        let consumed = total - buf.remaining();
        let end = length as usize + 1;
        if end < consumed {
            debug!(
                declared = length,
                consumed,
                indicator = indicator.value(),
                "Party address length shorter than its fixed fields"
            );
            return Err(SccpError::LengthMismatch {
                declared: length,
                consumed,
            });
        }
        global_title.global_title_info = data[consumed..end].to_vec();

        trace!(
            length,
            indicator = indicator.value(),
            digits = end - consumed,
            "Decoded party address"
        );

        Ok(Self {
            length,
            indicator,
            point_code,
            subsystem_number,
            global_title,
        })
    }

    /// Alias of [`PartyAddress::decode`]
    pub fn parse(data: &[u8]) -> Result<Self> {
        Self::decode(data)
    }

    fn derived_length(&self) -> u8 {
        (self.wire_len() - 1).min(u8::MAX as usize) as u8
    }

    fn checked_wire_len(&self) -> Result<usize> {
        let wire_len = self.wire_len();
        if wire_len > MAX_WIRE_LEN {
            debug!(wire_len, "Party address too long to encode");
            return Err(SccpError::ParameterTooLong(wire_len));
        }
        Ok(wire_len)
    }

    /// Callers check the size first, so the derived length is exact
    fn put<B: BufMut>(&self, buf: &mut B) {
        let length = self.derived_length();
        if length != self.length {
            debug!(
                stored = self.length,
                derived = length,
                "Party address length out of sync, writing derived value"
            );
        }

        buf.put_u8(length);
        buf.put_u8(self.indicator.value());

        if self.has_point_code() {
            buf.put_u16(self.point_code);
        }
        if self.has_subsystem_number() {
            buf.put_u8(self.subsystem_number);
        }
        for &field in layout(self.gti()) {
            buf.put_u8(self.global_title.field_octet(field));
        }
        buf.put_slice(&self.global_title.global_title_info);
    }
}

/// Serde shape of [`PartyAddress`]
#[derive(Deserialize)]
struct PartyAddressFields {
    indicator: AddressIndicator,
    #[serde(default)]
    point_code: u16,
    #[serde(default)]
    subsystem_number: u8,
    #[serde(default)]
    global_title: GlobalTitle,
}

impl TryFrom<PartyAddressFields> for PartyAddress {
    type Error = SccpError;

    fn try_from(fields: PartyAddressFields) -> Result<Self> {
        Self::new(
            fields.indicator,
            fields.point_code,
            fields.subsystem_number,
            fields.global_title,
        )
    }
}

fn ensure_remaining(buf: &[u8], n: usize, total: usize) -> Result<()> {
    if buf.len() < n {
        let offset = total - buf.len();
        return Err(truncated(offset + n, total));
    }
    Ok(())
}

fn truncated(needed: usize, available: usize) -> SccpError {
    debug!(needed, available, "Party address truncated");
    SccpError::TruncatedInput { needed, available }
}
