//! # Brivas SCCP Party Address Codec
//!
//! Encoding and decoding of the SCCP Called/Calling Party Address parameter
//! (ITU-T Q.713 section 3.4), including the GTI-dependent Global Title header.
//!
//! Stateless and synchronous: every call works on its own buffer.
//!
//! ## Example
//! ```rust
//! use brivas_sccp::{AddressIndicator, GlobalTitle, PartyAddress};
//!
//! let gt = GlobalTitle::e164("2348012345678")?;
//! let called = PartyAddress::from_gt(4, gt, Some(brivas_sccp::ssn::HLR))?;
//!
//! let wire = called.encode()?;
//! assert_eq!(wire[0] as usize, wire.len() - 1);
//!
//! let decoded = PartyAddress::decode(&wire)?;
//! assert_eq!(decoded.digits(), "2348012345678");
//! assert_eq!(decoded.indicator, AddressIndicator::new(false, true, 4, true));
//! # Ok::<(), brivas_sccp::SccpError>(())
//! ```

pub mod bcd;
pub mod config;
pub mod errors;
pub mod sccp;
pub mod types;


// Re-exports
pub use config::SccpConfig;
pub use errors::{Result, SccpError};
pub use sccp::{AddressIndicator, GlobalTitle, GtField, ParameterName, PartyAddress};
pub use types::*;

/// Codec version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem Numbers
pub mod ssn {
    pub const HLR: u8 = 6;
    pub const VLR: u8 = 7;
    pub const MSC: u8 = 8;
    pub const SMSC: u8 = 8;
    pub const GSMSCF: u8 = 147;
    pub const USSD: u8 = 147;
}
