//! SCCP addressing configuration

use crate::errors::{Result, SccpError};
use crate::sccp::{AddressIndicator, GlobalTitle, PartyAddress};
use crate::types::{EncodingScheme, PointCode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Largest GTI the address indicator can carry
const GTI_MAX: u8 = 0x0F;

/// Local party address configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SccpConfig {
    /// Local subsystem number
    pub local_ssn: u8,
    /// Local point code, included in the address when set
    pub point_code: Option<u16>,
    /// Local Global Title digits
    pub global_title: Option<String>,
    /// Global Title Indicator (0-15, normally 1-4)
    pub gti: u8,
    /// Translation type
    pub translation_type: u8,
    /// Numbering plan
    pub numbering_plan: u8,
    /// Nature of address
    pub nature_of_address: u8,
    /// Route on Global Title rather than PC/SSN
    pub route_on_gt: bool,
}

impl Default for SccpConfig {
    fn default() -> Self {
        Self {
            local_ssn: crate::ssn::SMSC,
            point_code: None,
            global_title: None,
            gti: 4,
            translation_type: 0,
            numbering_plan: 1, // E.164
            nature_of_address: 4, // International
            route_on_gt: true,
        }
    }
}

impl SccpConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SccpError::Config(e.to_string()))?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| SccpError::Config(e.to_string()))
    }

    /// Build the local party address.
    ///
    /// Without Global Title digits the GTI is forced to 0. A GTI that does
    /// not fit the four indicator bits is rejected.
    pub fn local_address(&self) -> Result<PartyAddress> {
        if self.gti > GTI_MAX {
            return Err(SccpError::Config(format!(
                "gti {} exceeds {}",
                self.gti, GTI_MAX
            )));
        }

        let (gti, global_title) = match &self.global_title {
            Some(digits) => {
                let mut gt = GlobalTitle::e164(digits)?;
                gt.translation_type = self.translation_type;
                gt.numbering_plan = self.numbering_plan;
                gt.nature_of_address = self.nature_of_address;
                gt.encoding_scheme = EncodingScheme::for_digit_count(digits.len()) as u8;
                (self.gti, gt)
            }
            None => (0, GlobalTitle::default()),
        };

        let point_code = self.point_code.map(PointCode);
        let indicator =
            AddressIndicator::new(point_code.is_some(), true, gti, self.route_on_gt);

        debug!(
            ssn = self.local_ssn,
            gti,
            point_code = ?point_code,
            "Building local party address"
        );

        PartyAddress::new(
            indicator,
            point_code.map(|pc| pc.value()).unwrap_or(0),
            self.local_ssn,
            global_title,
        )
    }
}
