//! Barcode symbologies a [`crate::BarcodeCard`] can render.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use locker_core::{CardError, CardResult};

use crate::{code39, ean};

/// Symbology named by a card's type tag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbology {
    #[serde(rename = "EAN_13")]
    Ean13,
    #[serde(rename = "EAN_8")]
    Ean8,
    #[serde(rename = "UPC_A")]
    UpcA,
    #[serde(rename = "CODE_39")]
    Code39,
}

impl Symbology {
    pub const ALL: [Symbology; 4] = [Self::Ean13, Self::Ean8, Self::UpcA, Self::Code39];

    /// Canonical type tag, e.g. `EAN_13`.
    pub fn tag(self) -> &'static str {
        match self {
            Symbology::Ean13 => "EAN_13",
            Symbology::Ean8 => "EAN_8",
            Symbology::UpcA => "UPC_A",
            Symbology::Code39 => "CODE_39",
        }
    }

    /// Canonical payload for `code`: check digit completed for the EAN family,
    /// upper-cased for Code 39.
    pub fn normalize(self, code: &str) -> CardResult<String> {
        match self {
            Symbology::Ean13 => Ok(digits_to_string(&ean::complete(code, 12)?)),
            Symbology::Ean8 => Ok(digits_to_string(&ean::complete(code, 7)?)),
            Symbology::UpcA => Ok(digits_to_string(&ean::complete(code, 11)?)),
            Symbology::Code39 => code39::normalize(code),
        }
    }

    pub fn accepts(self, code: &str) -> bool {
        self.normalize(code).is_ok()
    }

    /// Bar/space modules for `code`, quiet zones excluded (`true` = bar).
    pub fn modules(self, code: &str) -> CardResult<Vec<bool>> {
        match self {
            Symbology::Ean13 => Ok(ean::ean13_modules(&ean::complete(code, 12)?)),
            Symbology::Ean8 => Ok(ean::ean8_modules(&ean::complete(code, 7)?)),
            Symbology::UpcA => {
                let mut digits = vec![0];
                digits.extend(ean::complete(code, 11)?);
                Ok(ean::ean13_modules(&digits))
            }
            Symbology::Code39 => Ok(code39::modules(&code39::normalize(code)?)),
        }
    }
}

fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

impl core::fmt::Display for Symbology {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Symbology {
    type Err = CardError;

    /// Case-insensitive; `-`, `_` and no separator are all accepted
    /// (`ean-13`, `EAN_13`, `ean13`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_uppercase())
            .collect();

        match key.as_str() {
            "EAN13" => Ok(Symbology::Ean13),
            "EAN8" => Ok(Symbology::Ean8),
            "UPCA" => Ok(Symbology::UpcA),
            "CODE39" => Ok(Symbology::Code39),
            _ => Err(CardError::unsupported(s)),
        }
    }
}
