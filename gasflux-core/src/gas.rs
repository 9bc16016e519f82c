//! Supported dissolved gases

use crate::errors::GasFluxError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A dissolved gas with published solubility and diffusivity fits.
///
/// The gas selects which solubility, diffusivity and dry mole fraction
/// formulas the property lookups use.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gas {
    He,
    Ne,
    Ar,
    Kr,
    Xe,
    N2,
    O2,
}

impl Gas {
    /// Every supported gas, lightest noble gas first.
    pub const ALL: [Gas; 7] = [
        Gas::He,
        Gas::Ne,
        Gas::Ar,
        Gas::Kr,
        Gas::Xe,
        Gas::N2,
        Gas::O2,
    ];

    /// Chemical symbol, e.g. `"Ar"` or `"N2"`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Gas::He => "He",
            Gas::Ne => "Ne",
            Gas::Ar => "Ar",
            Gas::Kr => "Kr",
            Gas::Xe => "Xe",
            Gas::N2 => "N2",
            Gas::O2 => "O2",
        }
    }
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Gas {
    type Err = GasFluxError;

    /// Parse a gas symbol, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Gas::ALL
            .iter()
            .find(|gas| gas.symbol().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| GasFluxError::UnsupportedGas(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols() {
        for gas in Gas::ALL {
            assert_eq!(gas.symbol().parse::<Gas>().unwrap(), gas);
        }
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("ar".parse::<Gas>().unwrap(), Gas::Ar);
        assert_eq!(" n2 ".parse::<Gas>().unwrap(), Gas::N2);
        assert_eq!("XE".parse::<Gas>().unwrap(), Gas::Xe);
    }

    #[test]
    fn test_unsupported_gas() {
        let err = "CO2".parse::<Gas>().unwrap_err();
        assert_eq!(err, GasFluxError::UnsupportedGas("CO2".to_string()));
        assert!(err.to_string().contains("CO2"));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Gas::Ne).expect("Serialization failed");
        assert_eq!(json, "\"Ne\"");
        let parsed: Gas = serde_json::from_str(&json).expect("Deserialization failed");
        assert_eq!(parsed, Gas::Ne);
    }
}
