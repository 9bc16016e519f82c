//! Dry air composition
//!
//! Mole fractions from the CIPM-2007 equation for the density of moist air
//! (Picard et al. 2008, Metrologia 45, 149-155).

use gasflux_core::{FloatValue, Gas};

/// Mole fraction of `gas` in dry air.
pub fn dry_mole_fraction(gas: Gas) -> FloatValue {
    match gas {
        Gas::He => 5.24e-6,
        Gas::Ne => 18.18e-6,
        Gas::Ar => 0.009332,
        Gas::Kr => 1.14e-6,
        Gas::Xe => 8.7e-8,
        Gas::N2 => 0.780848,
        Gas::O2 => 0.209390,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_constituents_dominate() {
        let total: FloatValue = Gas::ALL.iter().map(|&g| dry_mole_fraction(g)).sum();
        // CO2 and trace gases make up the remainder
        assert!(total < 1.0);
        assert!(total > 0.999);
    }
}
