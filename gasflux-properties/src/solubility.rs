//! Equilibrium solubility of dissolved gases
//!
//! All fits give the concentration in equilibrium with moist air at 1 atm
//! total pressure (100 % relative humidity) as a function of practical
//! salinity and potential temperature.
//!
//! | Gas | Source | Native unit |
//! |-----|--------|-------------|
//! | He | Weiss (1971) | cm^3 STP / kg |
//! | Ne | Hamme & Emerson (2004) | nmol/kg |
//! | Ar | Hamme & Emerson (2004) | µmol/kg |
//! | Kr | Weiss & Kyser (1978) | cm^3 STP / kg |
//! | Xe | Wood & Caputi (1966), refit by R. Hamme | µmol/kg |
//! | N2 | Hamme & Emerson (2004) | µmol/kg |
//! | O2 | Garcia & Gordon (1992), combined fit | µmol/kg |

use gasflux_core::constants::ZERO_CELSIUS_K;
use gasflux_core::{FloatValue, Gas};

/// Coefficients of the Weiss (1971) volumetric solubility form
///
/// $$\ln C = A_1 + A_2 \frac{100}{T} + A_3 \ln\frac{T}{100} + A_4 \frac{T}{100}
///   + S \left(B_1 + B_2 \frac{T}{100} + B_3 \left(\frac{T}{100}\right)^2\right)$$
struct WeissFit {
    a: [FloatValue; 4],
    b: [FloatValue; 3],
    /// Molar volume at STP (L/mol) used to convert cm^3 to µmol.
    molar_volume: FloatValue,
}

const HE_WEISS: WeissFit = WeissFit {
    a: [-167.2178, 216.3442, 139.2032, -22.6202],
    b: [-0.044781, 0.023541, -0.0034266],
    molar_volume: 22.4263,
};

const KR_WEISS: WeissFit = WeissFit {
    a: [-112.6840, 153.5817, 74.4690, -10.0189],
    b: [-0.011213, -0.001844, 0.0011201],
    molar_volume: 22.3511,
};

impl WeissFit {
    fn umol_per_kg(&self, sp: FloatValue, pt: FloatValue) -> FloatValue {
        let t100 = (pt + ZERO_CELSIUS_K) / 100.0;
        let [a1, a2, a3, a4] = self.a;
        let [b1, b2, b3] = self.b;
        let ln_c = a1 + a2 / t100 + a3 * t100.ln() + a4 * t100 + sp * (b1 + b2 * t100 + b3 * t100 * t100);
        // cm^3/kg -> mmol/kg -> µmol/kg
        ln_c.exp() / self.molar_volume * 1e3
    }
}

/// Coefficients of the Hamme & Emerson (2004) form in scaled temperature
///
/// $$\ln C = \sum_i A_i T_s^i + S \sum_j B_j T_s^j + C_0 S^2, \quad
///   T_s = \ln\frac{298.15 - t}{273.15 + t}$$
///
/// Garcia & Gordon (1992) share the same scaled temperature and are
/// expressed with the optional higher-order and $S^2$ terms.
struct ScaledFit {
    a: &'static [FloatValue],
    b: &'static [FloatValue],
    c0: FloatValue,
    /// Multiplier taking the native unit to µmol/kg.
    to_umol: FloatValue,
}

const NE_HAMME: ScaledFit = ScaledFit {
    a: &[2.18156, 1.29108, 2.12504],
    b: &[-5.94737e-3, -5.13896e-3],
    c0: 0.0,
    to_umol: 1e-3,
};

const AR_HAMME: ScaledFit = ScaledFit {
    a: &[2.79150, 3.17609, 4.13116, 4.90379],
    b: &[-6.96233e-3, -7.66670e-3, -1.16888e-2],
    c0: 0.0,
    to_umol: 1.0,
};

const XE_HAMME: ScaledFit = ScaledFit {
    a: &[-7.48588, 5.08763, 4.22078],
    b: &[-8.17791e-3, -1.20172e-2],
    c0: 0.0,
    to_umol: 1.0,
};

const N2_HAMME: ScaledFit = ScaledFit {
    a: &[6.42931, 2.92704, 4.32531, 4.69149],
    b: &[-7.44129e-3, -8.02566e-3, -1.46775e-2],
    c0: 0.0,
    to_umol: 1.0,
};

const O2_GARCIA_GORDON: ScaledFit = ScaledFit {
    a: &[5.80871, 3.20291, 4.17887, 5.10006, -9.86643e-2, 3.80369],
    b: &[-7.01577e-3, -7.70028e-3, -1.13864e-2, -9.51519e-3],
    c0: -2.75915e-7,
    to_umol: 1.0,
};

fn polynomial(coefficients: &[FloatValue], x: FloatValue) -> FloatValue {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

impl ScaledFit {
    fn umol_per_kg(&self, sp: FloatValue, pt: FloatValue) -> FloatValue {
        let ts = ((298.15 - pt) / (ZERO_CELSIUS_K + pt)).ln();
        let ln_c = polynomial(self.a, ts) + sp * polynomial(self.b, ts) + self.c0 * sp * sp;
        ln_c.exp() * self.to_umol
    }
}

/// Equilibrium concentration (µmol/kg) with moist air at 1 atm.
///
/// # Arguments
///
/// * `gas` - Dissolved gas
/// * `sp` - Practical salinity
/// * `pt` - Potential temperature (°C)
pub fn equilibrium_umol_per_kg(gas: Gas, sp: FloatValue, pt: FloatValue) -> FloatValue {
    match gas {
        Gas::He => HE_WEISS.umol_per_kg(sp, pt),
        Gas::Ne => NE_HAMME.umol_per_kg(sp, pt),
        Gas::Ar => AR_HAMME.umol_per_kg(sp, pt),
        Gas::Kr => KR_WEISS.umol_per_kg(sp, pt),
        Gas::Xe => XE_HAMME.umol_per_kg(sp, pt),
        Gas::N2 => N2_HAMME.umol_per_kg(sp, pt),
        Gas::O2 => O2_GARCIA_GORDON.umol_per_kg(sp, pt),
    }
}
