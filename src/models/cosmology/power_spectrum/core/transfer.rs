use std::f64::consts::E;

use crate::support::cosmology::Cosmology;

use super::derived::{AcousticScales, DerivedQuantities, ZeroBaryonScales};

/// Selects which Eisenstein & Hu transfer function to evaluate.
///
/// A `bool` converts into a [`Transfer`], with `true` meaning wiggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Transfer {
    /// The full fitting formula, including baryon acoustic oscillations.
    #[default]
    WithWiggles,

    /// The smooth zero-baryon shape, without oscillations or Silk damping.
    NoWiggles,
}

impl Transfer {
    /// Returns `true` if this transfer function includes acoustic oscillations.
    #[must_use]
    pub fn has_wiggles(self) -> bool {
        matches!(self, Self::WithWiggles)
    }
}

impl From<bool> for Transfer {
    fn from(wiggle: bool) -> Self {
        if wiggle {
            Self::WithWiggles
        } else {
            Self::NoWiggles
        }
    }
}

/// A transfer function with its cosmology-dependent scales resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum TransferFunction {
    WithWiggles(AcousticScales),
    NoWiggles(ZeroBaryonScales),
}

impl TransferFunction {
    pub(super) fn new(transfer: Transfer, cosmology: &impl Cosmology) -> Self {
        let derived = DerivedQuantities::new(cosmology);
        match transfer {
            Transfer::WithWiggles => Self::WithWiggles(AcousticScales::new(&derived)),
            Transfer::NoWiggles => Self::NoWiggles(ZeroBaryonScales::new(&derived)),
        }
    }

    /// Evaluates `T(k)` at a wavenumber in Mpc⁻¹.
    pub(super) fn evaluate(&self, k: f64) -> f64 {
        match self {
            Self::WithWiggles(scales) => with_wiggles(k, scales),
            Self::NoWiggles(scales) => no_wiggles(k, scales),
        }
    }
}

/// Full transfer function `T = f_b T_b + f_c T_c` (eqs. 16 to 24).
fn with_wiggles(k: f64, scales: &AcousticScales) -> f64 {
    let q = k / (13.41 * scales.k_eq);
    let ks = k * scales.sound_horizon;

    // Pressureless shape `T̃0(k, α, β)` (eqs. 19 and 20).
    let shape = |alpha: f64, beta: f64| {
        let l = (E + 1.8 * beta * q).ln();
        let c = 14.2 / alpha + 386.0 / (1.0 + 69.9 * q.powf(1.08));
        l / (l + c * q * q)
    };

    let f = 1.0 / (1.0 + (ks / 5.4).powi(4));
    let t_cdm = f * shape(1.0, scales.beta_c) + (1.0 - f) * shape(scales.alpha_c, scales.beta_c);

    let s_tilde = scales.sound_horizon / (1.0 + (scales.beta_node / ks).powi(3)).cbrt();
    let t_baryon = (shape(1.0, 1.0) / (1.0 + (ks / 5.2).powi(2))
        + scales.alpha_b / (1.0 + (scales.beta_b / ks).powi(3))
            * (-(k / scales.k_silk).powf(1.4)).exp())
        * sinc(k * s_tilde);

    scales.f_baryon * t_baryon + scales.f_cdm * t_cdm
}

/// Zero-baryon transfer function with an effective shape `Γ_eff(k)` (eqs. 28 to 31).
fn no_wiggles(k: f64, scales: &ZeroBaryonScales) -> f64 {
    let alpha = scales.alpha_gamma;
    let gamma_eff = scales.omega_m_h2
        * (alpha + (1.0 - alpha) / (1.0 + (0.43 * k * scales.sound_horizon).powi(4)));

    let q = k * scales.theta_cmb.powi(2) / gamma_eff;
    let l = (2.0 * E + 1.8 * q).ln();
    let c = 14.2 + 731.0 / (1.0 + 62.5 * q);

    l / (l + c * q * q)
}

/// Unnormalized `sin(x) / x`, continuous at zero.
fn sinc(x: f64) -> f64 {
    if x == 0.0 { 1.0 } else { x.sin() / x }
}
