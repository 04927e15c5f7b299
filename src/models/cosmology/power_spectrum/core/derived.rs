//! Cosmology-dependent scales used by the Eisenstein & Hu (1998) fitting formulae.
//!
//! Everything here depends only on the background cosmology, never on the
//! wavenumber, so each set of scales is computed once per evaluation.
//! Equation numbers refer to Eisenstein & Hu, ApJ 496, 605 (1998).
//! Wavenumbers and lengths are in Mpc⁻¹ and Mpc.

use tracing::trace;
use uom::si::thermodynamic_temperature::kelvin;

use crate::support::cosmology::Cosmology;

/// Reference CMB temperature of the fitting formulae, in kelvin.
const FIT_TEMPERATURE: f64 = 2.7;

/// Density fractions and physical densities shared by both transfer branches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct DerivedQuantities {
    /// Baryon fraction `f_b = Ω_b0 / Ω_m0`.
    pub(super) f_baryon: f64,
    /// Cold dark matter fraction `f_c = 1 - f_b`.
    pub(super) f_cdm: f64,
    /// Physical matter density `ω_m = Ω_m0 h²`.
    pub(super) omega_m_h2: f64,
    /// Physical baryon density `ω_b = Ω_b0 h²`.
    pub(super) omega_b_h2: f64,
    /// `Θ = Tcmb0 / 2.7 K`.
    pub(super) theta_cmb: f64,
}

impl DerivedQuantities {
    pub(super) fn new(cosmology: &impl Cosmology) -> Self {
        let omega_m0 = cosmology.omega_m0();
        let omega_b0 = cosmology.omega_b0();
        let h = cosmology.little_h();

        let f_baryon = omega_b0 / omega_m0;

        Self {
            f_baryon,
            f_cdm: 1.0 - f_baryon,
            omega_m_h2: omega_m0 * h * h,
            omega_b_h2: omega_b0 * h * h,
            theta_cmb: cosmology.cmb_temperature().get::<kelvin>() / FIT_TEMPERATURE,
        }
    }
}

/// Scales of the full fitting formula, including baryon acoustic oscillations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct AcousticScales {
    pub(super) f_baryon: f64,
    pub(super) f_cdm: f64,
    /// Particle horizon wavenumber at matter-radiation equality (eq. 3).
    pub(super) k_eq: f64,
    /// Sound horizon at the drag epoch (eq. 6).
    pub(super) sound_horizon: f64,
    /// Silk damping wavenumber (eq. 7).
    pub(super) k_silk: f64,
    pub(super) alpha_c: f64,
    pub(super) beta_c: f64,
    pub(super) alpha_b: f64,
    pub(super) beta_b: f64,
    pub(super) beta_node: f64,
}

impl AcousticScales {
    pub(super) fn new(derived: &DerivedQuantities) -> Self {
        let DerivedQuantities {
            f_baryon,
            f_cdm,
            omega_m_h2: om,
            omega_b_h2: ob,
            theta_cmb: theta,
        } = *derived;

        // Matter-radiation equality (eqs. 2 and 3).
        let z_eq = 2.5e4 * om * theta.powi(-4);
        let k_eq = 7.46e-2 * om * theta.powi(-2);

        // Drag epoch and sound horizon (eqs. 4 to 6).
        let b1 = 0.313 * om.powf(-0.419) * (1.0 + 0.607 * om.powf(0.674));
        let b2 = 0.238 * om.powf(0.223);
        let z_drag =
            1291.0 * om.powf(0.251) / (1.0 + 0.659 * om.powf(0.828)) * (1.0 + b1 * ob.powf(b2));

        let r_drag = 31.5 * ob * theta.powi(-4) * (1000.0 / z_drag);
        let r_eq = 31.5 * ob * theta.powi(-4) * (1000.0 / z_eq);

        let sound_horizon = 2.0 / (3.0 * k_eq)
            * (6.0 / r_eq).sqrt()
            * (((1.0 + r_drag).sqrt() + (r_drag + r_eq).sqrt()) / (1.0 + r_eq.sqrt())).ln();

        let k_silk = 1.6 * ob.powf(0.52) * om.powf(0.73) * (1.0 + (10.4 * om).powf(-0.95));

        // CDM suppression and shift (eqs. 11 and 12).
        let a1 = (46.9 * om).powf(0.670) * (1.0 + (32.1 * om).powf(-0.532));
        let a2 = (12.0 * om).powf(0.424) * (1.0 + (45.0 * om).powf(-0.582));
        let alpha_c = a1.powf(-f_baryon) * a2.powf(-f_baryon.powi(3));

        let b1 = 0.944 / (1.0 + (458.0 * om).powf(-0.708));
        let b2 = (0.395 * om).powf(-0.0266);
        let beta_c = 1.0 / (1.0 + b1 * (f_cdm.powf(b2) - 1.0));

        // Baryon suppression, shift and node (eqs. 14, 23 and 24).
        let y = (1.0 + z_eq) / (1.0 + z_drag);
        let alpha_b = 2.07 * k_eq * sound_horizon * (1.0 + r_drag).powf(-0.75) * suppression(y);
        let beta_node = 8.41 * om.powf(0.435);
        let beta_b = 0.5 + f_baryon + (3.0 - 2.0 * f_baryon) * ((17.2 * om).powi(2) + 1.0).sqrt();

        trace!(z_eq, z_drag, sound_horizon, k_silk, "computed acoustic scales");

        Self {
            f_baryon,
            f_cdm,
            k_eq,
            sound_horizon,
            k_silk,
            alpha_c,
            beta_c,
            alpha_b,
            beta_b,
            beta_node,
        }
    }
}

/// Baryon suppression function `G(y)` (eq. 15).
fn suppression(y: f64) -> f64 {
    let root = (1.0 + y).sqrt();
    y * (-6.0 * root + (2.0 + 3.0 * y) * ((root + 1.0) / (root - 1.0)).ln())
}

/// Scales of the zero-baryon shape approximation (eqs. 26 and 31).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ZeroBaryonScales {
    pub(super) omega_m_h2: f64,
    pub(super) theta_cmb: f64,
    /// Baryon suppression of the shape parameter `α_Γ`.
    pub(super) alpha_gamma: f64,
    /// Approximate sound horizon (eq. 26).
    pub(super) sound_horizon: f64,
}

impl ZeroBaryonScales {
    pub(super) fn new(derived: &DerivedQuantities) -> Self {
        let DerivedQuantities {
            f_baryon,
            omega_m_h2: om,
            omega_b_h2: ob,
            theta_cmb,
            ..
        } = *derived;

        let alpha_gamma = 1.0 - 0.328 * (431.0 * om).ln() * f_baryon
            + 0.38 * (22.3 * om).ln() * f_baryon.powi(2);
        let sound_horizon = 44.5 * (9.83 / om).ln() / (1.0 + 10.0 * ob.powf(0.75)).sqrt();

        trace!(alpha_gamma, sound_horizon, "computed zero-baryon scales");

        Self {
            omega_m_h2: om,
            theta_cmb,
            alpha_gamma,
            sound_horizon,
        }
    }
}
