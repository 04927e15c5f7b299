use thiserror::Error;
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{
    Constrained, Constraint, ConstraintError, NonNegative, StrictlyPositive, UnitInterval,
};

use super::{Cosmology, HubbleConstant};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CosmologyParametersError {
    #[error("invalid Hubble constant: {h0} km/s/Mpc")]
    HubbleConstant { h0: f64, source: ConstraintError },
    #[error("invalid matter density: omega_m0={omega_m0}")]
    MatterDensity {
        omega_m0: f64,
        source: ConstraintError,
    },
    #[error("invalid baryon density: omega_b0={omega_b0}")]
    BaryonDensity {
        omega_b0: f64,
        source: ConstraintError,
    },
    #[error("baryon density exceeds matter density: omega_b0={omega_b0}, omega_m0={omega_m0}")]
    BaryonFraction { omega_b0: f64, omega_m0: f64 },
    #[error("invalid CMB temperature: {t_cmb0:?}")]
    CmbTemperature {
        t_cmb0: ThermodynamicTemperature,
        source: ConstraintError,
    },
}

/// A spatially flat universe with cold dark matter, baryons and a cosmological constant.
///
/// The dark energy density is fixed by flatness, `Ω_Λ0 = 1 - Ω_m0`.
/// A freshly constructed model has no baryons and no photon background; add
/// them with [`with_baryons`](Self::with_baryons) and
/// [`with_cmb_temperature`](Self::with_cmb_temperature).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatLambdaCdm {
    hubble_constant: HubbleConstant,
    omega_m0: Constrained<f64, StrictlyPositive>,
    omega_b0: Constrained<f64, NonNegative>,
    t_cmb0: ThermodynamicTemperature,
}

impl FlatLambdaCdm {
    /// Creates a flat ΛCDM cosmology from `H0` (km/s/Mpc) and `Ω_m0`.
    ///
    /// # Errors
    ///
    /// Returns [`CosmologyParametersError`] if `H0` or `Ω_m0` is not strictly positive.
    pub fn new(h0: f64, omega_m0: f64) -> Result<Self, CosmologyParametersError> {
        let hubble_constant = HubbleConstant::new(h0)
            .map_err(|source| CosmologyParametersError::HubbleConstant { h0, source })?;

        let omega_m0 = StrictlyPositive::new(omega_m0)
            .map_err(|source| CosmologyParametersError::MatterDensity { omega_m0, source })?;

        Ok(Self {
            hubble_constant,
            omega_m0,
            omega_b0: NonNegative::zero(),
            t_cmb0: ThermodynamicTemperature::new::<kelvin>(0.0),
        })
    }

    /// Sets the baryon density parameter `Ω_b0`.
    ///
    /// # Errors
    ///
    /// Returns [`CosmologyParametersError`] if `Ω_b0` is negative or exceeds `Ω_m0`.
    pub fn with_baryons(mut self, omega_b0: f64) -> Result<Self, CosmologyParametersError> {
        let baryons = NonNegative::new(omega_b0)
            .map_err(|source| CosmologyParametersError::BaryonDensity { omega_b0, source })?;

        let omega_m0 = self.omega_m0();
        UnitInterval::check(&Ratio::new::<ratio>(omega_b0 / omega_m0))
            .map_err(|_| CosmologyParametersError::BaryonFraction { omega_b0, omega_m0 })?;

        self.omega_b0 = baryons;
        Ok(self)
    }

    /// Sets the present-day CMB temperature.
    ///
    /// # Errors
    ///
    /// Returns [`CosmologyParametersError`] if the temperature is negative or `NaN`.
    pub fn with_cmb_temperature(
        mut self,
        t_cmb0: ThermodynamicTemperature,
    ) -> Result<Self, CosmologyParametersError> {
        NonNegative::check(&t_cmb0.get::<kelvin>())
            .map_err(|source| CosmologyParametersError::CmbTemperature { t_cmb0, source })?;

        self.t_cmb0 = t_cmb0;
        Ok(self)
    }

    /// Planck 2015 results (paper XIII, TT,TE,EE+lowP+lensing+ext).
    #[must_use]
    pub fn planck15() -> Self {
        Self::published(67.74, 0.3075, 0.0486, 2.7255)
    }

    /// Planck 2018 results (paper VI, TT,TE,EE+lowE+lensing+BAO).
    #[must_use]
    pub fn planck18() -> Self {
        Self::published(67.66, 0.30966, 0.04897, 2.7255)
    }

    fn published(h0: f64, omega_m0: f64, omega_b0: f64, t_cmb0: f64) -> Self {
        Self::new(h0, omega_m0)
            .and_then(|cosmology| cosmology.with_baryons(omega_b0))
            .and_then(|cosmology| {
                cosmology.with_cmb_temperature(ThermodynamicTemperature::new::<kelvin>(t_cmb0))
            })
            .expect("published parameter sets should always be valid")
    }
}

impl Cosmology for FlatLambdaCdm {
    fn omega_m0(&self) -> f64 {
        self.omega_m0.into_inner()
    }

    fn omega_b0(&self) -> f64 {
        self.omega_b0.into_inner()
    }

    fn hubble_constant(&self) -> HubbleConstant {
        self.hubble_constant
    }

    fn cmb_temperature(&self) -> ThermodynamicTemperature {
        self.t_cmb0
    }
}
