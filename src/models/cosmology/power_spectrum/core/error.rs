use thiserror::Error;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::support::{constraint::ConstraintError, cosmology::Cosmology};

/// Errors that may occur when evaluating a power spectrum.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PowerSpectrumError {
    /// A wavenumber was zero, negative, or `NaN`.
    ///
    /// `index` is the position of the offending value in logical iteration order.
    #[error("invalid wavenumber at index {index}: {value}")]
    Wavenumber {
        index: usize,
        value: f64,
        source: ConstraintError,
    },

    /// The cosmology cannot be used with the requested transfer function.
    #[error(transparent)]
    Cosmology(#[from] CosmologyError),
}

/// A cosmology that the acoustic-oscillation transfer function cannot handle.
///
/// The smooth no-wiggle shape accepts any cosmology, so these errors are
/// only raised when wiggles are requested.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CosmologyError {
    /// Acoustic oscillations need a strictly positive baryon density.
    #[error("baryon density must be positive for acoustic oscillations: omega_b0={omega_b0}")]
    BaryonDensity { omega_b0: f64 },

    /// The drag epoch and sound horizon need a photon background.
    #[error("CMB temperature must be positive for acoustic oscillations: {t_cmb0:?}")]
    CmbTemperature { t_cmb0: ThermodynamicTemperature },
}

impl CosmologyError {
    /// Checks that `cosmology` supports the acoustic-oscillation transfer function.
    ///
    /// # Errors
    ///
    /// Returns a [`CosmologyError`] if `Ω_b0` or `Tcmb0` is not strictly positive.
    pub fn check_acoustic(cosmology: &impl Cosmology) -> Result<(), Self> {
        let omega_b0 = cosmology.omega_b0();
        if omega_b0.is_nan() || omega_b0 <= 0.0 {
            return Err(Self::BaryonDensity { omega_b0 });
        }

        let t_cmb0 = cosmology.cmb_temperature();
        let kelvins = t_cmb0.get::<kelvin>();
        if kelvins.is_nan() || kelvins <= 0.0 {
            return Err(Self::CmbTemperature { t_cmb0 });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        models::cosmology::power_spectrum::core::test_support::{no_baryons, no_photons},
        support::cosmology::FlatLambdaCdm,
    };

    #[test]
    fn planck15_supports_wiggles() {
        assert_eq!(CosmologyError::check_acoustic(&FlatLambdaCdm::planck15()), Ok(()));
    }

    #[test]
    fn rejects_missing_components() {
        assert_eq!(
            CosmologyError::check_acoustic(&no_baryons()),
            Err(CosmologyError::BaryonDensity { omega_b0: 0.0 })
        );
        assert!(matches!(
            CosmologyError::check_acoustic(&no_photons()),
            Err(CosmologyError::CmbTemperature { .. })
        ));
    }

    #[test]
    fn wraps_into_power_spectrum_error() {
        let error: PowerSpectrumError = CosmologyError::BaryonDensity { omega_b0: 0.0 }.into();
        assert_eq!(
            error.to_string(),
            "baryon density must be positive for acoustic oscillations: omega_b0=0"
        );
    }
}
