//! Linear matter power spectrum models.
//!
//! [`EisensteinHu`] is the [`twine_core::Model`] implementation. The
//! computation lives in the internal `core` module, whose entry points
//! ([`eisenstein_hu`], [`transfer_with_wiggles`], [`transfer_no_wiggles`])
//! are re-exported here for direct use.

pub(crate) mod core;

pub use self::core::{
    CosmologyError, DEFAULT_PIVOT_WAVENUMBER, PowerSpectrumError, PrimordialSpectrum,
    PrimordialSpectrumError, Transfer, Wavenumbers, eisenstein_hu, transfer_no_wiggles,
    transfer_with_wiggles,
};

use tracing::trace;
use twine_core::Model;

use crate::support::cosmology::{Cosmology, GrowthError, growth_factor_carroll};

/// Eisenstein & Hu (1998) linear matter power spectrum as a Twine model.
///
/// The model maps a list of wavenumbers, in Mpc⁻¹, to the power spectrum at
/// each of them, in `(Mpc/h)³`. The spectrum is evaluated at redshift zero
/// unless moved with [`at_redshift`](Self::at_redshift).
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_cosmology::{
///     models::cosmology::power_spectrum::{EisensteinHu, PrimordialSpectrum, Transfer},
///     support::cosmology::FlatLambdaCdm,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let primordial = PrimordialSpectrum::new(2.1982e-9, 0.969453)?;
/// let today = EisensteinHu::new(FlatLambdaCdm::planck15(), primordial, Transfer::NoWiggles);
/// let earlier = today.clone().at_redshift(1.0)?;
///
/// let k = vec![1e-3, 1e-2, 1e-1];
/// let pk_today = today.call(&k)?;
/// let pk_earlier = earlier.call(&k)?;
///
/// assert_eq!(pk_today.len(), 3);
/// assert!(pk_earlier.iter().zip(&pk_today).all(|(z1, z0)| z1 < z0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EisensteinHu<C> {
    cosmology: C,
    primordial: PrimordialSpectrum,
    transfer: Transfer,
    redshift: f64,
    growth_squared: f64,
}

impl<C: Cosmology> EisensteinHu<C> {
    /// Creates a model of the present-day spectrum.
    #[must_use]
    pub fn new(cosmology: C, primordial: PrimordialSpectrum, transfer: Transfer) -> Self {
        Self {
            cosmology,
            primordial,
            transfer,
            redshift: 0.0,
            growth_squared: 1.0,
        }
    }

    /// Moves the model to `redshift`, scaling the spectrum by `(D(z) / D(0))²`.
    ///
    /// The growth factor uses the Carroll, Press & Turner (1992) approximation.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::Redshift`] if `redshift` is negative or `NaN`.
    pub fn at_redshift(mut self, redshift: f64) -> Result<Self, GrowthError> {
        let growth = growth_factor_carroll(redshift, &self.cosmology)?;
        trace!(redshift, growth, "scaled spectrum by linear growth");

        self.redshift = redshift;
        self.growth_squared = growth * growth;
        Ok(self)
    }

    /// Redshift at which the spectrum is evaluated.
    #[must_use]
    pub fn redshift(&self) -> f64 {
        self.redshift
    }

    #[must_use]
    pub fn cosmology(&self) -> &C {
        &self.cosmology
    }

    #[must_use]
    pub fn primordial(&self) -> &PrimordialSpectrum {
        &self.primordial
    }

    #[must_use]
    pub fn transfer(&self) -> Transfer {
        self.transfer
    }

    /// Evaluates the spectrum for any supported shape of wavenumbers.
    ///
    /// # Errors
    ///
    /// See [`eisenstein_hu`].
    pub fn evaluate<W>(&self, wavenumbers: &W) -> Result<W::Output, PowerSpectrumError>
    where
        W: Wavenumbers + ?Sized,
    {
        self::core::scaled_power(
            wavenumbers,
            &self.primordial,
            &self.cosmology,
            self.transfer,
            self.growth_squared,
        )
    }
}

impl<C: Cosmology> Model for EisensteinHu<C> {
    type Input = Vec<f64>;
    type Output = Vec<f64>;
    type Error = PowerSpectrumError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.evaluate(input)
    }
}
