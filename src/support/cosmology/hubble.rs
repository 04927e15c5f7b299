use std::ops::Deref;

use uom::si::{f64::Frequency, frequency::hertz};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// Meters in one megaparsec (IAU 2015 parsec).
const METERS_PER_MEGAPARSEC: f64 = 3.085_677_581_491_367e22;

/// The present-day Hubble constant `H0`, in km/s/Mpc.
///
/// Cosmology formulas almost always use either the dimensionless
/// [`little_h`](Self::little_h) or a rate, so the value is stored in the
/// conventional km/s/Mpc and converted on demand.
///
/// The Hubble constant must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HubbleConstant(Constrained<f64, StrictlyPositive>);

impl HubbleConstant {
    /// Create a [`HubbleConstant`] from a value in km/s/Mpc.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new(km_per_s_per_mpc: f64) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(km_per_s_per_mpc)?))
    }

    /// Create a [`HubbleConstant`] from the dimensionless `h`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `h` is not strictly positive.
    pub fn from_little_h(h: f64) -> ConstraintResult<Self> {
        Self::new(100.0 * h)
    }

    /// The dimensionless Hubble parameter `h = H0 / (100 km/s/Mpc)`.
    #[must_use]
    pub fn little_h(&self) -> f64 {
        **self / 100.0
    }

    /// The Hubble constant as an expansion rate.
    #[must_use]
    pub fn to_frequency(&self) -> Frequency {
        Frequency::new::<hertz>(**self * 1e3 / METERS_PER_MEGAPARSEC)
    }
}

impl Deref for HubbleConstant {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
