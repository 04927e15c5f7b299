use thiserror::Error;

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

/// Pivot scale used when none is given, in Mpc⁻¹.
pub const DEFAULT_PIVOT_WAVENUMBER: f64 = 0.02;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PrimordialSpectrumError {
    #[error("invalid scalar amplitude: {amplitude}")]
    Amplitude {
        amplitude: f64,
        source: ConstraintError,
    },
    #[error("spectral index must be finite: {spectral_index}")]
    SpectralIndex { spectral_index: f64 },
    #[error("invalid pivot wavenumber: {pivot}")]
    Pivot { pivot: f64, source: ConstraintError },
}

/// Power-law spectrum of primordial curvature perturbations.
///
/// `Δ²_R(k) = A_s (k / k_pivot)^(n_s - 1)`, where the amplitude `A_s` is
/// defined at the pivot wavenumber `k_pivot`.
///
/// # Example
///
/// ```
/// use twine_cosmology::models::cosmology::power_spectrum::PrimordialSpectrum;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let primordial = PrimordialSpectrum::new(2.1e-9, 0.965)?.with_pivot(0.05)?;
///
/// assert_eq!(primordial.curvature_power(0.05), 2.1e-9);
/// assert!(primordial.curvature_power(0.5) < 2.1e-9);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimordialSpectrum {
    amplitude: Constrained<f64, StrictlyPositive>,
    spectral_index: f64,
    pivot: Constrained<f64, StrictlyPositive>,
}

impl PrimordialSpectrum {
    /// Creates a power law with amplitude `A_s` and spectral index `n_s`,
    /// pivoting at [`DEFAULT_PIVOT_WAVENUMBER`].
    ///
    /// # Errors
    ///
    /// Returns [`PrimordialSpectrumError`] if the amplitude is not strictly
    /// positive or the spectral index is not finite.
    pub fn new(amplitude: f64, spectral_index: f64) -> Result<Self, PrimordialSpectrumError> {
        let amplitude = StrictlyPositive::new(amplitude)
            .map_err(|source| PrimordialSpectrumError::Amplitude { amplitude, source })?;

        if !spectral_index.is_finite() {
            return Err(PrimordialSpectrumError::SpectralIndex { spectral_index });
        }

        Ok(Self {
            amplitude,
            spectral_index,
            pivot: StrictlyPositive::new(DEFAULT_PIVOT_WAVENUMBER)
                .map_err(|source| PrimordialSpectrumError::Pivot {
                    pivot: DEFAULT_PIVOT_WAVENUMBER,
                    source,
                })?,
        })
    }

    /// Sets the pivot wavenumber, in Mpc⁻¹, at which the amplitude is defined.
    ///
    /// # Errors
    ///
    /// Returns [`PrimordialSpectrumError::Pivot`] if `pivot` is not strictly positive.
    pub fn with_pivot(mut self, pivot: f64) -> Result<Self, PrimordialSpectrumError> {
        self.pivot = StrictlyPositive::new(pivot)
            .map_err(|source| PrimordialSpectrumError::Pivot { pivot, source })?;
        Ok(self)
    }

    /// Scalar amplitude `A_s`.
    #[must_use]
    pub fn amplitude(&self) -> f64 {
        self.amplitude.into_inner()
    }

    /// Spectral index `n_s`.
    #[must_use]
    pub fn spectral_index(&self) -> f64 {
        self.spectral_index
    }

    /// Pivot wavenumber `k_pivot`.
    #[must_use]
    pub fn pivot(&self) -> f64 {
        self.pivot.into_inner()
    }

    /// Dimensionless curvature power `Δ²_R(k)`.
    #[must_use]
    pub fn curvature_power(&self, k: f64) -> f64 {
        self.amplitude() * (k / self.pivot()).powf(self.spectral_index - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn scale_invariant_spectrum_is_flat() -> Result<(), PrimordialSpectrumError> {
        let primordial = PrimordialSpectrum::new(2e-9, 1.0)?;

        for k in [1e-4, 0.02, 3.0] {
            assert_relative_eq!(primordial.curvature_power(k), 2e-9);
        }
        Ok(())
    }

    #[test]
    fn red_tilt() -> Result<(), PrimordialSpectrumError> {
        let primordial = PrimordialSpectrum::new(2.1982e-9, 0.969_453)?;

        assert_relative_eq!(primordial.pivot(), DEFAULT_PIVOT_WAVENUMBER);
        assert_relative_eq!(primordial.curvature_power(0.02), 2.1982e-9);
        assert_relative_eq!(
            primordial.curvature_power(0.2),
            2.1982e-9 * 10_f64.powf(-0.030_547),
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn rejects_invalid_parameters() -> Result<(), PrimordialSpectrumError> {
        assert!(matches!(
            PrimordialSpectrum::new(0.0, 0.96),
            Err(PrimordialSpectrumError::Amplitude { .. })
        ));
        assert_eq!(
            PrimordialSpectrum::new(2e-9, f64::INFINITY),
            Err(PrimordialSpectrumError::SpectralIndex {
                spectral_index: f64::INFINITY
            })
        );

        let primordial = PrimordialSpectrum::new(2e-9, 0.96)?;
        assert!(matches!(
            primordial.with_pivot(-0.05),
            Err(PrimordialSpectrumError::Pivot {
                source: ConstraintError::Negative,
                ..
            })
        ));
        Ok(())
    }
}
