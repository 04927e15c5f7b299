//! Eisenstein & Hu (1998) linear matter power spectrum.
//!
//! The spectrum is the product of a power-law primordial spectrum and the
//! squared Eisenstein & Hu transfer function, normalized by the Poisson
//! equation in a matter-dominated universe:
//!
//! ```text
//! P(k) = 2π² (4/25) (c / H0)⁴ Δ²_R(k) k T(k)² / Ω_m0²
//! ```
//!
//! Wavenumbers are in Mpc⁻¹. The spectrum is reported in `(Mpc/h)³`.

mod derived;
mod error;
mod primordial;
mod transfer;
mod wavenumbers;

#[cfg(test)]
mod test_support;

pub use error::{CosmologyError, PowerSpectrumError};
pub use primordial::{DEFAULT_PIVOT_WAVENUMBER, PrimordialSpectrum, PrimordialSpectrumError};
pub use transfer::Transfer;
pub use wavenumbers::Wavenumbers;

use std::f64::consts::PI;

use tracing::debug;

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    cosmology::Cosmology,
};

use transfer::TransferFunction;

/// Hubble distance `c / H0` in `Mpc/h`, with `c = 2.998e5 km/s`.
const HUBBLE_DISTANCE: f64 = 2998.0;

/// Evaluates the linear matter power spectrum at redshift zero.
///
/// The output has the same shape as `wavenumbers` (see [`Wavenumbers`]).
///
/// # Errors
///
/// Returns [`PowerSpectrumError::Wavenumber`] for the first wavenumber that is
/// not strictly positive, and [`PowerSpectrumError::Cosmology`] if wiggles are
/// requested for a cosmology without baryons or without a CMB temperature.
///
/// # Example
///
/// ```
/// use twine_cosmology::{
///     models::cosmology::power_spectrum::{PrimordialSpectrum, Transfer, eisenstein_hu},
///     support::cosmology::FlatLambdaCdm,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let primordial = PrimordialSpectrum::new(2.1982e-9, 0.969453)?;
/// let cosmology = FlatLambdaCdm::planck15();
///
/// let k = [1e-3_f64, 1e-2, 1e-1];
/// let pk = eisenstein_hu(&k, &primordial, &cosmology, Transfer::WithWiggles)?;
/// assert!(pk[1] > pk[0] && pk[1] > pk[2]);
///
/// let smooth = eisenstein_hu(&0.1_f64, &primordial, &cosmology, Transfer::NoWiggles)?;
/// assert!(smooth > 0.0);
/// # Ok(())
/// # }
/// ```
pub fn eisenstein_hu<W>(
    wavenumbers: &W,
    primordial: &PrimordialSpectrum,
    cosmology: &impl Cosmology,
    transfer: Transfer,
) -> Result<W::Output, PowerSpectrumError>
where
    W: Wavenumbers + ?Sized,
{
    scaled_power(wavenumbers, primordial, cosmology, transfer, 1.0)
}

/// Evaluates the power spectrum multiplied by a constant `scale`.
///
/// Used to apply the squared linear growth factor at nonzero redshift.
pub(super) fn scaled_power<W>(
    wavenumbers: &W,
    primordial: &PrimordialSpectrum,
    cosmology: &impl Cosmology,
    transfer: Transfer,
    scale: f64,
) -> Result<W::Output, PowerSpectrumError>
where
    W: Wavenumbers + ?Sized,
{
    let function = prepare(wavenumbers, cosmology, transfer)?;
    let amplitude = scale * normalization(cosmology);

    Ok(wavenumbers.map_values(|k| {
        let t = function.evaluate(k);
        amplitude * primordial.curvature_power(k) * k * t * t
    }))
}

/// Evaluates the transfer function with baryon acoustic oscillations.
///
/// # Errors
///
/// Fails under the same conditions as [`eisenstein_hu`] with [`Transfer::WithWiggles`].
pub fn transfer_with_wiggles<W>(
    wavenumbers: &W,
    cosmology: &impl Cosmology,
) -> Result<W::Output, PowerSpectrumError>
where
    W: Wavenumbers + ?Sized,
{
    let function = prepare(wavenumbers, cosmology, Transfer::WithWiggles)?;
    Ok(wavenumbers.map_values(|k| function.evaluate(k)))
}

/// Evaluates the smooth zero-baryon transfer function.
///
/// # Errors
///
/// Returns [`PowerSpectrumError::Wavenumber`] if any wavenumber is not strictly positive.
pub fn transfer_no_wiggles<W>(
    wavenumbers: &W,
    cosmology: &impl Cosmology,
) -> Result<W::Output, PowerSpectrumError>
where
    W: Wavenumbers + ?Sized,
{
    let function = prepare(wavenumbers, cosmology, Transfer::NoWiggles)?;
    Ok(wavenumbers.map_values(|k| function.evaluate(k)))
}

/// Validates the inputs and resolves the cosmology-dependent scales.
fn prepare<W>(
    wavenumbers: &W,
    cosmology: &impl Cosmology,
    transfer: Transfer,
) -> Result<TransferFunction, PowerSpectrumError>
where
    W: Wavenumbers + ?Sized,
{
    let count = check_wavenumbers(wavenumbers)?;

    if transfer.has_wiggles() {
        CosmologyError::check_acoustic(cosmology)?;
    }

    debug!(count, ?transfer, "evaluating Eisenstein & Hu spectrum");

    Ok(TransferFunction::new(transfer, cosmology))
}

/// Checks every wavenumber and returns how many there are.
fn check_wavenumbers<W>(wavenumbers: &W) -> Result<usize, PowerSpectrumError>
where
    W: Wavenumbers + ?Sized,
{
    let mut count = 0;
    for (index, value) in wavenumbers.values().enumerate() {
        StrictlyPositive::check(&value)
            .map_err(|source| PowerSpectrumError::Wavenumber { index, value, source })?;
        count += 1;
    }
    Ok(count)
}

/// Converts `Δ²_R(k) k T(k)²` into a power spectrum in `(Mpc/h)³`.
fn normalization(cosmology: &impl Cosmology) -> f64 {
    let omega_m0 = cosmology.omega_m0();
    2.0 * PI * PI * (4.0 / 25.0) * HUBBLE_DISTANCE.powi(4)
        / (omega_m0 * omega_m0 * cosmology.little_h())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::{Array2, array};

    use crate::support::{constraint::ConstraintError, cosmology::FlatLambdaCdm};

    use super::test_support::{
        REFERENCE_NO_WIGGLES, REFERENCE_WAVENUMBERS, REFERENCE_WITH_WIGGLES, no_baryons,
        no_photons, reference_primordial,
    };

    fn planck15(
        wavenumbers: &(impl Wavenumbers<Output = Vec<f64>> + ?Sized),
        transfer: Transfer,
    ) -> Result<Vec<f64>, PowerSpectrumError> {
        eisenstein_hu(
            wavenumbers,
            &reference_primordial(),
            &FlatLambdaCdm::planck15(),
            transfer,
        )
    }

    #[test]
    fn matches_planck15_reference() -> Result<(), PowerSpectrumError> {
        let references = [
            (Transfer::WithWiggles, REFERENCE_WITH_WIGGLES),
            (Transfer::NoWiggles, REFERENCE_NO_WIGGLES),
        ];

        for (transfer, reference) in references {
            let pk = planck15(&REFERENCE_WAVENUMBERS[..], transfer)?;
            for (actual, expected) in pk.iter().zip(reference) {
                assert_relative_eq!(*actual, expected, max_relative = 1e-6);
            }
        }
        Ok(())
    }

    #[test]
    fn output_shape_follows_input() -> Result<(), PowerSpectrumError> {
        let primordial = reference_primordial();
        let cosmology = FlatLambdaCdm::planck15();

        for transfer in [Transfer::WithWiggles, Transfer::NoWiggles] {
            let scalar: f64 = eisenstein_hu(&1.0_f64, &primordial, &cosmology, transfer)?;
            assert!(scalar > 0.0);

            let fixed: [f64; 3] =
                eisenstein_hu(&[0.1_f64, 0.2, 0.3], &primordial, &cosmology, transfer)?;
            assert_eq!(fixed.len(), 3);

            let vector = eisenstein_hu(&vec![0.5_f64; 10], &primordial, &cosmology, transfer)?;
            assert_eq!(vector.len(), 10);

            let grid: Array2<f64> = array![[1e-3, 1e-2], [1e-1, 1.0], [10.0, 0.05]];
            let pk = eisenstein_hu(&grid, &primordial, &cosmology, transfer)?;
            assert_eq!(pk.shape(), &[3, 2]);
            assert_relative_eq!(pk[[1, 1]], scalar);
        }
        Ok(())
    }

    #[test]
    fn spectrum_is_positive() -> Result<(), PowerSpectrumError> {
        let wavenumbers: Vec<f64> = (0..=60)
            .map(|i| 10_f64.powf(-4.0 + 0.1 * f64::from(i)))
            .collect();

        for transfer in [Transfer::WithWiggles, Transfer::NoWiggles] {
            let pk = planck15(&wavenumbers, transfer)?;
            assert!(pk.iter().all(|p| p.is_finite() && *p > 0.0));
        }
        Ok(())
    }

    #[test]
    fn rejects_non_positive_wavenumbers() {
        let primordial = reference_primordial();
        let cosmology = FlatLambdaCdm::planck15();

        for transfer in [Transfer::WithWiggles, Transfer::NoWiggles] {
            assert_eq!(
                eisenstein_hu(&0.0_f64, &primordial, &cosmology, transfer),
                Err(PowerSpectrumError::Wavenumber {
                    index: 0,
                    value: 0.0,
                    source: ConstraintError::Zero,
                })
            );
            assert_eq!(
                eisenstein_hu(&[0.0_f64, 1.0, -2.0, 3.0], &primordial, &cosmology, transfer),
                Err(PowerSpectrumError::Wavenumber {
                    index: 0,
                    value: 0.0,
                    source: ConstraintError::Zero,
                })
            );
            assert_eq!(
                eisenstein_hu(&[1.0_f64, -2.0, 3.0], &primordial, &cosmology, transfer),
                Err(PowerSpectrumError::Wavenumber {
                    index: 1,
                    value: -2.0,
                    source: ConstraintError::Negative,
                })
            );
            assert!(matches!(
                eisenstein_hu(&[1.0_f64, f64::NAN], &primordial, &cosmology, transfer),
                Err(PowerSpectrumError::Wavenumber {
                    index: 1,
                    source: ConstraintError::NotANumber,
                    ..
                })
            ));
        }
    }

    #[test]
    fn wiggles_need_baryons_and_photons() {
        let primordial = reference_primordial();
        let k = REFERENCE_WAVENUMBERS;

        for cosmology in [no_baryons(), no_photons()] {
            assert!(matches!(
                eisenstein_hu(&k, &primordial, &cosmology, Transfer::WithWiggles),
                Err(PowerSpectrumError::Cosmology(_))
            ));
            assert!(matches!(
                transfer_with_wiggles(&k, &cosmology),
                Err(PowerSpectrumError::Cosmology(_))
            ));

            let pk = eisenstein_hu(&k, &primordial, &cosmology, Transfer::NoWiggles)
                .expect("smooth shape accepts any cosmology");
            assert!(pk.iter().all(|p| p.is_finite() && *p > 0.0));
        }
    }

    #[test]
    fn wavenumbers_are_checked_before_cosmology() {
        assert!(matches!(
            transfer_with_wiggles(&-1.0_f64, &no_baryons()),
            Err(PowerSpectrumError::Wavenumber { .. })
        ));
    }

    #[test]
    fn large_scales_follow_primordial_tilt() -> Result<(), PowerSpectrumError> {
        let primordial = reference_primordial();
        let cosmology = FlatLambdaCdm::planck15();
        let k = 1e-8_f64;

        for transfer in [Transfer::WithWiggles, Transfer::NoWiggles] {
            let pk = eisenstein_hu(&k, &primordial, &cosmology, transfer)?;
            assert_relative_eq!(
                pk,
                normalization(&cosmology) * primordial.curvature_power(k) * k,
                max_relative = 1e-6
            );
        }
        Ok(())
    }

    #[test]
    fn transfer_functions_are_exposed() -> Result<(), PowerSpectrumError> {
        let cosmology = FlatLambdaCdm::planck15();

        let wiggle = transfer_with_wiggles(&REFERENCE_WAVENUMBERS, &cosmology)?;
        let smooth = transfer_no_wiggles(&REFERENCE_WAVENUMBERS, &cosmology)?;

        assert_relative_eq!(wiggle[0], 0.984_445_486_779_862_7, max_relative = 1e-10);
        assert_relative_eq!(smooth[0], 0.984_321_213_851_828, max_relative = 1e-10);
        assert!(transfer_no_wiggles(&0.0_f64, &cosmology).is_err());
        Ok(())
    }

    #[test]
    fn branches_differ_and_repeat() -> Result<(), PowerSpectrumError> {
        let wiggle = planck15(&REFERENCE_WAVENUMBERS[..], Transfer::WithWiggles)?;
        let smooth = planck15(&REFERENCE_WAVENUMBERS[..], Transfer::NoWiggles)?;

        assert_ne!(wiggle, smooth);
        assert_eq!(
            wiggle,
            planck15(&REFERENCE_WAVENUMBERS[..], Transfer::WithWiggles)?
        );
        Ok(())
    }
}
