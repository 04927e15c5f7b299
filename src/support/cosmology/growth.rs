use thiserror::Error;

use crate::support::constraint::{Constraint, ConstraintError, NonNegative};

use super::Cosmology;

/// Errors that may occur when evaluating the linear growth function.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GrowthError {
    #[error("invalid redshift: {redshift}")]
    Redshift {
        redshift: f64,
        source: ConstraintError,
    },
}

/// Linear growth function `D(z)` from Carroll, Press & Turner (1992).
///
/// ```text
/// D(z) = 5/2 Ω_m(z) / ((1 + z) [Ω_m(z)^(4/7) - Ω_Λ(z) + (1 + Ω_m(z)/2)(1 + Ω_Λ(z)/70)])
/// ```
///
/// The approximation is normalized so that `D(z) → 1/(1+z)` during matter
/// domination. In an Einstein–de Sitter universe it is exact.
///
/// # Errors
///
/// Returns [`GrowthError::Redshift`] if `redshift` is negative or `NaN`.
pub fn growth_function_carroll(
    redshift: f64,
    cosmology: &impl Cosmology,
) -> Result<f64, GrowthError> {
    NonNegative::check(&redshift).map_err(|source| GrowthError::Redshift { redshift, source })?;

    let omega_m = cosmology.omega_m(redshift);
    let omega_de = cosmology.omega_de(redshift);

    let g = 2.5 * omega_m
        / (omega_m.powf(4.0 / 7.0) - omega_de + (1.0 + 0.5 * omega_m) * (1.0 + omega_de / 70.0));

    Ok(g / (1.0 + redshift))
}

/// Linear growth factor `D(z) / D(0)` using [`growth_function_carroll`].
///
/// # Errors
///
/// Returns [`GrowthError::Redshift`] if `redshift` is negative or `NaN`.
pub fn growth_factor_carroll(
    redshift: f64,
    cosmology: &impl Cosmology,
) -> Result<f64, GrowthError> {
    Ok(growth_function_carroll(redshift, cosmology)? / growth_function_carroll(0.0, cosmology)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::cosmology::{CosmologyParametersError, FlatLambdaCdm};

    #[test]
    fn einstein_de_sitter_is_exact() -> Result<(), Box<dyn std::error::Error>> {
        let cosmology = FlatLambdaCdm::new(70.0, 1.0)?;

        for z in [0.0, 0.5, 1.0, 3.0, 10.0] {
            assert_relative_eq!(
                growth_function_carroll(z, &cosmology)?,
                1.0 / (1.0 + z),
                max_relative = 1e-14
            );
        }
        Ok(())
    }

    #[test]
    fn planck15_growth() -> Result<(), GrowthError> {
        let cosmology = FlatLambdaCdm::planck15();

        assert_relative_eq!(
            growth_function_carroll(0.0, &cosmology)?,
            0.782_527_383_644_399_6,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            growth_function_carroll(1.0, &cosmology)?,
            0.477_509_943_268_130_3,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            growth_factor_carroll(1.0, &cosmology)?,
            0.610_214_994_706_336_1,
            max_relative = 1e-12
        );
        assert_relative_eq!(growth_factor_carroll(0.0, &cosmology)?, 1.0);
        Ok(())
    }

    #[test]
    fn growth_decreases_with_redshift() -> Result<(), GrowthError> {
        let cosmology = FlatLambdaCdm::planck15();

        let mut previous = growth_function_carroll(0.0, &cosmology)?;
        for z in [0.1, 0.5, 1.0, 2.0, 5.0] {
            let current = growth_function_carroll(z, &cosmology)?;
            assert!(current < previous);
            previous = current;
        }
        Ok(())
    }

    #[test]
    fn rejects_negative_redshift() -> Result<(), CosmologyParametersError> {
        let cosmology = FlatLambdaCdm::new(70.0, 0.3)?;

        assert_eq!(
            growth_function_carroll(-0.5, &cosmology),
            Err(GrowthError::Redshift {
                redshift: -0.5,
                source: ConstraintError::Negative
            })
        );
        assert!(growth_factor_carroll(f64::NAN, &cosmology).is_err());
        Ok(())
    }
}
