//! Background cosmology: the parameters a model needs to know about the universe.
//!
//! Models consume cosmologies through the [`Cosmology`] capability trait, so any
//! parameter container can be plugged in. [`FlatLambdaCdm`] is the concrete
//! container provided by this crate, with published parameter sets available
//! as presets.
//!
//! ```
//! use twine_cosmology::support::cosmology::{Cosmology, FlatLambdaCdm};
//! use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cosmology = FlatLambdaCdm::new(70.0, 0.3)?
//!     .with_baryons(0.05)?
//!     .with_cmb_temperature(ThermodynamicTemperature::new::<kelvin>(2.725))?;
//!
//! assert_eq!(cosmology.little_h(), 0.7);
//! assert_eq!(cosmology.omega_de0(), 0.7);
//! # Ok(())
//! # }
//! ```

mod flat_lambda_cdm;
mod growth;
mod hubble;

pub use flat_lambda_cdm::{CosmologyParametersError, FlatLambdaCdm};
pub use growth::{GrowthError, growth_factor_carroll, growth_function_carroll};
pub use hubble::HubbleConstant;

use uom::si::f64::ThermodynamicTemperature;

/// Present-day (`z = 0`) parameters of a homogeneous background cosmology.
///
/// Implementors report raw values and do not promise that they are usable by
/// every model. Models check the preconditions they need (for example, a
/// positive baryon density for acoustic oscillations) before evaluating.
pub trait Cosmology {
    /// Total matter density parameter `Ω_m0`.
    fn omega_m0(&self) -> f64;

    /// Baryon density parameter `Ω_b0`.
    fn omega_b0(&self) -> f64;

    /// Present-day Hubble constant `H0`.
    fn hubble_constant(&self) -> HubbleConstant;

    /// Present-day CMB temperature `Tcmb0`.
    fn cmb_temperature(&self) -> ThermodynamicTemperature;

    /// Dark energy density parameter `Ω_Λ0`.
    ///
    /// Defaults to the flat value `1 - Ω_m0`.
    fn omega_de0(&self) -> f64 {
        1.0 - self.omega_m0()
    }

    /// Dimensionless Hubble parameter `h = H0 / (100 km/s/Mpc)`.
    fn little_h(&self) -> f64 {
        self.hubble_constant().little_h()
    }

    /// Curvature density parameter `Ω_k0 = 1 - Ω_m0 - Ω_Λ0`.
    fn omega_k0(&self) -> f64 {
        1.0 - self.omega_m0() - self.omega_de0()
    }

    /// Normalized expansion rate `E(z) = H(z) / H0` for matter, curvature and a
    /// cosmological constant.
    fn efunc(&self, redshift: f64) -> f64 {
        let zp1 = 1.0 + redshift;
        (self.omega_m0() * zp1.powi(3) + self.omega_k0() * zp1.powi(2) + self.omega_de0()).sqrt()
    }

    /// Matter density parameter at `redshift`.
    fn omega_m(&self, redshift: f64) -> f64 {
        self.omega_m0() * (1.0 + redshift).powi(3) / self.efunc(redshift).powi(2)
    }

    /// Dark energy density parameter at `redshift`.
    fn omega_de(&self, redshift: f64) -> f64 {
        self.omega_de0() / self.efunc(redshift).powi(2)
    }
}

impl<C: Cosmology + ?Sized> Cosmology for &C {
    fn omega_m0(&self) -> f64 {
        (**self).omega_m0()
    }

    fn omega_b0(&self) -> f64 {
        (**self).omega_b0()
    }

    fn hubble_constant(&self) -> HubbleConstant {
        (**self).hubble_constant()
    }

    fn cmb_temperature(&self) -> ThermodynamicTemperature {
        (**self).cmb_temperature()
    }

    fn omega_de0(&self) -> f64 {
        (**self).omega_de0()
    }

    fn little_h(&self) -> f64 {
        (**self).little_h()
    }

    fn omega_k0(&self) -> f64 {
        (**self).omega_k0()
    }

    fn efunc(&self, redshift: f64) -> f64 {
        (**self).efunc(redshift)
    }

    fn omega_m(&self, redshift: f64) -> f64 {
        (**self).omega_m(redshift)
    }

    fn omega_de(&self, redshift: f64) -> f64 {
        (**self).omega_de(redshift)
    }
}
