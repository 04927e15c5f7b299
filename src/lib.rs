//! # Twine Cosmology
//!
//! Cosmology models and model-building tools for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! The first model is the Eisenstein & Hu (1998) linear matter power
//! spectrum, with and without baryon acoustic oscillations:
//!
//! ```
//! use twine_cosmology::{
//!     models::cosmology::power_spectrum::{PrimordialSpectrum, Transfer, eisenstein_hu},
//!     support::cosmology::FlatLambdaCdm,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let primordial = PrimordialSpectrum::new(2.1982e-9, 0.969453)?;
//! let pk = eisenstein_hu(
//!     &vec![1e-3_f64, 1e-2, 1e-1, 1.0, 10.0],
//!     &primordial,
//!     &FlatLambdaCdm::planck15(),
//!     Transfer::WithWiggles,
//! )?;
//!
//! assert_eq!(pk.len(), 5);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once more than one model needs it. Background cosmology and
//! numeric constraints already live there.
//!
//! ## Logging
//!
//! Derived scales and evaluation sizes are emitted as [`tracing`] events at
//! `trace` and `debug` level. No subscriber is installed by this crate.

pub mod models;
pub mod support;
