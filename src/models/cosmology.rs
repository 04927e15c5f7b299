//! Cosmology models.
//!
//! This module contains models of the large-scale structure of the universe,
//! starting with the linear matter power spectrum.

pub mod power_spectrum;
