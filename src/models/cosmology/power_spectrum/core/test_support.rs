use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::support::cosmology::FlatLambdaCdm;

use super::PrimordialSpectrum;

/// Wavenumbers, in Mpc⁻¹, of the Planck 2015 reference spectra.
pub(super) const REFERENCE_WAVENUMBERS: [f64; 5] = [1e-3, 1e-2, 1e-1, 1.0, 10.0];

/// Planck 2015 spectrum with acoustic oscillations, in (Mpc/h)³.
pub(super) const REFERENCE_WITH_WIGGLES: [f64; 5] = [
    9.298_950_09e3,
    4.104_218_83e4,
    5.620_461_51e3,
    4.635_333_49e1,
    1.411_079_39e-1,
];

/// Planck 2015 spectrum with the smooth shape, in (Mpc/h)³.
pub(super) const REFERENCE_NO_WIGGLES: [f64; 5] = [
    9.296_602_50e3,
    4.177_468_80e4,
    5.540_475_25e3,
    4.552_375_83e1,
    1.381_275_99e-1,
];

/// Primordial spectrum paired with the Planck 2015 references.
pub(super) fn reference_primordial() -> PrimordialSpectrum {
    PrimordialSpectrum::new(2.1982e-9, 0.969_453).expect("reference amplitude is valid")
}

/// Flat universe with photons but no baryons.
pub(super) fn no_baryons() -> FlatLambdaCdm {
    FlatLambdaCdm::new(70.0, 0.3)
        .and_then(|cosmology| {
            cosmology.with_cmb_temperature(ThermodynamicTemperature::new::<kelvin>(2.725))
        })
        .expect("test cosmology is valid")
}

/// Flat universe with baryons but no photon background.
pub(super) fn no_photons() -> FlatLambdaCdm {
    FlatLambdaCdm::new(70.0, 0.3)
        .and_then(|cosmology| cosmology.with_baryons(0.05))
        .expect("test cosmology is valid")
}
