use ndarray::{Array, ArrayBase, Data, Dimension};

/// A collection of wavenumbers, in Mpc⁻¹, that can be mapped elementwise
/// into an output of the same shape.
///
/// A scalar maps to a scalar, a slice or `Vec` to a `Vec`, a fixed-size array
/// to an array of the same length, and an `ndarray` array to an owned array
/// with the same dimensions.
pub trait Wavenumbers {
    /// Container produced by [`map_values`](Self::map_values).
    type Output;

    /// Iterates over the wavenumbers in logical order.
    fn values(&self) -> impl Iterator<Item = f64> + '_;

    /// Applies `f` to every wavenumber, preserving shape.
    fn map_values(&self, f: impl FnMut(f64) -> f64) -> Self::Output;
}

impl Wavenumbers for f64 {
    type Output = f64;

    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        std::iter::once(*self)
    }

    fn map_values(&self, mut f: impl FnMut(f64) -> f64) -> f64 {
        f(*self)
    }
}

impl Wavenumbers for [f64] {
    type Output = Vec<f64>;

    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().copied()
    }

    fn map_values(&self, f: impl FnMut(f64) -> f64) -> Vec<f64> {
        self.iter().copied().map(f).collect()
    }
}

impl<const N: usize> Wavenumbers for [f64; N] {
    type Output = [f64; N];

    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().copied()
    }

    fn map_values(&self, f: impl FnMut(f64) -> f64) -> [f64; N] {
        self.map(f)
    }
}

impl Wavenumbers for Vec<f64> {
    type Output = Vec<f64>;

    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().copied()
    }

    fn map_values(&self, f: impl FnMut(f64) -> f64) -> Vec<f64> {
        self.as_slice().map_values(f)
    }
}

impl<S, D> Wavenumbers for ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    type Output = Array<f64, D>;

    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().copied()
    }

    fn map_values(&self, f: impl FnMut(f64) -> f64) -> Array<f64, D> {
        self.mapv(f)
    }
}
