//! Helpers for working with grid-sampled eigenvectors.

use ndarray as nd;
use crate::Arr1;

/// Standard dot product of two grid vectors.
///
/// Eigenvectors returned by the solver are orthonormal under this product.
pub fn wf_dot<S, T>(q: &Arr1<S>, p: &Arr1<T>) -> f64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    q.iter().zip(p).map(|(qk, pk)| qk * pk).sum()
}

/// Euclidean norm of a grid vector.
pub fn wf_norm<S>(q: &Arr1<S>) -> f64
where S: nd::Data<Elem = f64>
{
    wf_dot(q, q).sqrt()
}

/// Display scaling for probability densities: `|ψ|² / √dx`.
///
/// This is the scaling the plotting layer applies when drawing densities. It
/// divides by the square root of the grid spacing rather than normalizing
/// `Σ|ψᵢ|²·dx` to 1, so the result is a display quantity, not a probability
/// distribution.
pub fn density<S>(q: &Arr1<S>, dx: f64) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    q.mapv(|qk| qk.powi(2) / dx.sqrt())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use super::*;

    #[test]
    fn dot_and_norm() {
        let q = array![3.0, 0.0, 4.0];
        let p = array![1.0, 2.0, 0.5];
        assert_abs_diff_eq!(wf_dot(&q, &p), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(wf_norm(&q), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn density_divides_by_sqrt_spacing() {
        let q = array![1.0, -2.0, 0.5];
        let d = density(&q, 0.25);
        let expected = [2.0, 8.0, 0.5];
        for (dk, ek) in d.iter().zip(expected) {
            assert_abs_diff_eq!(dk, &ek, epsilon = 1e-12);
        }
    }
}
