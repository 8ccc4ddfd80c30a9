//! Assembly of the discretized Hamiltonian matrix.

use ndarray as nd;
use crate::{
    Arr1,
    error::{ LengthError, WellError, WellResult },
    grid::Grid,
    units,
};

/// Second-order central finite-difference second-derivative matrix over `n`
/// uniformly spaced points: tridiagonal with `-2/dx²` on the diagonal and
/// `1/dx²` on the sub- and super-diagonals.
///
/// The boundary rows are plain truncations of the interior stencil, which
/// imposes Dirichlet conditions: the wavefunction is taken to vanish just
/// outside the sampled domain. No one-sided corrections are applied.
pub fn laplacian(n: usize, dx: f64) -> nd::Array2<f64> {
    let ondx2 = dx.powi(2).recip();
    let mut D: nd::Array2<f64> = nd::Array2::from_diag_elem(n, -2.0 * ondx2);
    D.slice_mut(nd::s![1..n, 0..n - 1]).diag_mut().fill(ondx2);
    D.slice_mut(nd::s![0..n - 1, 1..n]).diag_mut().fill(ondx2);
    D
}

/// Kinetic-energy prefactor `-ħ²/(2 m m₀)` in electronvolt-nanometer² units
/// for a particle of `mass` electron masses.
pub fn kinetic_scale(mass: f64) -> f64 {
    -(units::hbar / units::to_nm).powi(2) / (2.0 * mass * units::m0)
        * units::J2eV
}

/// Assemble the Hamiltonian for a potential sampled on a grid: the scaled
/// finite-difference [`laplacian`] plus the potential on the diagonal.
///
/// The result is symmetric by construction; the Laplacian is tridiagonal with
/// equal off-diagonals and the potential only touches the main diagonal. It
/// is never mutated after assembly.
pub fn hamiltonian<S>(grid: &Grid, V: &Arr1<S>, mass: f64)
    -> WellResult<nd::Array2<f64>>
where S: nd::Data<Elem = f64>
{
    WellError::check_mass(mass)?;
    LengthError::check(grid.get_x(), V)?;
    let mut H = laplacian(grid.len(), grid.get_dx());
    H *= kinetic_scale(mass);
    let mut H_diag = H.diag_mut();
    H_diag += V;
    Ok(H)
}
