//! Eigensolution of the discretized Hamiltonian and the top-level
//! grid → potential → matrix → spectrum pipeline.

use std::cmp;
use ndarray as nd;
use ndarray_linalg::{ self as la, EighInto };
use crate::{
    error::{ WellError, WellResult },
    grid::Grid,
    hamiltonian::hamiltonian,
    potential::Well,
};

/// A single solution of the discretized problem.
///
/// This struct is usually only returned by a solver function; you probably
/// won't ever instantiate it yourself.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Energy (eV)
    pub e: f64,
    /// Eigenvector sampled on the grid, unit-length under the standard dot
    /// product (not grid-normalized; see [`crate::utils::density`]).
    pub wf: nd::Array1<f64>,
}

impl Solution {
    /// Compare two `Solution`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }
}

/// The full set of eigensolutions of one Hamiltonian, ascending in energy.
///
/// Contains as many solutions as there are grid points; eigenvectors are
/// mutually orthonormal under the standard dot product.
#[derive(Clone, Debug)]
pub struct Spectrum {
    states: Vec<Solution>,
}

impl Spectrum {
    /// Number of solutions, equal to the number of grid points.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.states.len() }

    /// Borrow all solutions, ascending in energy.
    pub fn states(&self) -> &[Solution] { &self.states }

    /// Borrow the `k` lowest-energy solutions, unmodified and ascending.
    ///
    /// If `k` exceeds the number of solutions, all of them are returned.
    pub fn lowest(&self, k: usize) -> &[Solution] {
        &self.states[..k.min(self.states.len())]
    }

    /// Collect all energies into an array, ascending.
    pub fn energies(&self) -> nd::Array1<f64> {
        self.states.iter().map(|sol| sol.e).collect()
    }

    /// Iterate over all solutions, ascending in energy.
    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.states.iter()
    }
}

impl IntoIterator for Spectrum {
    type Item = Solution;
    type IntoIter = std::vec::IntoIter<Solution>;

    fn into_iter(self) -> Self::IntoIter { self.states.into_iter() }
}

/// Diagonalize a real symmetric matrix, pairing each eigenvalue with its
/// eigenvector.
///
/// Uses the symmetric-specialized decomposition, which returns eigenvalues in
/// ascending order and an orthonormal set of eigenvectors.
pub fn eigensolve(H: nd::Array2<f64>) -> WellResult<Spectrum> {
    let (evals, evecs): (nd::Array1<f64>, nd::Array2<f64>)
        = H.eigh_into(la::UPLO::Lower)?;
    let states: Vec<Solution>
        = evals.into_iter().zip(evecs.columns())
        .map(|(e, v)| Solution { e, wf: v.to_owned() })
        .collect();
    Ok(Spectrum { states })
}

/// Solve for the spectrum of a particle of `mass` electron masses in `well`,
/// discretized on `grid`.
///
/// All parameters are checked up front; invalid input never reaches matrix
/// assembly. [`WellError::Linalg`] is returned only if the decomposition
/// itself fails to converge, which is not expected for these matrices.
pub fn solve(grid: &Grid, well: &Well, mass: f64) -> WellResult<Spectrum> {
    well.validate()?;
    WellError::check_mass(mass)?;
    let V = well.sample(grid);
    let H = hamiltonian(grid, &V, mass)?;
    eigensolve(H)
}
