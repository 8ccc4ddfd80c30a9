#![allow(dead_code, non_snake_case)]

//! Computes bound states of a particle in a one-dimensional potential well by
//! discretizing the time-independent Schrödinger equation on a uniform
//! coordinate grid and diagonalizing the resulting dense symmetric
//! Hamiltonian.
//!
//! Five well shapes are supported (see [`potential::Well`]):
//! - infinitely deep well (flat zero potential; confinement comes from the
//!   implicit vanishing of the wavefunction outside the sampled domain)
//! - finite-depth well with independent wall heights
//! - harmonic oscillator
//! - triangular (tilted) well
//! - tilted finite-depth well
//!
//! Lengths are measured in nanometers, energies in electronvolts, and masses
//! in electron masses; see [`units`]. The discretization imposes Dirichlet
//! boundary conditions at the edges of the grid, so every shape is in effect
//! embedded in a box spanning the sampled domain.
//!
//! ```no_run
//! use qwell::{ grid::Grid, potential::Well, solve::solve };
//!
//! let grid = Grid::symmetric(10.0, 300).unwrap();
//! let well = Well::Finite { v_left: 1.0, v_right: 1.0, width: 10.0 };
//! let spectrum = solve(&grid, &well, 1.0).unwrap();
//! for sol in spectrum.lowest(3) {
//!     println!("{:.6} eV", sol.e);
//! }
//! ```

pub mod error;
pub mod units;
pub mod grid;
pub mod potential;
pub mod hamiltonian;
pub mod solve;
pub mod utils;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
