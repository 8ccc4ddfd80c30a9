//! Uniform one-dimensional coordinate grids.

use ndarray as nd;
use crate::error::{ WellError, WellResult };

/// Uniform sample of positions over a closed interval.
///
/// Arrays borrowed from this type are guaranteed to be strictly ascending and
/// uniformly spaced, with both interval endpoints included.
#[derive(Clone, Debug)]
pub struct Grid {
    // coordinate array
    x: nd::Array1<f64>,
    // coordinate array grid spacing
    dx: f64,
    // array size
    n: usize,
}

impl Grid {
    /// Create a new `Grid` from "linspace-style" arguments (start, inclusive
    /// end, and an array length).
    pub fn new(lower: f64, upper: f64, n: usize) -> WellResult<Self> {
        WellError::check_points(n)?;
        WellError::check_bounds(lower, upper)?;
        let x: nd::Array1<f64> = nd::Array1::linspace(lower, upper, n);
        let dx = x[1] - x[0];
        Ok(Self { x, dx, n })
    }

    /// Create a new `Grid` spanning `[-half_width, half_width]`.
    pub fn symmetric(half_width: f64, n: usize) -> WellResult<Self> {
        Self::new(-half_width, half_width, n)
    }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the coordinate array grid spacing.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the length of the coordinate array.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }
}
