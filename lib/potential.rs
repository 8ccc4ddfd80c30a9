//! Potential-energy profiles for the five supported well shapes.
//!
//! The profile functions are pure and perform no validation of their own;
//! parameter ranges are enforced by [`Well::validate`] before any profile is
//! evaluated.

use ndarray as nd;
use crate::{
    error::{ WellError, WellResult },
    grid::Grid,
};

/// Flat zero potential.
///
/// Confinement comes entirely from the implicit vanishing of the wavefunction
/// outside the sampled domain, so this models a box spanning the whole grid.
pub fn infinite_well(_x: f64) -> f64 { 0.0 }

/// Stepped potential: `v_left` for `x < -width/2`, `v_right` for
/// `x > width/2`, zero in between.
///
/// The branches are evaluated literally; if `width` exceeds the grid extent
/// the steps simply fall outside the sampled domain and the profile is zero
/// everywhere.
pub fn finite_well(x: f64, v_left: f64, v_right: f64, width: f64) -> f64 {
    if x < -width / 2.0 {
        v_left
    } else if x > width / 2.0 {
        v_right
    } else {
        0.0
    }
}

/// Quadratic potential `x²`.
pub fn oscillator(x: f64) -> f64 { x.powi(2) }

/// Linear ramp `slope · x` across the whole grid.
///
/// The ramp is unbounded on its own; the well shape arises from the Dirichlet
/// walls at the grid edges.
pub fn triangle_well(x: f64, slope: f64) -> f64 { slope * x }

/// Pointwise superposition of [`finite_well`] and [`triangle_well`].
pub fn triangle_finite_well(
    x: f64,
    v_left: f64,
    v_right: f64,
    width: f64,
    slope: f64,
) -> f64 {
    finite_well(x, v_left, v_right, width) + triangle_well(x, slope)
}

/// Well shape selector, carrying only the parameters relevant to each shape.
///
/// Wall heights are in electronvolts, widths in nanometers; slopes are in
/// electronvolts per nanometer and must lie strictly between -1 and 1.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Well {
    /// Infinitely deep well; see [`infinite_well`].
    Infinite,
    /// Finite-depth well with independent wall heights; see [`finite_well`].
    Finite {
        /// Height of the left wall (eV).
        v_left: f64,
        /// Height of the right wall (eV).
        v_right: f64,
        /// Distance between the walls (nm).
        width: f64,
    },
    /// Harmonic oscillator; see [`oscillator`].
    Oscillator,
    /// Triangular (tilted) well; see [`triangle_well`].
    Triangle {
        /// Ramp slope (eV nm⁻¹).
        slope: f64,
    },
    /// Tilted finite-depth well; see [`triangle_finite_well`].
    TriangleFinite {
        /// Height of the left wall (eV).
        v_left: f64,
        /// Height of the right wall (eV).
        v_right: f64,
        /// Distance between the walls (nm).
        width: f64,
        /// Ramp slope (eV nm⁻¹).
        slope: f64,
    },
}

impl Well {
    /// Finite-depth well with 1 eV walls spaced 10 nm apart.
    pub fn finite_defaults() -> Self {
        Self::Finite { v_left: 1.0, v_right: 1.0, width: 10.0 }
    }

    /// Triangular well with a 0.05 eV nm⁻¹ ramp.
    pub fn triangle_defaults() -> Self {
        Self::Triangle { slope: 0.05 }
    }

    /// Tilted finite-depth well with 1 eV walls spaced 10 nm apart and a
    /// 0.05 eV nm⁻¹ ramp.
    pub fn triangle_finite_defaults() -> Self {
        Self::TriangleFinite { v_left: 1.0, v_right: 1.0, width: 10.0, slope: 0.05 }
    }

    /// Evaluate the potential at a single position.
    pub fn eval(&self, x: f64) -> f64 {
        match *self {
            Self::Infinite => infinite_well(x),
            Self::Finite { v_left, v_right, width }
                => finite_well(x, v_left, v_right, width),
            Self::Oscillator => oscillator(x),
            Self::Triangle { slope } => triangle_well(x, slope),
            Self::TriangleFinite { v_left, v_right, width, slope }
                => triangle_finite_well(x, v_left, v_right, width, slope),
        }
    }

    /// Evaluate the potential at every position of a grid.
    pub fn sample(&self, grid: &Grid) -> nd::Array1<f64> {
        grid.get_x().mapv(|xk| self.eval(xk))
    }

    /// Check all parameter ranges ahead of any evaluation.
    ///
    /// Heights must be at least 0, widths greater than 0, and slopes strictly
    /// between -1 and 1.
    pub fn validate(&self) -> WellResult<()> {
        match *self {
            Self::Infinite | Self::Oscillator => Ok(()),
            Self::Finite { v_left, v_right, width } => {
                WellError::check_height(v_left)?;
                WellError::check_height(v_right)?;
                WellError::check_width(width)
            },
            Self::Triangle { slope } => WellError::check_slope(slope),
            Self::TriangleFinite { v_left, v_right, width, slope } => {
                WellError::check_height(v_left)?;
                WellError::check_height(v_right)?;
                WellError::check_width(width)?;
                WellError::check_slope(slope)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use crate::grid::Grid;
    use super::*;

    #[test]
    fn infinite_well_is_all_zero() {
        let grid = Grid::new(-10.0, 10.0, 37).unwrap();
        let V = Well::Infinite.sample(&grid);
        assert_eq!(V.len(), 37);
        assert!(V.iter().all(|&Vk| Vk == 0.0));
    }

    #[test]
    fn finite_well_steps() {
        // [-10, -5, 0, 5, 10] with walls at ±5 -> [1, 0, 0, 0, 2]
        let grid = Grid::new(-10.0, 10.0, 5).unwrap();
        let well = Well::Finite { v_left: 1.0, v_right: 2.0, width: 10.0 };
        let V = well.sample(&grid);
        let expected = [1.0, 0.0, 0.0, 0.0, 2.0];
        for (Vk, ek) in V.iter().zip(expected) {
            assert_abs_diff_eq!(Vk, &ek);
        }
    }

    #[test]
    fn finite_well_wider_than_grid_is_flat() {
        let grid = Grid::new(-10.0, 10.0, 5).unwrap();
        let well = Well::Finite { v_left: 1.0, v_right: 2.0, width: 25.0 };
        let V = well.sample(&grid);
        assert!(V.iter().all(|&Vk| Vk == 0.0));
    }

    #[test]
    fn oscillator_is_quadratic() {
        let grid = Grid::new(-2.0, 2.0, 5).unwrap();
        let V = Well::Oscillator.sample(&grid);
        let expected = [4.0, 1.0, 0.0, 1.0, 4.0];
        for (Vk, ek) in V.iter().zip(expected) {
            assert_abs_diff_eq!(Vk, &ek, epsilon = 1e-12);
        }
    }

    #[test]
    fn triangle_well_is_linear() {
        let grid = Grid::new(-10.0, 10.0, 5).unwrap();
        let well = Well::Triangle { slope: 0.4 };
        let V = well.sample(&grid);
        for (Vk, xk) in V.iter().zip(grid.get_x()) {
            assert_abs_diff_eq!(Vk, &(0.4 * xk), epsilon = 1e-12);
        }
    }

    #[test]
    fn triangle_finite_well_superposes() {
        let grid = Grid::new(-10.0, 10.0, 5).unwrap();
        let tilted = Well::TriangleFinite {
            v_left: 1.0, v_right: 2.0, width: 10.0, slope: 0.1,
        };
        let flat = Well::Finite { v_left: 1.0, v_right: 2.0, width: 10.0 };
        let Vt = tilted.sample(&grid);
        let Vf = flat.sample(&grid);
        for ((Vtk, Vfk), xk) in Vt.iter().zip(&Vf).zip(grid.get_x()) {
            assert_abs_diff_eq!(Vtk, &(Vfk + 0.1 * xk), epsilon = 1e-12);
        }
    }

    #[test]
    fn bad_parameters_are_rejected() {
        let bad_width = Well::Finite { v_left: 1.0, v_right: 1.0, width: -1.0 };
        assert!(matches!(bad_width.validate(), Err(WellError::BadWidth(..))));

        let bad_height = Well::Finite { v_left: -1.0, v_right: 1.0, width: 10.0 };
        assert!(matches!(bad_height.validate(), Err(WellError::BadHeight(..))));

        let bad_slope = Well::Triangle { slope: 1.0 };
        assert!(matches!(bad_slope.validate(), Err(WellError::BadSlope(..))));

        let bad_tilted = Well::TriangleFinite {
            v_left: 1.0, v_right: 1.0, width: 10.0, slope: -1.5,
        };
        assert!(matches!(bad_tilted.validate(), Err(WellError::BadSlope(..))));
    }

    #[test]
    fn good_parameters_pass() {
        assert!(Well::Infinite.validate().is_ok());
        assert!(Well::Oscillator.validate().is_ok());
        assert!(Well::finite_defaults().validate().is_ok());
        assert!(Well::triangle_defaults().validate().is_ok());
        assert!(Well::triangle_finite_defaults().validate().is_ok());
        // zero heights and a zero slope are all allowed
        let edge = Well::TriangleFinite {
            v_left: 0.0, v_right: 0.0, width: 1e-3, slope: 0.0,
        };
        assert!(edge.validate().is_ok());
    }
}
