//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

pub type WellResult<T> = Result<T, WellError>;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from the solver pipeline.
///
/// Every variant except [`Linalg`][Self::Linalg] indicates malformed caller
/// input and is raised before any matrix is assembled; `Linalg` indicates a
/// convergence failure inside the eigensolver itself.
#[derive(Debug, Error)]
pub enum WellError {
    /// Returned when a grid is requested with fewer than 3 points.
    #[error("grids must contain at least 3 points; got {0}")]
    BadPoints(usize),

    /// Returned when grid bounds are inverted or degenerate.
    #[error("grid bounds must satisfy lower < upper; got [{0}, {1}]")]
    BadBounds(f64, f64),

    /// Returned when a non-positive well width is encountered.
    #[error("well widths must be greater than 0; got {0}")]
    BadWidth(f64),

    /// Returned when a negative wall height is encountered.
    #[error("wall heights must be at least 0; got {0}")]
    BadHeight(f64),

    /// Returned when a slope outside `(-1, 1)` is encountered.
    #[error("slopes must lie strictly between -1 and 1; got {0}")]
    BadSlope(f64),

    /// Returned when a non-positive effective mass is encountered.
    #[error("effective masses must be greater than 0; got {0}")]
    BadMass(f64),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`LinalgError`]
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
}

impl WellError {
    pub(crate) fn check_points(n: usize) -> Result<(), Self> {
        (n >= 3).then_some(()).ok_or(Self::BadPoints(n))
    }

    pub(crate) fn check_bounds(lower: f64, upper: f64) -> Result<(), Self> {
        (lower < upper).then_some(()).ok_or(Self::BadBounds(lower, upper))
    }

    pub(crate) fn check_width(width: f64) -> Result<(), Self> {
        (width > 0.0).then_some(()).ok_or(Self::BadWidth(width))
    }

    pub(crate) fn check_height(height: f64) -> Result<(), Self> {
        (height >= 0.0).then_some(()).ok_or(Self::BadHeight(height))
    }

    pub(crate) fn check_slope(slope: f64) -> Result<(), Self> {
        (slope.abs() < 1.0).then_some(()).ok_or(Self::BadSlope(slope))
    }

    pub(crate) fn check_mass(mass: f64) -> Result<(), Self> {
        (mass > 0.0).then_some(()).ok_or(Self::BadMass(mass))
    }

    /// Return `true` if the error indicates malformed caller input.
    ///
    /// These errors are recoverable by re-invoking with corrected parameters.
    pub fn is_invalid_parameter(&self) -> bool {
        !matches!(self, Self::Linalg(_))
    }

    /// Return `true` if the error came from the eigensolver failing to
    /// converge.
    pub fn is_numerical(&self) -> bool {
        matches!(self, Self::Linalg(_))
    }
}
