#![allow(non_upper_case_globals)]

//! Physical constants and conversion factors for the solver's unit system:
//! lengths in nanometers, energies in electronvolts, masses in electron
//! masses.
//!
//! The numerical values are fixed; spectra computed with them are directly
//! comparable across versions of this crate.

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = 1.0545718e-34;

/// electron rest mass (kg); the reference mass that effective masses are
/// expressed in multiples of
pub const m0: f64 = 9.10938215e-31;

/// joules per electronvolt
pub const eV2J: f64 = 1.6021766209e-19;

/// electronvolts per joule
pub const J2eV: f64 = 6.241509125493693e18;

/// meters per nanometer
pub const to_nm: f64 = 1e-9;
