//! Governing equations.
//!
//! The solver integrates the 2D compressible Euler equations of an ideal
//! gas; [`Euler2D`] holds the closure (γ) and the pointwise relations the
//! finite-volume pieces need: variable conversions, physical fluxes,
//! sound speed and enthalpy.

mod euler_2d;

pub use euler_2d::{DENSITY_FLOOR, Euler2D, GAMMA_AIR, PRESSURE_FLOOR};
