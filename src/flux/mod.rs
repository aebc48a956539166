//! Numerical flux functions (approximate Riemann solvers).
//!
//! - [`hllc_flux_euler`]: HLLC, the default; resolves contacts and shear
//! - [`hll_flux_euler`]: HLL with Einfeldt wave speeds
//! - [`rusanov_flux_euler`]: local Lax-Friedrichs
//!
//! # Flux Trait
//!
//! The [`NumericalFlux`] trait wraps these behind one interface whose
//! [`NumericalFlux::solve`] method evaluates a face in either sweep
//! direction. [`StandardFlux`] gives enum dispatch when the solver is chosen
//! from configuration.

mod hll;
mod hllc;
mod rusanov;
pub mod traits;

pub use hll::{einfeldt_speeds, hll_flux_euler};
pub use hllc::{STAR_DENOMINATOR_EPS, contact_speed, hllc_flux_euler};
pub use rusanov::rusanov_flux_euler;

pub use traits::{BoxedFlux, HLLCFlux, HLLFlux, NumericalFlux, RusanovFlux, StandardFlux, create_flux};
