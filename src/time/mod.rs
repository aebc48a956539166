//! Time integration: the conservative update and CFL time-step estimates.

mod cfl;
mod integrator;

pub use cfl::{cfl_number, cfl_time_step, max_signal_speed};
pub use integrator::{ForwardEuler, TimeIntegrator};
