//! CFL time-step estimates.
//!
//! The signal speed of a cell is `max(|u|, |v|) + c`; the grid-wide
//! maximum over interior cells bounds how far information travels per step.

use crate::solver::GridState;

/// Largest `max(|u|, |v|) + c` over interior cells of the primitive view.
pub fn max_signal_speed(grid: &GridState) -> f64 {
    let gas = grid.gas();
    grid.interior_primitives()
        .map(|w| w.u.abs().max(w.v.abs()) + gas.sound_speed(w))
        .fold(0.0, f64::max)
}

/// Stable time step `cfl·dx / max_signal_speed`.
///
/// Returns `None` if the grid carries no finite positive signal speed.
pub fn cfl_time_step(grid: &GridState, cfl: f64) -> Option<f64> {
    let speed = max_signal_speed(grid);
    (speed.is_finite() && speed > 0.0).then(|| cfl * grid.dx() / speed)
}

/// CFL number realised by time step `dt`.
pub fn cfl_number(grid: &GridState, dt: f64) -> f64 {
    dt * max_signal_speed(grid) / grid.dx()
}
