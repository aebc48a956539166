//! Conservative finite-volume update.
//!
//! # Example
//! ```
//! use euler_fv::boundary::BoundaryConditionApplier;
//! use euler_fv::solver::{FaceFluxes, FluxAccumulator, GridConfig, GridState};
//! use euler_fv::time::{ForwardEuler, TimeIntegrator};
//!
//! let config = GridConfig::new(16);
//! let mut grid = GridState::new(&config).unwrap();
//! let mut fluxes = FaceFluxes::new(16);
//!
//! BoundaryConditionApplier::new(&config.boundary).apply(&mut grid);
//! FluxAccumulator::default().accumulate(&grid, &mut fluxes);
//! ForwardEuler.update(&mut grid, &fluxes, config.initial_dt());
//! ```

use crate::solver::flux_accumulator::for_each_row;
use crate::solver::{FaceFluxes, GridState};

// =============================================================================
// TimeIntegrator Trait
// =============================================================================

/// Applies accumulated face fluxes to the conserved cell averages.
///
/// # Implementation Notes
///
/// - Only interior cells are updated; ghosts are refilled next step
/// - The update must not allocate (hot path)
pub trait TimeIntegrator: Send + Sync {
    /// Advance the conserved view of `grid` by `dt`.
    fn update(&self, grid: &mut GridState, fluxes: &FaceFluxes, dt: f64);

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;

    /// Order of accuracy in time.
    fn order(&self) -> usize;
}

// =============================================================================
// Forward Euler
// =============================================================================

/// Unsplit explicit Euler step.
///
/// ```text
/// U[i,j] -= dt/dx · (Fx[i,j] - Fx[i-1,j] + Fy[i,j] - Fy[i,j-1])
/// ```
///
/// Each interior flux enters two neighbouring cells with opposite signs, so
/// the interior sum of every component changes only by boundary-face fluxes.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardEuler;

impl TimeIntegrator for ForwardEuler {
    fn update(&self, grid: &mut GridState, fluxes: &FaceFluxes, dt: f64) {
        let lambda = dt / grid.dx();
        let stride = grid.stride();
        let interior = grid.interior();
        let cols = interior.clone();

        for_each_row(grid.conserved_cells_mut(), stride, interior, |i, row| {
            for j in cols.clone() {
                let divergence = fluxes.x(i, j) - fluxes.x(i - 1, j)
                    + (fluxes.y(i, j) - fluxes.y(i, j - 1));
                row[j] = row[j] - lambda * divergence;
            }
        });
    }

    fn name(&self) -> &'static str {
        "forward-euler"
    }

    fn order(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryConditionApplier;
    use crate::solver::{EulerState2D, FluxAccumulator, GridConfig, InitialCondition, PrimitiveState2D};
    use crate::types::Axis;

    const TOL: f64 = 1e-12;

    fn total(grid: &GridState) -> EulerState2D {
        grid.interior_conserved()
            .fold(EulerState2D::zero(), |acc, q| acc + *q)
    }

    #[test]
    fn test_uniform_state_unchanged() {
        let w = PrimitiveState2D::new(1.0, 0.0, 0.0, 1.0);
        let config = GridConfig::new(8).with_initial_condition(InitialCondition::Uniform(w));
        let mut grid = GridState::new(&config).unwrap();
        let before = grid.conserved(5, 5);
        let mut fluxes = FaceFluxes::new(8);

        BoundaryConditionApplier::new(&config.boundary).apply(&mut grid);
        FluxAccumulator::default().accumulate(&grid, &mut fluxes);
        ForwardEuler.update(&mut grid, &fluxes, config.initial_dt());

        for q in grid.interior_conserved() {
            assert!((*q - before).max_abs() < TOL, "{:?}", q);
        }
    }

    #[test]
    fn test_single_face_flux_is_conservative() {
        let mut grid = GridState::new(&GridConfig::new(4)).unwrap();
        let mut fluxes = FaceFluxes::new(4);
        let flux = EulerState2D::new(0.5, -0.25, 0.125, 1.0);
        fluxes.set(Axis::X, 4, 4, flux);

        let before = total(&grid);
        let left = grid.conserved(4, 4);
        let right = grid.conserved(5, 4);
        let dt = 0.01;
        let lambda = dt / grid.dx();
        ForwardEuler.update(&mut grid, &fluxes, dt);

        assert!((grid.conserved(4, 4) - (left - lambda * flux)).max_abs() < TOL);
        assert!((grid.conserved(5, 4) - (right + lambda * flux)).max_abs() < TOL);
        assert!((total(&grid) - before).max_abs() < TOL);
    }

    #[test]
    fn test_integrator_info() {
        assert_eq!(ForwardEuler.name(), "forward-euler");
        assert_eq!(ForwardEuler.order(), 1);
    }
}
