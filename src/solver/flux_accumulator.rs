//! Interface flux evaluation over the whole grid.
//!
//! Face `i` along x sits between cells `(i, j)` and `(i + 1, j)`; face `j`
//! along y between `(i, j)` and `(i, j + 1)`. Every face bounding an interior
//! cell is evaluated each step:
//!
//! - x-faces: `i ∈ [2, n + 2]`, `j ∈ [3, n + 3)`
//! - y-faces: `i ∈ [3, n + 3)`, `j ∈ [2, n + 2]`
//!
//! Faces outside these ranges are never read and stay zero.

use std::ops::Range;

use crate::flux::{NumericalFlux, StandardFlux};
use crate::solver::{EulerState2D, GHOST_WIDTH, GridState, MusclReconstructor, SlopeLimiter};
use crate::types::Axis;

// =============================================================================
// Face Flux Buffers
// =============================================================================

/// Numerical fluxes on x-faces (`(n+5) × (n+6)`) and y-faces (`(n+6) × (n+5)`).
#[derive(Clone, Debug)]
pub struct FaceFluxes {
    n: usize,
    x: Vec<EulerState2D>,
    y: Vec<EulerState2D>,
}

impl FaceFluxes {
    /// Zeroed buffers for an `n × n` interior.
    pub fn new(n: usize) -> Self {
        let padded = n + 2 * GHOST_WIDTH;
        Self {
            n,
            x: vec![EulerState2D::zero(); (padded - 1) * padded],
            y: vec![EulerState2D::zero(); padded * (padded - 1)],
        }
    }

    /// Interior cells per side.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Row length of the x-face buffer.
    #[inline(always)]
    fn x_stride(&self) -> usize {
        self.n + 2 * GHOST_WIDTH
    }

    /// Row length of the y-face buffer.
    #[inline(always)]
    fn y_stride(&self) -> usize {
        self.n + 2 * GHOST_WIDTH - 1
    }

    /// Flux through x-face `(i, j)`.
    #[inline(always)]
    pub fn x(&self, i: usize, j: usize) -> EulerState2D {
        self.x[i * self.x_stride() + j]
    }

    /// Flux through y-face `(i, j)`.
    #[inline(always)]
    pub fn y(&self, i: usize, j: usize) -> EulerState2D {
        self.y[i * self.y_stride() + j]
    }

    /// Overwrite the flux through face `(i, j)` normal to `axis`.
    #[inline]
    pub fn set(&mut self, axis: Axis, i: usize, j: usize, value: EulerState2D) {
        let (buffer, stride) = self.buffer_mut(axis);
        buffer[i * stride + j] = value;
    }

    /// Buffer dimensions `(rows, cols)` for faces normal to `axis`.
    pub fn shape(&self, axis: Axis) -> (usize, usize) {
        let padded = self.n + 2 * GHOST_WIDTH;
        match axis {
            Axis::X => (padded - 1, padded),
            Axis::Y => (padded, padded - 1),
        }
    }

    /// Range of `i` for which faces normal to `axis` are evaluated.
    pub fn face_rows(&self, axis: Axis) -> Range<usize> {
        match axis {
            Axis::X => GHOST_WIDTH - 1..self.n + GHOST_WIDTH,
            Axis::Y => GHOST_WIDTH..self.n + GHOST_WIDTH,
        }
    }

    /// Range of `j` for which faces normal to `axis` are evaluated.
    pub fn face_cols(&self, axis: Axis) -> Range<usize> {
        self.face_rows(axis.transverse())
    }

    fn buffer_mut(&mut self, axis: Axis) -> (&mut [EulerState2D], usize) {
        let (_, cols) = self.shape(axis);
        match axis {
            Axis::X => (self.x.as_mut_slice(), cols),
            Axis::Y => (self.y.as_mut_slice(), cols),
        }
    }
}

// =============================================================================
// Flux Accumulator
// =============================================================================

/// Reconstructs face states and solves the Riemann problem on every face.
#[derive(Clone, Copy, Debug, Default)]
pub struct FluxAccumulator {
    reconstructor: MusclReconstructor,
    flux: StandardFlux,
}

impl FluxAccumulator {
    /// Accumulator with the given limiter and Riemann solver.
    pub fn new(limiter: SlopeLimiter, flux: StandardFlux) -> Self {
        Self {
            reconstructor: MusclReconstructor::new(limiter),
            flux,
        }
    }

    /// Riemann solver in use.
    pub fn flux(&self) -> StandardFlux {
        self.flux
    }

    /// Reconstructor in use.
    pub fn reconstructor(&self) -> &MusclReconstructor {
        &self.reconstructor
    }

    /// Evaluate all face fluxes in both directions.
    ///
    /// Reads the primitive view, which must be boundary-filled.
    pub fn accumulate(&self, grid: &GridState, fluxes: &mut FaceFluxes) {
        for axis in Axis::ALL {
            self.accumulate_axis(grid, fluxes, axis);
        }
    }

    /// Evaluate the fluxes through faces normal to `axis`.
    pub fn accumulate_axis(&self, grid: &GridState, fluxes: &mut FaceFluxes, axis: Axis) {
        let rows = fluxes.face_rows(axis);
        let cols = fluxes.face_cols(axis);
        let gas = *grid.gas();
        let (buffer, stride) = fluxes.buffer_mut(axis);

        for_each_row(buffer, stride, rows, |i, row| {
            for j in cols.clone() {
                let (w_l, w_r) = self.reconstructor.face_states(grid, i, j, axis);
                row[j] = self.flux.solve(&w_l, &w_r, axis, &gas);
            }
        });
    }
}

/// Apply `f` to rows `rows` of a row-major buffer.
///
/// Rows are independent, so the parallel path gives bitwise-identical results.
pub(crate) fn for_each_row<T, F>(buffer: &mut [T], stride: usize, rows: Range<usize>, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        buffer
            .par_chunks_mut(stride)
            .enumerate()
            .filter(|(i, _)| rows.contains(i))
            .for_each(|(i, row)| f(i, row));
    }

    #[cfg(not(feature = "parallel"))]
    for (i, row) in buffer.chunks_mut(stride).enumerate() {
        if rows.contains(&i) {
            f(i, row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{BoundaryConditionApplier, BoundaryPolicy};
    use crate::solver::{GridConfig, InitialCondition, PrimitiveState2D};

    const TOL: f64 = 1e-12;

    fn filled_grid(config: &GridConfig) -> GridState {
        let mut grid = GridState::new(config).unwrap();
        BoundaryConditionApplier::new(&config.boundary).apply(&mut grid);
        grid
    }

    #[test]
    fn test_buffer_shapes() {
        let fluxes = FaceFluxes::new(8);
        assert_eq!(fluxes.shape(Axis::X), (13, 14));
        assert_eq!(fluxes.shape(Axis::Y), (14, 13));
        assert_eq!(fluxes.face_rows(Axis::X), 2..11);
        assert_eq!(fluxes.face_cols(Axis::X), 3..11);
        assert_eq!(fluxes.face_rows(Axis::Y), 3..11);
        assert_eq!(fluxes.face_cols(Axis::Y), 2..11);
    }

    #[test]
    fn test_uniform_flow_gives_physical_flux() {
        let w = PrimitiveState2D::new(1.0, 0.3, -0.2, 1.0);
        let config = GridConfig::new(6)
            .with_boundary(BoundaryPolicy::Transmissive)
            .with_initial_condition(InitialCondition::Uniform(w));
        let grid = filled_grid(&config);
        let mut fluxes = FaceFluxes::new(6);
        FluxAccumulator::default().accumulate(&grid, &mut fluxes);

        let gas = *grid.gas();
        let fx = gas.flux(&w, Axis::X);
        let fy = gas.flux(&w, Axis::Y);
        for i in fluxes.face_rows(Axis::X) {
            for j in fluxes.face_cols(Axis::X) {
                assert!((fluxes.x(i, j) - fx).max_abs() < TOL, "x-face ({}, {})", i, j);
            }
        }
        for i in fluxes.face_rows(Axis::Y) {
            for j in fluxes.face_cols(Axis::Y) {
                assert!((fluxes.y(i, j) - fy).max_abs() < TOL, "y-face ({}, {})", i, j);
            }
        }
        // Faces that bound no interior cell are not touched.
        assert_eq!(fluxes.x(0, 4), EulerState2D::zero());
    }

    #[test]
    fn test_reflective_walls_block_mass() {
        let config = GridConfig::new(12);
        let grid = filled_grid(&config);
        let mut fluxes = FaceFluxes::new(12);
        FluxAccumulator::default().accumulate(&grid, &mut fluxes);

        for j in fluxes.face_cols(Axis::X) {
            assert!(fluxes.x(2, j).rho.abs() < 1e-14, "west wall leaks at j={}", j);
            assert!(fluxes.x(14, j).rho.abs() < 1e-14, "east wall leaks at j={}", j);
        }
        for i in fluxes.face_rows(Axis::Y) {
            assert!(fluxes.y(i, 2).rho.abs() < 1e-14);
            assert!(fluxes.y(i, 14).rho.abs() < 1e-14);
        }
    }
}
