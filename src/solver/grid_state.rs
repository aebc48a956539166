//! Cell-centred grid storage with a ghost margin.
//!
//! The unit square is divided into `n × n` cells of width `dx = 1/n`, stored
//! with [`GHOST_WIDTH`] extra layers on every side. Interior cells occupy
//! `[GHOST_WIDTH, n + GHOST_WIDTH)` along each axis; the cell `(i, j)` lives
//! at flat index `i * (n + 6) + j`, so `i` (x) is the slow index.
//!
//! Both the primitive and the conserved view are stored. They agree right
//! after either conversion runs and diverge while the integrator updates
//! the conserved view.

use std::ops::Range;

use crate::equations::Euler2D;
use crate::error::Result;
use crate::solver::{EulerState2D, GridConfig, InitialCondition, PrimitiveState2D};

/// Ghost layers on each side (enough for a 4-cell MUSCL face stencil).
pub const GHOST_WIDTH: usize = 3;

/// Primitive and conserved cell state over the padded grid.
#[derive(Clone, Debug)]
pub struct GridState {
    n: usize,
    stride: usize,
    dx: f64,
    gas: Euler2D,
    primitive: Vec<PrimitiveState2D>,
    conserved: Vec<EulerState2D>,
}

impl GridState {
    /// Allocate a grid and seed it with the configured initial condition.
    ///
    /// Ghost cells hold zeros until a boundary fill runs.
    pub fn new(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        let stride = config.n + 2 * GHOST_WIDTH;
        let mut grid = Self {
            n: config.n,
            stride,
            dx: config.dx(),
            gas: config.gas(),
            primitive: vec![PrimitiveState2D::default(); stride * stride],
            conserved: vec![EulerState2D::zero(); stride * stride],
        };
        grid.initialize(&config.initial_condition);
        Ok(grid)
    }

    /// Overwrite every cell with `initial` and sync the conserved view.
    ///
    /// Reuses the existing buffers.
    pub fn initialize(&mut self, initial: &InitialCondition) {
        self.primitive.fill(PrimitiveState2D::default());
        for i in self.interior() {
            for j in self.interior() {
                let (x, y) = self.cell_center(i, j);
                let idx = self.index(i, j);
                self.primitive[idx] = initial.state_at(x, y);
            }
        }
        self.primitive_to_conservative();
    }

    /// Interior cells per side.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Padded cells per side, `n + 2·GHOST_WIDTH`.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Cell width.
    #[inline]
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Equation of state.
    #[inline]
    pub fn gas(&self) -> &Euler2D {
        &self.gas
    }

    /// Index range of interior cells along either axis.
    #[inline]
    pub fn interior(&self) -> Range<usize> {
        GHOST_WIDTH..self.n + GHOST_WIDTH
    }

    /// Flat index of padded cell `(i, j)`.
    #[inline(always)]
    pub fn index(&self, i: usize, j: usize) -> usize {
        i * self.stride + j
    }

    /// Physical centre of padded cell `(i, j)`; ghost cells lie outside `[0, 1]`.
    #[inline]
    pub fn cell_center(&self, i: usize, j: usize) -> (f64, f64) {
        let offset = GHOST_WIDTH as f64 - 0.5;
        (
            (i as f64 - offset) * self.dx,
            (j as f64 - offset) * self.dx,
        )
    }

    /// Primitive state of cell `(i, j)`.
    #[inline(always)]
    pub fn primitive(&self, i: usize, j: usize) -> PrimitiveState2D {
        self.primitive[self.index(i, j)]
    }

    /// Conserved state of cell `(i, j)`.
    #[inline(always)]
    pub fn conserved(&self, i: usize, j: usize) -> EulerState2D {
        self.conserved[self.index(i, j)]
    }

    /// Overwrite the primitive state of cell `(i, j)`.
    #[inline]
    pub fn set_primitive(&mut self, i: usize, j: usize, w: PrimitiveState2D) {
        let idx = self.index(i, j);
        self.primitive[idx] = w;
    }

    /// Overwrite the conserved state of cell `(i, j)`.
    #[inline]
    pub fn set_conserved(&mut self, i: usize, j: usize, q: EulerState2D) {
        let idx = self.index(i, j);
        self.conserved[idx] = q;
    }

    /// Primitive view, padded and row-major in `i`.
    #[inline]
    pub fn primitives(&self) -> &[PrimitiveState2D] {
        &self.primitive
    }

    /// Conserved view, padded and row-major in `i`.
    #[inline]
    pub fn conserved_cells(&self) -> &[EulerState2D] {
        &self.conserved
    }

    /// Mutable conserved view for the time integrator.
    #[inline]
    pub fn conserved_cells_mut(&mut self) -> &mut [EulerState2D] {
        &mut self.conserved
    }

    /// Conserved states of interior cells, x-major.
    pub fn interior_conserved(&self) -> impl Iterator<Item = &EulerState2D> + '_ {
        self.interior().flat_map(move |i| {
            let start = self.index(i, GHOST_WIDTH);
            self.conserved[start..start + self.n].iter()
        })
    }

    /// Primitive states of interior cells, x-major.
    pub fn interior_primitives(&self) -> impl Iterator<Item = &PrimitiveState2D> + '_ {
        self.interior().flat_map(move |i| {
            let start = self.index(i, GHOST_WIDTH);
            self.primitive[start..start + self.n].iter()
        })
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Derive conserved variables from primitives in every cell, ghosts included.
    pub fn primitive_to_conservative(&mut self) {
        let gas = self.gas;

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.conserved
                .par_iter_mut()
                .zip(self.primitive.par_iter())
                .for_each(|(q, w)| *q = gas.to_conserved(w));
        }

        #[cfg(not(feature = "parallel"))]
        for (q, w) in self.conserved.iter_mut().zip(&self.primitive) {
            *q = gas.to_conserved(w);
        }
    }

    /// Derive primitives from conserved variables in every cell, ghosts included.
    ///
    /// Cells at or below the density floor get zero velocity and floor
    /// pressure instead of a division by the density.
    pub fn conservative_to_primitive(&mut self) {
        let gas = self.gas;

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.primitive
                .par_iter_mut()
                .zip(self.conserved.par_iter())
                .for_each(|(w, q)| *w = gas.to_primitive(q));
        }

        #[cfg(not(feature = "parallel"))]
        for (w, q) in self.primitive.iter_mut().zip(&self.conserved) {
            *w = gas.to_primitive(q);
        }
    }

    // =========================================================================
    // Field Extraction
    // =========================================================================

    /// Interior field `field[i][j]` (x-major) of a primitive quantity, as `f32`.
    pub fn interior_field<F>(&self, quantity: F) -> Vec<Vec<f32>>
    where
        F: Fn(&PrimitiveState2D) -> f64,
    {
        self.interior()
            .map(|i| {
                let start = self.index(i, GHOST_WIDTH);
                self.primitive[start..start + self.n]
                    .iter()
                    .map(|w| quantity(w) as f32)
                    .collect()
            })
            .collect()
    }

    /// Interior density.
    pub fn density_field(&self) -> Vec<Vec<f32>> {
        self.interior_field(|w| w.rho)
    }

    /// Interior velocity components `(u, v)`.
    pub fn velocity_field(&self) -> (Vec<Vec<f32>>, Vec<Vec<f32>>) {
        (self.interior_field(|w| w.u), self.interior_field(|w| w.v))
    }

    /// Interior pressure.
    pub fn pressure_field(&self) -> Vec<Vec<f32>> {
        self.interior_field(|w| w.p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::PRESSURE_FLOOR;

    const TOL: f64 = 1e-12;

    fn small_grid(n: usize) -> GridState {
        GridState::new(&GridConfig::new(n)).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let grid = small_grid(10);
        assert_eq!(grid.stride(), 16);
        assert_eq!(grid.primitives().len(), 256);
        assert_eq!(grid.interior(), 3..13);
        assert_eq!(grid.index(1, 2), 18);
        assert_eq!(grid.interior_conserved().count(), 100);
    }

    #[test]
    fn test_cell_centers() {
        let grid = small_grid(4);
        let (x, y) = grid.cell_center(3, 6);
        assert!((x - 0.125).abs() < TOL);
        assert!((y - 0.875).abs() < TOL);
    }

    #[test]
    fn test_vortex_seeding() {
        let grid = small_grid(20);
        // Centre cells sit inside the core.
        let core = grid.primitive(12, 12);
        assert_eq!(core.rho, 2.0);
        assert_eq!(core.p, 0.5);
        // Corner cell is ambient and at rest.
        let corner = grid.primitive(3, 3);
        assert_eq!(corner, PrimitiveState2D::at_rest(1.0, 1.0));
        // Conserved view is consistent.
        let q = grid.conserved(12, 12);
        assert!((q.rho - 2.0).abs() < TOL);
        assert!((q.rho_u - 2.0 * core.u).abs() < TOL);
    }

    #[test]
    fn test_round_trip() {
        let mut grid = small_grid(16);
        let before: Vec<_> = grid.primitives().to_vec();
        grid.primitive_to_conservative();
        grid.conservative_to_primitive();
        for (idx, (a, b)) in before.iter().zip(grid.primitives()).enumerate() {
            if a.rho <= 0.0 {
                continue; // unfilled ghost
            }
            assert!((a.rho - b.rho).abs() < TOL, "rho mismatch at {}", idx);
            assert!((a.u - b.u).abs() < TOL, "u mismatch at {}", idx);
            assert!((a.v - b.v).abs() < TOL, "v mismatch at {}", idx);
            assert!((a.p - b.p).abs() < TOL, "p mismatch at {}", idx);
        }
    }

    #[test]
    fn test_density_floor_clamp() {
        let mut grid = small_grid(4);
        grid.set_conserved(4, 4, EulerState2D::new(-1e-3, 5.0, -5.0, 1.0));
        grid.conservative_to_primitive();
        let w = grid.primitive(4, 4);
        assert_eq!(w.u, 0.0);
        assert_eq!(w.v, 0.0);
        assert_eq!(w.p, PRESSURE_FLOOR);
    }

    #[test]
    fn test_field_orientation() {
        let mut grid = small_grid(3);
        grid.set_primitive(3, 5, PrimitiveState2D::new(7.0, 1.0, 2.0, 3.0));
        let rho = grid.density_field();
        assert_eq!(rho.len(), 3);
        assert!(rho.iter().all(|row| row.len() == 3));
        // First index is x, second is y.
        assert_eq!(rho[0][2], 7.0);
        let (u, v) = grid.velocity_field();
        assert_eq!(u[0][2], 1.0);
        assert_eq!(v[0][2], 2.0);
        assert_eq!(grid.pressure_field()[0][2], 3.0);
    }

    #[test]
    fn test_initialize_reuses_buffers() {
        let mut grid = small_grid(8);
        let ptr = grid.conserved_cells().as_ptr();
        grid.initialize(&InitialCondition::Uniform(PrimitiveState2D::at_rest(1.0, 2.0)));
        assert_eq!(grid.conserved_cells().as_ptr(), ptr);
        assert!(grid.interior_primitives().all(|w| w.p == 2.0));
    }
}
