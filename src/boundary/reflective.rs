//! Reflective (wall) boundary condition for the Euler equations.
//!
//! A reflective boundary represents a slip wall. Ghost cells mirror the
//! interior across the boundary face with the normal momentum negated:
//!
//! - ρ_ghost = ρ_mirror, E_ghost = E_mirror
//! - (ρu·n)_ghost = -(ρu·n)_mirror
//! - tangential momentum unchanged
//!
//! With a mirrored reconstruction stencil the contact speed at the wall face
//! is exactly zero, so no mass crosses the boundary.

use super::GhostCellRule;
use crate::solver::EulerState2D;
use crate::types::Axis;

/// Reflective (slip wall) ghost-cell rule.
///
/// Ghost layer `d` (0 = adjacent to the face) mirrors interior layer `d`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reflective;

impl GhostCellRule for Reflective {
    #[inline]
    fn source_layer(&self, layer: usize) -> usize {
        layer
    }

    #[inline]
    fn ghost_conserved(&self, interior: &EulerState2D, axis: Axis) -> EulerState2D {
        interior.reflect(axis)
    }

    fn name(&self) -> &'static str {
        "reflective"
    }

    fn allows_outflow(&self) -> bool {
        false
    }
}
