//! Transmissive (zero-gradient) boundary condition.
//!
//! Every ghost layer copies the interior cell adjacent to the boundary, so
//! waves leave the domain with only weak reflections.

use super::GhostCellRule;
use crate::solver::EulerState2D;
use crate::types::Axis;

/// Zero-gradient extrapolation ghost-cell rule.
#[derive(Clone, Copy, Debug, Default)]
pub struct Transmissive;

impl GhostCellRule for Transmissive {
    #[inline]
    fn source_layer(&self, _layer: usize) -> usize {
        0
    }

    #[inline]
    fn ghost_conserved(&self, interior: &EulerState2D, _axis: Axis) -> EulerState2D {
        *interior
    }

    fn name(&self) -> &'static str {
        "transmissive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transmissive_copies_boundary_cell() {
        for layer in 0..3 {
            assert_eq!(Transmissive.source_layer(layer), 0);
        }
        let q = EulerState2D::new(0.9, 0.1, 0.2, 3.0);
        assert_eq!(Transmissive.ghost_conserved(&q, Axis::X), q);
        assert_eq!(Transmissive.ghost_conserved(&q, Axis::Y), q);
        assert!(Transmissive.allows_outflow());
    }
}
