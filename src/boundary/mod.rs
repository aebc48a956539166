//! Boundary conditions for the Euler equations.
//!
//! Boundaries are encoded by filling the ghost margin of [`GridState`]
//! (three layers on every side) before fluxes are evaluated, so the interior
//! update never special-cases boundary cells.
//!
//! # Available Boundary Conditions
//!
//! | Policy | Rule | Ghost layer `d` copies |
//! |--------|------|------------------------|
//! | [`BoundaryPolicy::Transmissive`] | zero-gradient extrapolation | the boundary cell |
//! | [`BoundaryPolicy::Reflective`] | slip wall, normal momentum negated | the mirror cell `d` |
//!
//! # Fill Order
//!
//! [`BoundaryConditionApplier::apply`] fills west/east ghosts over the
//! interior rows first, then south/north ghosts over every column. Corner
//! ghosts therefore come from the second pass. No reconstruction stencil
//! reads a corner.
//!
//! ```
//! use euler_fv::boundary::{BoundaryConditionApplier, BoundaryPolicy};
//! use euler_fv::types::{Side, SideBoundaries};
//!
//! let policies = SideBoundaries::uniform(BoundaryPolicy::Reflective)
//!     .with(Side::East, BoundaryPolicy::Transmissive);
//! let applier = BoundaryConditionApplier::new(&policies);
//! assert_eq!(applier.policy(Side::East), BoundaryPolicy::Transmissive);
//! ```

mod reflective;
mod transmissive;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use reflective::Reflective;
pub use transmissive::Transmissive;

use crate::error::ConfigError;
use crate::solver::{EulerState2D, GHOST_WIDTH, GridState};
use crate::types::{Axis, Side, SideBoundaries};

// =============================================================================
// Ghost Cell Rule Trait
// =============================================================================

/// Rule for deriving a ghost cell from the interior.
///
/// Implementations describe a single boundary side; the applier handles
/// indexing, orientation and the order in which sides are filled.
pub trait GhostCellRule: Send + Sync {
    /// Interior layer (0 = adjacent to the face) that ghost layer `layer`
    /// is derived from.
    fn source_layer(&self, layer: usize) -> usize;

    /// Conserved ghost state from the source interior cell.
    ///
    /// `axis` is the boundary normal: x for west/east, y for south/north.
    fn ghost_conserved(&self, interior: &EulerState2D, axis: Axis) -> EulerState2D;

    /// Name of this boundary condition for logging.
    fn name(&self) -> &'static str;

    /// Check if this BC lets mass leave the domain.
    fn allows_outflow(&self) -> bool {
        true
    }
}

/// Type alias for boxed ghost-cell rules.
pub type BoxedGhostRule = Box<dyn GhostCellRule>;

// =============================================================================
// Boundary Policy
// =============================================================================

/// Selectable boundary policy for one side of the domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Zero-gradient outflow
    Transmissive,
    /// Slip wall
    #[default]
    Reflective,
}

impl BoundaryPolicy {
    /// Name used in configuration files and logs.
    pub fn name(self) -> &'static str {
        match self {
            BoundaryPolicy::Transmissive => "transmissive",
            BoundaryPolicy::Reflective => "reflective",
        }
    }
}

impl fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundaryPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transmissive" | "outflow" => Ok(BoundaryPolicy::Transmissive),
            "reflective" | "wall" => Ok(BoundaryPolicy::Reflective),
            _ => Err(ConfigError::unknown(
                "boundary policy",
                s,
                "transmissive, reflective",
            )),
        }
    }
}

/// Create the ghost-cell rule for a policy.
pub fn create_ghost_rule(policy: BoundaryPolicy) -> BoxedGhostRule {
    match policy {
        BoundaryPolicy::Transmissive => Box::new(Transmissive),
        BoundaryPolicy::Reflective => Box::new(Reflective),
    }
}

// =============================================================================
// Boundary Condition Applier
// =============================================================================

/// Fills the ghost margin of a [`GridState`] from its interior.
///
/// Rules are resolved once at construction; [`apply`](Self::apply) never
/// re-inspects the configured policy inside its loops.
pub struct BoundaryConditionApplier {
    policies: SideBoundaries<BoundaryPolicy>,
    rules: SideBoundaries<BoxedGhostRule>,
}

impl BoundaryConditionApplier {
    /// Resolve per-side rules from policies.
    pub fn new(policies: &SideBoundaries<BoundaryPolicy>) -> Self {
        Self {
            policies: *policies,
            rules: policies.map(create_ghost_rule),
        }
    }

    /// Same policy on every side.
    pub fn uniform(policy: BoundaryPolicy) -> Self {
        Self::new(&SideBoundaries::uniform(policy))
    }

    /// Policy configured for `side`.
    pub fn policy(&self, side: Side) -> BoundaryPolicy {
        *self.policies.get(side)
    }

    /// All configured policies.
    pub fn policies(&self) -> &SideBoundaries<BoundaryPolicy> {
        &self.policies
    }

    /// Whether every side is a wall, i.e. total mass is conserved.
    pub fn is_closed(&self) -> bool {
        self.rules.iter().all(|(_, rule)| !rule.allows_outflow())
    }

    /// Fill all ghost cells of both the conserved and the primitive view.
    ///
    /// Reads only the conserved view; ghost primitives are converted from
    /// the filled conserved ghosts, so the primitive interior may be stale.
    pub fn apply(&self, grid: &mut GridState) {
        for side in [Side::West, Side::East, Side::South, Side::North] {
            self.apply_side(grid, side);
        }
    }

    /// Fill the three ghost layers beyond one side.
    ///
    /// West/east cover the interior rows only; south/north cover every
    /// column, so corner ghosts come from the second pass.
    fn apply_side(&self, grid: &mut GridState, side: Side) {
        let gas = *grid.gas();
        let g = GHOST_WIDTH;
        let hi = grid.n() + g;
        let rule = &**self.rules.get(side);
        let axis = side.axis();
        let along = match axis {
            Axis::X => grid.interior(),
            Axis::Y => 0..hi + g,
        };

        for t in along {
            for d in 0..g {
                let (ghost, source) = if side.is_low() {
                    (g - 1 - d, g + rule.source_layer(d))
                } else {
                    (hi + d, hi - 1 - rule.source_layer(d))
                };
                let ((gi, gj), (si, sj)) = match axis {
                    Axis::X => ((ghost, t), (source, t)),
                    Axis::Y => ((t, ghost), (t, source)),
                };
                let q = rule.ghost_conserved(&grid.conserved(si, sj), axis);
                grid.set_conserved(gi, gj, q);
                grid.set_primitive(gi, gj, gas.to_primitive(&q));
            }
        }
    }
}

impl fmt::Display for BoundaryConditionApplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules = &self.rules;
        let names = SideBoundaries::new(
            rules.south.name(),
            rules.east.name(),
            rules.north.name(),
            rules.west.name(),
        );
        write!(f, "{}", names)
    }
}

impl fmt::Debug for BoundaryConditionApplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundaryConditionApplier")
            .field("policies", &self.policies)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{GridConfig, PrimitiveState2D};

    const TOL: f64 = 1e-14;

    /// Grid whose interior encodes its own indices so ghost sources are traceable.
    fn tagged_grid(n: usize) -> GridState {
        let mut grid = GridState::new(&GridConfig::new(n)).unwrap();
        let gas = *grid.gas();
        for i in GHOST_WIDTH..n + GHOST_WIDTH {
            for j in GHOST_WIDTH..n + GHOST_WIDTH {
                let w = PrimitiveState2D::new(1.0 + i as f64, 0.1 * i as f64, 0.01 * j as f64, 1.0 + j as f64);
                grid.set_primitive(i, j, w);
                grid.set_conserved(i, j, gas.to_conserved(&w));
            }
        }
        grid
    }

    #[test]
    fn test_reflective_mirror_indices() {
        let n = 6;
        let mut grid = tagged_grid(n);
        BoundaryConditionApplier::uniform(BoundaryPolicy::Reflective).apply(&mut grid);

        let gas = *grid.gas();
        let j = 5;
        // West ghost k mirrors 5 - k
        for k in 0..3 {
            let ghost = grid.primitive(k, j);
            let src = gas.to_primitive(&grid.conserved(5 - k, j));
            assert_eq!(ghost.rho, src.rho);
            assert_eq!(ghost.u, -src.u);
            assert_eq!(ghost.v, src.v);
        }
        // East ghost k mirrors 2N + 5 - k
        for k in n + 3..n + 6 {
            let ghost = grid.conserved(k, j);
            let src = grid.conserved(2 * n + 5 - k, j);
            assert_eq!(ghost.rho, src.rho);
            assert_eq!(ghost.rho_u, -src.rho_u);
            assert_eq!(ghost.rho_v, src.rho_v);
        }
        // South ghost negates v
        let i = 4;
        for k in 0..3 {
            let ghost = grid.primitive(i, k);
            let src = gas.to_primitive(&grid.conserved(i, 5 - k));
            assert_eq!(ghost.p, src.p);
            assert_eq!(ghost.v, -src.v);
            assert_eq!(ghost.u, src.u);
        }
    }

    #[test]
    fn test_transmissive_copies_boundary_cell() {
        let n = 5;
        let mut grid = tagged_grid(n);
        BoundaryConditionApplier::uniform(BoundaryPolicy::Transmissive).apply(&mut grid);

        let gas = *grid.gas();
        for k in 0..3 {
            assert_eq!(grid.conserved(k, 4), grid.conserved(3, 4));
            assert_eq!(grid.conserved(n + 3 + k, 4), grid.conserved(n + 2, 4));
            assert_eq!(grid.primitive(6, k), gas.to_primitive(&grid.conserved(6, 3)));
            assert_eq!(
                grid.primitive(6, n + 3 + k),
                gas.to_primitive(&grid.conserved(6, n + 2))
            );
        }
    }

    #[test]
    fn test_ghost_views_consistent() {
        let n = 4;
        let mut grid = tagged_grid(n);
        let policies = SideBoundaries::new(
            BoundaryPolicy::Reflective,
            BoundaryPolicy::Transmissive,
            BoundaryPolicy::Reflective,
            BoundaryPolicy::Transmissive,
        );
        BoundaryConditionApplier::new(&policies).apply(&mut grid);

        let gas = *grid.gas();
        let size = n + 2 * GHOST_WIDTH;
        for i in 0..size {
            for j in 0..size {
                let from_conserved = gas.to_primitive(&grid.conserved(i, j));
                let stored = grid.primitive(i, j);
                assert!((from_conserved.rho - stored.rho).abs() < TOL);
                assert!((from_conserved.u - stored.u).abs() < TOL);
                assert!((from_conserved.v - stored.v).abs() < TOL);
                assert!((from_conserved.p - stored.p).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_ghost_primitives_ignore_stale_interior() {
        let n = 4;
        let mut grid = tagged_grid(n);
        // Primitive interior left behind a conserved update.
        for i in grid.interior() {
            for j in grid.interior() {
                grid.set_primitive(i, j, PrimitiveState2D::default());
            }
        }
        let policies = SideBoundaries::uniform(BoundaryPolicy::Reflective)
            .with(Side::West, BoundaryPolicy::Transmissive);
        BoundaryConditionApplier::new(&policies).apply(&mut grid);

        let gas = *grid.gas();
        let size = n + 2 * GHOST_WIDTH;
        for i in 0..size {
            for j in 0..size {
                let interior = grid.interior();
                if interior.contains(&i) && interior.contains(&j) {
                    continue;
                }
                let ghost = grid.primitive(i, j);
                assert_eq!(ghost, gas.to_primitive(&grid.conserved(i, j)), "ghost ({}, {})", i, j);
                assert!(ghost.rho > 1.0, "ghost ({}, {}) copied a stale state", i, j);
            }
        }
    }

    #[test]
    fn test_display_names_rules() {
        let applier = BoundaryConditionApplier::uniform(BoundaryPolicy::Transmissive);
        assert_eq!(applier.to_string(), "transmissive");
        let mixed = SideBoundaries::uniform(BoundaryPolicy::Reflective)
            .with(Side::East, BoundaryPolicy::Transmissive);
        assert_eq!(
            BoundaryConditionApplier::new(&mixed).to_string(),
            "S:reflective E:transmissive N:reflective W:reflective"
        );
    }

    #[test]
    fn test_closed_domain() {
        assert!(BoundaryConditionApplier::uniform(BoundaryPolicy::Reflective).is_closed());
        let open = SideBoundaries::uniform(BoundaryPolicy::Reflective)
            .with(Side::North, BoundaryPolicy::Transmissive);
        assert!(!BoundaryConditionApplier::new(&open).is_closed());
    }

    #[test]
    fn test_policy_parse_fails_fast() {
        assert_eq!("Reflective".parse::<BoundaryPolicy>(), Ok(BoundaryPolicy::Reflective));
        assert_eq!("transmissive".parse::<BoundaryPolicy>(), Ok(BoundaryPolicy::Transmissive));
        let err = "periodic".parse::<BoundaryPolicy>().unwrap_err();
        assert!(err.to_string().contains("periodic"));
        assert_eq!(BoundaryPolicy::default(), BoundaryPolicy::Reflective);
    }
}
