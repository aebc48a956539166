//! Trait-based Riemann solver abstraction.
//!
//! Every solver is formulated in the face-normal frame: `u` is the velocity
//! normal to the interface and `v` the tangential one. [`NumericalFlux::solve`]
//! is the single direction-parameterized entry point used by the flux
//! accumulator; for y-faces it swaps `u`/`v` on the way in and swaps the
//! momentum components back on the way out.
//!
//! # Example
//! ```
//! use euler_fv::equations::Euler2D;
//! use euler_fv::flux::{HLLCFlux, NumericalFlux, StandardFlux};
//! use euler_fv::solver::PrimitiveState2D;
//! use euler_fv::types::Axis;
//!
//! let gas = Euler2D::default();
//! let w_l = PrimitiveState2D::new(1.0, 0.0, 0.0, 1.0);
//! let w_r = PrimitiveState2D::new(0.125, 0.0, 0.0, 0.1);
//!
//! // Using concrete type
//! let flux_x = HLLCFlux.solve(&w_l, &w_r, Axis::X, &gas);
//!
//! // Using trait object
//! let solver: &dyn NumericalFlux = &StandardFlux::Hll;
//! let flux_y = solver.solve(&w_l, &w_r, Axis::Y, &gas);
//! assert!(flux_x.rho > 0.0 && flux_y.rho > 0.0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::equations::Euler2D;
use crate::error::ConfigError;
use crate::solver::{EulerState2D, PrimitiveState2D};
use crate::types::Axis;

// =============================================================================
// Numerical Flux Trait
// =============================================================================

/// Approximate Riemann solver for the 2D Euler equations.
///
/// # Implementation Notes
///
/// - Fluxes must be consistent: F*(w, w) = F(w)
/// - `compute` must not allocate; it runs once per face per step
pub trait NumericalFlux: Send + Sync {
    /// Numerical flux in the face-normal frame.
    ///
    /// # Arguments
    /// * `w_l` - Left primitive state `(ρ, u_normal, v_tangential, p)`
    /// * `w_r` - Right primitive state
    /// * `gas` - Equation of state
    ///
    /// # Returns
    /// (mass, normal momentum, tangential momentum, energy) flux.
    fn compute(&self, w_l: &PrimitiveState2D, w_r: &PrimitiveState2D, gas: &Euler2D)
    -> EulerState2D;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Whether the contact and shear waves are resolved exactly.
    fn resolves_contact(&self) -> bool {
        false
    }

    /// Flux through a face normal to `axis`, in grid (x, y) components.
    #[inline]
    fn solve(
        &self,
        w_l: &PrimitiveState2D,
        w_r: &PrimitiveState2D,
        axis: Axis,
        gas: &Euler2D,
    ) -> EulerState2D {
        match axis {
            Axis::X => self.compute(w_l, w_r, gas),
            Axis::Y => self
                .compute(&w_l.swap_velocity(), &w_r.swap_velocity(), gas)
                .swap_momentum(),
        }
    }
}

// =============================================================================
// Concrete Flux Implementations
// =============================================================================

/// HLLC solver (three waves, exact on isolated contacts).
#[derive(Clone, Copy, Debug, Default)]
pub struct HLLCFlux;

impl NumericalFlux for HLLCFlux {
    #[inline]
    fn compute(
        &self,
        w_l: &PrimitiveState2D,
        w_r: &PrimitiveState2D,
        gas: &Euler2D,
    ) -> EulerState2D {
        super::hllc_flux_euler(w_l, w_r, gas)
    }

    fn name(&self) -> &'static str {
        "hllc"
    }

    fn resolves_contact(&self) -> bool {
        true
    }
}

/// HLL solver (two waves, smears contacts).
#[derive(Clone, Copy, Debug, Default)]
pub struct HLLFlux;

impl NumericalFlux for HLLFlux {
    #[inline]
    fn compute(
        &self,
        w_l: &PrimitiveState2D,
        w_r: &PrimitiveState2D,
        gas: &Euler2D,
    ) -> EulerState2D {
        super::hll_flux_euler(w_l, w_r, gas)
    }

    fn name(&self) -> &'static str {
        "hll"
    }
}

/// Rusanov (local Lax-Friedrichs) flux.
#[derive(Clone, Copy, Debug, Default)]
pub struct RusanovFlux;

impl NumericalFlux for RusanovFlux {
    #[inline]
    fn compute(
        &self,
        w_l: &PrimitiveState2D,
        w_r: &PrimitiveState2D,
        gas: &Euler2D,
    ) -> EulerState2D {
        super::rusanov_flux_euler(w_l, w_r, gas)
    }

    fn name(&self) -> &'static str {
        "rusanov"
    }
}

// =============================================================================
// Standard Flux Enum (Zero-Cost Dispatch)
// =============================================================================

/// Enum wrapper for built-in solvers.
///
/// Matching on the enum inside the face loop is as fast as calling the
/// flux function directly; this is what the flux accumulator stores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardFlux {
    /// HLLC approximate Riemann solver
    #[default]
    Hllc,
    /// HLL solver (more diffusive on contacts)
    Hll,
    /// Rusanov/local Lax-Friedrichs (simple, robust, diffusive)
    Rusanov,
}

impl StandardFlux {
    /// All built-in solvers.
    pub const ALL: [StandardFlux; 3] = [StandardFlux::Hllc, StandardFlux::Hll, StandardFlux::Rusanov];
}

impl NumericalFlux for StandardFlux {
    #[inline]
    fn compute(
        &self,
        w_l: &PrimitiveState2D,
        w_r: &PrimitiveState2D,
        gas: &Euler2D,
    ) -> EulerState2D {
        match self {
            StandardFlux::Hllc => super::hllc_flux_euler(w_l, w_r, gas),
            StandardFlux::Hll => super::hll_flux_euler(w_l, w_r, gas),
            StandardFlux::Rusanov => super::rusanov_flux_euler(w_l, w_r, gas),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            StandardFlux::Hllc => "hllc",
            StandardFlux::Hll => "hll",
            StandardFlux::Rusanov => "rusanov",
        }
    }

    fn resolves_contact(&self) -> bool {
        matches!(self, StandardFlux::Hllc)
    }
}

impl fmt::Display for StandardFlux {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StandardFlux {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hllc" => Ok(StandardFlux::Hllc),
            "hll" => Ok(StandardFlux::Hll),
            "rusanov" | "llf" => Ok(StandardFlux::Rusanov),
            _ => Err(ConfigError::unknown("riemann solver", s, "hllc, hll, rusanov")),
        }
    }
}

// =============================================================================
// Boxed Flux (Runtime Polymorphism)
// =============================================================================

/// Type alias for boxed flux (runtime polymorphism).
pub type BoxedFlux = Box<dyn NumericalFlux>;

/// Create a boxed flux from a flux type enum.
pub fn create_flux(flux_type: StandardFlux) -> BoxedFlux {
    match flux_type {
        StandardFlux::Hllc => Box::new(HLLCFlux),
        StandardFlux::Hll => Box::new(HLLFlux),
        StandardFlux::Rusanov => Box::new(RusanovFlux),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn test_state() -> PrimitiveState2D {
        PrimitiveState2D::new(1.2, 0.4, -0.7, 0.9)
    }

    #[test]
    fn test_flux_trait_consistency() {
        let gas = Euler2D::default();
        let w = test_state();
        for axis in Axis::ALL {
            let exact = gas.flux(&w, axis);
            for solver in StandardFlux::ALL {
                let flux = solver.solve(&w, &w, axis, &gas);
                assert!(
                    (flux - exact).max_abs() < TOL,
                    "{} inconsistent along {}: {:?} vs {:?}",
                    solver,
                    axis,
                    flux,
                    exact
                );
            }
        }
    }

    #[test]
    fn test_y_face_swaps_back() {
        // A pure y-flow must push mass through y-faces only, with the
        // momentum flux landing in the v component.
        let gas = Euler2D::default();
        let w = PrimitiveState2D::new(1.0, 0.0, 0.5, 1.0);
        let fy = HLLCFlux.solve(&w, &w, Axis::Y, &gas);
        assert!((fy.rho - 0.5).abs() < TOL);
        assert!(fy.rho_u.abs() < TOL);
        assert!((fy.rho_v - (0.25 + 1.0)).abs() < TOL);

        let fx = HLLCFlux.solve(&w, &w, Axis::X, &gas);
        assert!(fx.rho.abs() < TOL);
        assert!((fx.rho_u - 1.0).abs() < TOL);
    }

    #[test]
    fn test_standard_flux_enum() {
        let gas = Euler2D::default();
        let w_l = test_state();
        let w_r = PrimitiveState2D::new(0.3, -0.1, 0.2, 0.2);

        let concrete = HLLCFlux.compute(&w_l, &w_r, &gas);
        let via_enum = StandardFlux::Hllc.compute(&w_l, &w_r, &gas);
        assert!((concrete - via_enum).max_abs() < TOL);

        let boxed = create_flux(StandardFlux::Rusanov);
        let direct = RusanovFlux.compute(&w_l, &w_r, &gas);
        assert!((boxed.compute(&w_l, &w_r, &gas) - direct).max_abs() < TOL);
    }

    #[test]
    fn test_flux_names() {
        assert_eq!(HLLCFlux.name(), "hllc");
        assert_eq!(HLLFlux.name(), "hll");
        assert_eq!(RusanovFlux.name(), "rusanov");
        assert_eq!(StandardFlux::Hll.to_string(), "hll");
        assert!(HLLCFlux.resolves_contact());
        assert!(!StandardFlux::Rusanov.resolves_contact());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("HLLC".parse::<StandardFlux>(), Ok(StandardFlux::Hllc));
        assert_eq!(" llf ".parse::<StandardFlux>(), Ok(StandardFlux::Rusanov));
        assert!(matches!(
            "roe".parse::<StandardFlux>(),
            Err(ConfigError::UnknownOption { .. })
        ));
    }
}
