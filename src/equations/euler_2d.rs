//! 2D compressible Euler equations for an ideal gas.
//!
//! ∂ρ/∂t  + ∂(ρu)/∂x        + ∂(ρv)/∂y        = 0
//! ∂(ρu)/∂t + ∂(ρu² + p)/∂x + ∂(ρuv)/∂y       = 0
//! ∂(ρv)/∂t + ∂(ρuv)/∂x     + ∂(ρv² + p)/∂y   = 0
//! ∂E/∂t  + ∂(u(E + p))/∂x  + ∂(v(E + p))/∂y  = 0
//!
//! closed by the ideal-gas law E = p/(γ-1) + ρ(u² + v²)/2.
//!
//! # Flux formulation
//!
//! F(q) = [ρu, ρu² + p, ρuv, u(E + p)]ᵀ  (x-direction flux)
//! G(q) = [ρv, ρuv, ρv² + p, v(E + p)]ᵀ  (y-direction flux)

use serde::{Deserialize, Serialize};

use crate::solver::{EulerState2D, PrimitiveState2D};
use crate::types::Axis;

/// Adiabatic index of diatomic gas (air).
pub const GAMMA_AIR: f64 = 1.4;

/// Density at or below which the inverse conversion stops dividing by ρ.
pub const DENSITY_FLOOR: f64 = 1e-10;

/// Pressure assigned to cells whose density fell to the floor.
pub const PRESSURE_FLOOR: f64 = 1e-10;

/// Ideal-gas Euler equations with constant adiabatic index.
///
/// # Example
///
/// ```
/// use euler_fv::equations::Euler2D;
/// use euler_fv::solver::PrimitiveState2D;
///
/// let gas = Euler2D::new(1.4);
/// let w = PrimitiveState2D::new(1.0, 0.5, 0.0, 1.0);
/// let q = gas.to_conserved(&w);
/// assert!((q.energy - (1.0 / 0.4 + 0.125)).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Euler2D {
    /// Adiabatic index γ (> 1)
    pub gamma: f64,
}

impl Default for Euler2D {
    fn default() -> Self {
        Self::new(GAMMA_AIR)
    }
}

impl Euler2D {
    /// Create the equations for a gas with adiabatic index `gamma`.
    pub fn new(gamma: f64) -> Self {
        Self { gamma }
    }

    /// Total energy density E = p/(γ-1) + ρ(u² + v²)/2.
    #[inline(always)]
    pub fn total_energy(&self, w: &PrimitiveState2D) -> f64 {
        w.p / (self.gamma - 1.0) + 0.5 * w.rho * (w.u * w.u + w.v * w.v)
    }

    /// Primitive → conserved.
    #[inline(always)]
    pub fn to_conserved(&self, w: &PrimitiveState2D) -> EulerState2D {
        EulerState2D {
            rho: w.rho,
            rho_u: w.rho * w.u,
            rho_v: w.rho * w.v,
            energy: self.total_energy(w),
        }
    }

    /// Conserved → primitive.
    ///
    /// Cells with ρ ≤ [`DENSITY_FLOOR`] get zero velocity and pressure
    /// [`PRESSURE_FLOOR`] instead of a division by a vanishing density.
    /// The density itself is passed through unchanged.
    #[inline(always)]
    pub fn to_primitive(&self, q: &EulerState2D) -> PrimitiveState2D {
        if q.rho > DENSITY_FLOOR {
            let inv_rho = 1.0 / q.rho;
            PrimitiveState2D {
                rho: q.rho,
                u: q.rho_u * inv_rho,
                v: q.rho_v * inv_rho,
                p: (self.gamma - 1.0)
                    * (q.energy - 0.5 * (q.rho_u * q.rho_u + q.rho_v * q.rho_v) * inv_rho),
            }
        } else {
            PrimitiveState2D {
                rho: q.rho,
                u: 0.0,
                v: 0.0,
                p: PRESSURE_FLOOR,
            }
        }
    }

    /// Sound speed c = sqrt(γp/ρ).
    #[inline(always)]
    pub fn sound_speed(&self, w: &PrimitiveState2D) -> f64 {
        (self.gamma * w.p / w.rho).sqrt()
    }

    /// Specific total enthalpy H = (γp/(γ-1) + ρ(u² + v²)/2) / ρ.
    #[inline(always)]
    pub fn enthalpy(&self, w: &PrimitiveState2D) -> f64 {
        (w.p * self.gamma / (self.gamma - 1.0) + 0.5 * w.rho * (w.u * w.u + w.v * w.v)) / w.rho
    }

    /// Physical flux through a face whose normal velocity is `w.u`.
    ///
    /// This is the x-direction flux F(q); the Riemann solvers work in this
    /// frame for both axes.
    #[inline(always)]
    pub fn normal_flux(&self, w: &PrimitiveState2D) -> EulerState2D {
        let energy = self.total_energy(w);
        let mass = w.rho * w.u;
        EulerState2D {
            rho: mass,
            rho_u: mass * w.u + w.p,
            rho_v: mass * w.v,
            energy: w.u * (energy + w.p),
        }
    }

    /// Physical flux along `axis` in the physical (x, y) frame.
    pub fn flux(&self, w: &PrimitiveState2D, axis: Axis) -> EulerState2D {
        match axis {
            Axis::X => self.normal_flux(w),
            Axis::Y => self.normal_flux(&w.swap_velocity()).swap_momentum(),
        }
    }

    /// Largest characteristic speed max(|u|, |v|) + c.
    #[inline]
    pub fn max_wave_speed(&self, w: &PrimitiveState2D) -> f64 {
        w.u.abs().max(w.v.abs()) + self.sound_speed(w)
    }

    /// Mach number |u|/c.
    #[inline]
    pub fn mach_number(&self, w: &PrimitiveState2D) -> f64 {
        let c = self.sound_speed(w);
        if c > 0.0 { w.speed() / c } else { 0.0 }
    }
}
