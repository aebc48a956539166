//! 2D Euler cell state types.
//!
//! Conserved variables (ρ, ρu, ρv, E) are what the finite-volume update
//! advances; primitive variables (ρ, u, v, p) are what the reconstruction
//! and the Riemann solvers work with.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::types::Axis;

/// Conserved state (ρ, ρu, ρv, E).
///
/// Also used for numerical fluxes, which carry the same four components
/// (mass, x-momentum, y-momentum, energy).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EulerState2D {
    /// Mass density ρ
    pub rho: f64,
    /// x-momentum ρu
    pub rho_u: f64,
    /// y-momentum ρv
    pub rho_v: f64,
    /// Total energy density E = p/(γ-1) + ρ(u² + v²)/2
    pub energy: f64,
}

impl EulerState2D {
    /// Create a new conserved state.
    #[inline(always)]
    pub fn new(rho: f64, rho_u: f64, rho_v: f64, energy: f64) -> Self {
        Self {
            rho,
            rho_u,
            rho_v,
            energy,
        }
    }

    /// Create a zero state.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Momentum component along `axis`.
    #[inline(always)]
    pub fn momentum(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.rho_u,
            Axis::Y => self.rho_v,
        }
    }

    /// Exchange the two momentum components.
    ///
    /// Maps a y-face state into the normal/tangential frame of the 1D
    /// Riemann solvers and back.
    #[inline(always)]
    pub fn swap_momentum(self) -> Self {
        Self {
            rho: self.rho,
            rho_u: self.rho_v,
            rho_v: self.rho_u,
            energy: self.energy,
        }
    }

    /// Negate the momentum component along `axis`, as a wall would.
    #[inline(always)]
    pub fn reflect(self, axis: Axis) -> Self {
        match axis {
            Axis::X => Self {
                rho_u: -self.rho_u,
                ..self
            },
            Axis::Y => Self {
                rho_v: -self.rho_v,
                ..self
            },
        }
    }

    /// Convert to array representation [ρ, ρu, ρv, E].
    #[inline(always)]
    pub fn to_array(&self) -> [f64; 4] {
        [self.rho, self.rho_u, self.rho_v, self.energy]
    }

    /// Whether all four components are finite.
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|x| x.is_finite())
    }

    /// Largest absolute component.
    pub fn max_abs(&self) -> f64 {
        self.to_array().iter().fold(0.0_f64, |m, x| m.max(x.abs()))
    }
}

impl Add for EulerState2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            rho: self.rho + other.rho,
            rho_u: self.rho_u + other.rho_u,
            rho_v: self.rho_v + other.rho_v,
            energy: self.energy + other.energy,
        }
    }
}

impl Sub for EulerState2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            rho: self.rho - other.rho,
            rho_u: self.rho_u - other.rho_u,
            rho_v: self.rho_v - other.rho_v,
            energy: self.energy - other.energy,
        }
    }
}

impl Mul<f64> for EulerState2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            rho: self.rho * scalar,
            rho_u: self.rho_u * scalar,
            rho_v: self.rho_v * scalar,
            energy: self.energy * scalar,
        }
    }
}

impl Mul<EulerState2D> for f64 {
    type Output = EulerState2D;

    fn mul(self, state: EulerState2D) -> EulerState2D {
        state * self
    }
}

impl Neg for EulerState2D {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

/// Primitive state (ρ, u, v, p).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveState2D {
    /// Density ρ (> 0)
    pub rho: f64,
    /// x-velocity
    pub u: f64,
    /// y-velocity
    pub v: f64,
    /// Pressure p (> 0)
    pub p: f64,
}

impl PrimitiveState2D {
    /// Create a new primitive state.
    #[inline(always)]
    pub fn new(rho: f64, u: f64, v: f64, p: f64) -> Self {
        Self { rho, u, v, p }
    }

    /// Gas at rest.
    #[inline(always)]
    pub fn at_rest(rho: f64, p: f64) -> Self {
        Self::new(rho, 0.0, 0.0, p)
    }

    /// Velocity component along `axis`.
    #[inline(always)]
    pub fn velocity(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.u,
            Axis::Y => self.v,
        }
    }

    /// Exchange u and v (normal/tangential frame for y-faces).
    #[inline(always)]
    pub fn swap_velocity(self) -> Self {
        Self {
            rho: self.rho,
            u: self.v,
            v: self.u,
            p: self.p,
        }
    }

    /// Negate the velocity component along `axis`.
    #[inline(always)]
    pub fn reflect(self, axis: Axis) -> Self {
        match axis {
            Axis::X => Self { u: -self.u, ..self },
            Axis::Y => Self { v: -self.v, ..self },
        }
    }

    /// Speed |(u, v)|.
    #[inline]
    pub fn speed(&self) -> f64 {
        (self.u * self.u + self.v * self.v).sqrt()
    }

    /// Component-wise difference `self - other`.
    #[inline(always)]
    pub fn delta(&self, other: &Self) -> Self {
        Self::new(
            self.rho - other.rho,
            self.u - other.u,
            self.v - other.v,
            self.p - other.p,
        )
    }

    /// `self + factor * slope`, component-wise.
    #[inline(always)]
    pub fn extrapolate(&self, slope: &Self, factor: f64) -> Self {
        Self::new(
            self.rho + factor * slope.rho,
            self.u + factor * slope.u,
            self.v + factor * slope.v,
            self.p + factor * slope.p,
        )
    }

    /// Whether density and pressure are both strictly positive and finite.
    pub fn is_physical(&self) -> bool {
        self.rho.is_finite()
            && self.u.is_finite()
            && self.v.is_finite()
            && self.p.is_finite()
            && self.rho > 0.0
            && self.p > 0.0
    }
}
