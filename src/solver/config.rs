//! Engine configuration.
//!
//! [`GridConfig`] carries every parameter of the finite-volume engine: grid
//! resolution, CFL number, adiabatic index, boundary policies and the
//! numerical method choices. It deserializes from any serde format with
//! missing fields taking their defaults.
//!
//! ```
//! use euler_fv::boundary::BoundaryPolicy;
//! use euler_fv::solver::{GridConfig, TimeStepping};
//!
//! let config = GridConfig::new(128)
//!     .with_cfl(0.4)
//!     .with_boundary(BoundaryPolicy::Transmissive)
//!     .with_time_stepping(TimeStepping::Adaptive);
//! config.validate().unwrap();
//! assert!((config.dx() - 1.0 / 128.0).abs() < 1e-15);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::boundary::BoundaryPolicy;
use crate::equations::Euler2D;
use crate::error::{ConfigError, Result};
use crate::flux::StandardFlux;
use crate::solver::{PrimitiveState2D, SlopeLimiter};
use crate::types::{Side, SideBoundaries};

/// How the time step is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeStepping {
    /// `dt = cfl·dx/2`, fixed at construction.
    #[default]
    Fixed,
    /// `dt = cfl·dx / max(max(|u|, |v|) + c)`, recomputed every step.
    Adaptive,
}

impl fmt::Display for TimeStepping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeStepping::Fixed => f.write_str("fixed"),
            TimeStepping::Adaptive => f.write_str("adaptive"),
        }
    }
}

impl FromStr for TimeStepping {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(TimeStepping::Fixed),
            "adaptive" | "cfl" => Ok(TimeStepping::Adaptive),
            _ => Err(ConfigError::unknown("time stepping", s, "fixed, adaptive")),
        }
    }
}

/// Initial state seeded by construction and by `reset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialCondition {
    /// Dense swirling core of radius 0.3 centred in the domain.
    #[default]
    Vortex,
    /// The same state in every cell.
    Uniform(PrimitiveState2D),
}

impl InitialCondition {
    /// Radius of the vortex core.
    pub const VORTEX_RADIUS: f64 = 0.3;
    /// e-folding length of the swirl amplitude.
    pub const VORTEX_DECAY: f64 = 0.1;

    /// Primitive state at physical position `(x, y)`.
    pub fn state_at(&self, x: f64, y: f64) -> PrimitiveState2D {
        match self {
            InitialCondition::Vortex => {
                let (dx, dy) = (x - 0.5, y - 0.5);
                let r = (dx * dx + dy * dy).sqrt();
                if r < Self::VORTEX_RADIUS {
                    let amplitude = 2.0 * (-r / Self::VORTEX_DECAY).exp();
                    PrimitiveState2D::new(2.0, -amplitude * dy, amplitude * dx, 0.5)
                } else {
                    PrimitiveState2D::at_rest(1.0, 1.0)
                }
            }
            InitialCondition::Uniform(w) => *w,
        }
    }

    fn validate(&self) -> Result<()> {
        if let InitialCondition::Uniform(w) = self
            && !w.is_physical()
        {
            return Err(ConfigError::NonPhysicalInitialState { rho: w.rho, p: w.p });
        }
        Ok(())
    }
}

impl fmt::Display for InitialCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitialCondition::Vortex => f.write_str("vortex"),
            InitialCondition::Uniform(w) => write!(
                f,
                "uniform(rho={}, u={}, v={}, p={})",
                w.rho, w.u, w.v, w.p
            ),
        }
    }
}

/// Configuration of the finite-volume engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Interior cells per side.
    pub n: usize,
    /// CFL number.
    pub cfl: f64,
    /// Adiabatic index γ.
    pub gamma: f64,
    /// Reference end time; only sizes [`Self::estimated_steps`].
    pub t_end: f64,
    /// Boundary policy per side.
    pub boundary: SideBoundaries<BoundaryPolicy>,
    /// Time step selection.
    pub time_stepping: TimeStepping,
    /// Interface Riemann solver.
    pub riemann_solver: StandardFlux,
    /// Reconstruction slope limiter.
    pub limiter: SlopeLimiter,
    /// Initial state.
    pub initial_condition: InitialCondition,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            n: 256,
            cfl: 0.3,
            gamma: 1.4,
            t_end: 0.8,
            boundary: SideBoundaries::uniform(BoundaryPolicy::Reflective),
            time_stepping: TimeStepping::Fixed,
            riemann_solver: StandardFlux::Hllc,
            limiter: SlopeLimiter::Minmod,
            initial_condition: InitialCondition::Vortex,
        }
    }
}

impl GridConfig {
    /// Default configuration on an `n × n` grid.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            ..Self::default()
        }
    }

    /// Set the CFL number.
    pub fn with_cfl(mut self, cfl: f64) -> Self {
        self.cfl = cfl;
        self
    }

    /// Set the adiabatic index.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the reference end time.
    pub fn with_t_end(mut self, t_end: f64) -> Self {
        self.t_end = t_end;
        self
    }

    /// Use the same boundary policy on all four sides.
    pub fn with_boundary(mut self, policy: BoundaryPolicy) -> Self {
        self.boundary = SideBoundaries::uniform(policy);
        self
    }

    /// Set the boundary policy of one side.
    pub fn with_side_boundary(mut self, side: Side, policy: BoundaryPolicy) -> Self {
        self.boundary = self.boundary.with(side, policy);
        self
    }

    /// Set the time-stepping mode.
    pub fn with_time_stepping(mut self, time_stepping: TimeStepping) -> Self {
        self.time_stepping = time_stepping;
        self
    }

    /// Set the Riemann solver.
    pub fn with_riemann_solver(mut self, flux: StandardFlux) -> Self {
        self.riemann_solver = flux;
        self
    }

    /// Set the slope limiter.
    pub fn with_limiter(mut self, limiter: SlopeLimiter) -> Self {
        self.limiter = limiter;
        self
    }

    /// Set the initial condition.
    pub fn with_initial_condition(mut self, initial_condition: InitialCondition) -> Self {
        self.initial_condition = initial_condition;
        self
    }

    /// Check every parameter, failing on the first invalid one.
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(ConfigError::InvalidGridSize(self.n));
        }
        if !(self.cfl > 0.0 && self.cfl <= 1.0) {
            return Err(ConfigError::InvalidCfl(self.cfl));
        }
        if !(self.gamma.is_finite() && self.gamma > 1.0) {
            return Err(ConfigError::InvalidGamma(self.gamma));
        }
        if !(self.t_end.is_finite() && self.t_end > 0.0) {
            return Err(ConfigError::InvalidEndTime(self.t_end));
        }
        self.initial_condition.validate()
    }

    /// Cell width on the unit square.
    #[inline]
    pub fn dx(&self) -> f64 {
        1.0 / self.n as f64
    }

    /// Time step from the initial CFL estimate, `cfl·dx/2`.
    #[inline]
    pub fn initial_dt(&self) -> f64 {
        self.cfl * self.dx() / 2.0
    }

    /// Number of fixed steps needed to reach `t_end`.
    pub fn estimated_steps(&self) -> usize {
        (self.t_end / self.initial_dt()).floor() as usize + 1
    }

    /// Equation of state for this configuration.
    #[inline]
    pub fn gas(&self) -> Euler2D {
        Euler2D::new(self.gamma)
    }
}
