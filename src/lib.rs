//! # euler-fv
//!
//! A second-order finite-volume solver for the 2D compressible Euler
//! equations of an ideal gas on a uniform square grid.
//!
//! This crate provides the building blocks of the scheme:
//! - Padded grid storage with primitive and conserved views
//! - Ghost-cell boundary conditions (transmissive, reflective)
//! - MUSCL reconstruction with the minmod limiter
//! - Approximate Riemann solvers (HLLC, HLL, Rusanov)
//! - Forward-Euler conservative update with fixed or adaptive time steps
//! - Conservation diagnostics
//! - Engines behind one [`FlowSimulation`] contract, plus a run loop
//!
//! ## Example
//!
//! ```
//! use euler_fv::{EulerSimulation, FlowSimulation, GridConfig};
//!
//! let mut sim = EulerSimulation::new(GridConfig::new(32)).unwrap();
//! for _ in 0..5 {
//!     sim.step();
//! }
//! let rho = sim.density_field();
//! assert_eq!(rho.len(), 32);
//! assert!(rho.iter().flatten().all(|&r| r > 0.0));
//! ```
//!
//! ## Features
//!
//! - `parallel`: row-parallel face sweeps, updates and conversions via rayon

pub mod boundary;
pub mod equations;
pub mod error;
pub mod flux;
pub mod simulation;
pub mod solver;
pub mod time;
pub mod types;

// Re-export main types for convenience
pub use boundary::{BoundaryConditionApplier, BoundaryPolicy, GhostCellRule};
pub use equations::Euler2D;
pub use error::{ConfigError, Result};
pub use flux::{NumericalFlux, StandardFlux, hll_flux_euler, hllc_flux_euler, rusanov_flux_euler};
pub use simulation::{
    DiffusionConfig, DiffusionModel, EngineKind, EulerSimulation, FlowSimulation, RunSummary,
    SimulationInfo, SimulationPhase, SimulationRunner, VelocityField, create_engine,
};
pub use solver::{
    DiagnosticsTracker, EulerDiagnostics2D, EulerState2D, FaceFluxes, FluxAccumulator,
    GHOST_WIDTH, GridConfig, GridState, InitialCondition, MusclReconstructor, PrimitiveState2D,
    SlopeLimiter, TimeStepping,
};
pub use time::{ForwardEuler, TimeIntegrator, cfl_time_step};
pub use types::{Axis, Side, SideBoundaries};
