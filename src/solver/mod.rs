//! Finite-volume solver components.
//!
//! # Submodules
//!
//! - [`state`]: Cell state types (conserved and primitive)
//! - [`config`]: Engine configuration
//! - [`grid_state`]: Padded cell storage and conversions
//! - [`limiters`]: Slope limiters
//! - [`reconstruction`]: MUSCL face reconstruction
//! - [`flux_accumulator`]: Face flux buffers and their evaluation
//! - [`diagnostics`]: Conservation and stability diagnostics
//!
//! One step of the scheme runs these in order: conserved → primitive sync,
//! boundary fill ([`crate::boundary`]), [`FluxAccumulator::accumulate`],
//! then the conservative update ([`crate::time`]).

pub mod config;
pub mod diagnostics;
pub mod flux_accumulator;
pub mod grid_state;
pub mod limiters;
pub mod reconstruction;
pub mod state;

pub use config::{GridConfig, InitialCondition, TimeStepping};
pub use diagnostics::{DiagnosticsTracker, EulerDiagnostics2D};
pub use flux_accumulator::{FaceFluxes, FluxAccumulator};
pub use grid_state::{GHOST_WIDTH, GridState};
pub use limiters::{SlopeLimiter, minmod};
pub use reconstruction::MusclReconstructor;
pub use state::{EulerState2D, PrimitiveState2D};
