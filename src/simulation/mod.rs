//! Flow engines and the loop that drives them.
//!
//! - [`FlowSimulation`]: the engine contract used by transport layers
//! - [`EulerSimulation`]: second-order finite-volume Euler engine
//! - [`DiffusionModel`]: lightweight fallback that reacts to interactions
//! - [`create_engine`]: runtime selection by [`EngineKind`]
//! - [`SimulationRunner`]: step-until loop with callbacks
//!
//! # Example
//! ```
//! use euler_fv::simulation::{EngineKind, FlowSimulation, create_engine};
//! use euler_fv::solver::GridConfig;
//!
//! let mut engine = create_engine(EngineKind::Diffusion, &GridConfig::default()).unwrap();
//! engine.add_interaction(0.5, 0.5, 0.1);
//! engine.step();
//! assert_eq!(engine.info().step, 1);
//! ```

mod diffusion;
mod euler;
mod factory;
mod runner;
mod traits;

pub use diffusion::{DiffusionConfig, DiffusionModel};
pub use euler::{EulerSimulation, SimulationPhase};
pub use factory::{BoxedSimulation, EngineKind, create_engine};
pub use runner::{RunConfig, RunSummary, SimulationRunner, StopReason};
pub use traits::{FlowSimulation, SimulationInfo, VelocityField};
