//! The engine contract shared by every flow model.
//!
//! A transport layer drives an engine through exactly these operations:
//! advance, reset, three field queries, a status snapshot and an optional
//! perturbation hook. Engines are swapped behind `Box<dyn FlowSimulation>`.

use serde::{Deserialize, Serialize};

/// Velocity components over the interior, each `field[i][j]` with `i` along x.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VelocityField {
    /// x-velocity
    pub u: Vec<Vec<f32>>,
    /// y-velocity
    pub v: Vec<Vec<f32>>,
}

/// Status snapshot of an engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationInfo {
    /// Completed steps since construction or the last reset.
    pub step: u64,
    /// Elapsed simulated time.
    pub time: f64,
    /// Time step of the next step.
    pub dt: f64,
    /// Interior cells per side.
    pub grid_size: usize,
}

/// Six-operation flow engine contract (plus a name for logging).
///
/// Stepping is infallible once an engine is constructed. Field queries
/// return `n × n` nested vectors indexed `field[i][j]`, `i` along x.
pub trait FlowSimulation: Send {
    /// Advance by one time step.
    fn step(&mut self);

    /// Restore the initial condition and zero the step counter and time.
    fn reset(&mut self);

    /// Interior density.
    fn density_field(&mut self) -> Vec<Vec<f32>>;

    /// Interior velocity components.
    fn velocity_field(&mut self) -> VelocityField;

    /// Interior pressure.
    fn pressure_field(&mut self) -> Vec<Vec<f32>>;

    /// Step counter, time, time step and grid size.
    fn info(&self) -> SimulationInfo;

    /// Perturb the flow around `(x, y)` in unit-square coordinates.
    ///
    /// Engines without an interaction model ignore the call.
    fn add_interaction(&mut self, x: f64, y: f64, strength: f64);

    /// Engine name for logging.
    fn name(&self) -> &'static str;
}
