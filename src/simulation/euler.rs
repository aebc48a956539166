//! Finite-volume engine for the 2D Euler equations.
//!
//! Each [`step`](FlowSimulation::step) runs four phases in strict order:
//!
//! 1. conserved → primitive sync over the whole padded grid
//! 2. ghost fill on all four sides
//! 3. MUSCL reconstruction + Riemann solve on every face
//! 4. forward-Euler conservative update of the interior
//!
//! All buffers are allocated once in [`EulerSimulation::new`] and reused,
//! including across [`reset`](FlowSimulation::reset).

use log::{debug, info, warn};

use super::{FlowSimulation, SimulationInfo, VelocityField};
use crate::boundary::BoundaryConditionApplier;
use crate::error::Result;
use crate::solver::{
    EulerDiagnostics2D, FaceFluxes, FluxAccumulator, GridConfig, GridState, TimeStepping,
};
use crate::time::{ForwardEuler, TimeIntegrator, cfl_number, cfl_time_step};

/// Lifecycle phase of an engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationPhase {
    /// Freshly constructed or reset; no step taken yet.
    Initialized,
    /// At least one step taken.
    Stepping,
}

/// Second-order finite-volume Euler engine.
///
/// # Example
/// ```
/// use euler_fv::simulation::{EulerSimulation, FlowSimulation};
/// use euler_fv::solver::GridConfig;
///
/// let mut sim = EulerSimulation::new(GridConfig::new(32)).unwrap();
/// sim.step();
/// sim.step();
/// let info = sim.info();
/// assert_eq!(info.step, 2);
/// assert_eq!(sim.density_field().len(), 32);
/// ```
#[derive(Debug)]
pub struct EulerSimulation {
    config: GridConfig,
    grid: GridState,
    fluxes: FaceFluxes,
    boundary: BoundaryConditionApplier,
    accumulator: FluxAccumulator,
    integrator: ForwardEuler,
    dt: f64,
    step: u64,
    time: f64,
    phase: SimulationPhase,
    cfl_warned: bool,
}

impl EulerSimulation {
    /// Validate `config`, allocate all buffers and seed the initial condition.
    pub fn new(config: GridConfig) -> Result<Self> {
        config.validate()?;

        let mut grid = GridState::new(&config)?;
        let boundary = BoundaryConditionApplier::new(&config.boundary);
        boundary.apply(&mut grid);

        let sim = Self {
            fluxes: FaceFluxes::new(config.n),
            accumulator: FluxAccumulator::new(config.limiter, config.riemann_solver),
            integrator: ForwardEuler,
            dt: config.initial_dt(),
            step: 0,
            time: 0.0,
            phase: SimulationPhase::Initialized,
            cfl_warned: false,
            boundary,
            grid,
            config,
        };

        info!(
            "euler engine: {}x{} cells, dt={:.3e}, boundary={} ({}), flux={}, limiter={}, time stepping={}, initial={}",
            sim.config.n,
            sim.config.n,
            sim.dt,
            sim.boundary,
            if sim.conserves_mass() { "closed" } else { "open" },
            sim.config.riemann_solver,
            sim.config.limiter,
            sim.config.time_stepping,
            sim.config.initial_condition
        );
        Ok(sim)
    }

    /// Configuration the engine was built with.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Underlying grid state.
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Face fluxes of the most recent step.
    pub fn fluxes(&self) -> &FaceFluxes {
        &self.fluxes
    }

    /// Whether every side is a wall, so total mass is invariant.
    pub fn conserves_mass(&self) -> bool {
        self.boundary.is_closed()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SimulationPhase {
        self.phase
    }

    /// Time step of the next step.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Conservation and stability diagnostics of the current state.
    pub fn diagnostics(&self) -> EulerDiagnostics2D {
        EulerDiagnostics2D::compute(&self.grid, self.dt)
    }

    fn select_dt(&mut self) {
        match self.config.time_stepping {
            TimeStepping::Fixed => {
                if self.cfl_warned {
                    return;
                }
                let measured = cfl_number(&self.grid, self.dt);
                if measured > self.config.cfl {
                    warn!(
                        "step {}: CFL number {:.3} exceeds configured {:.3} with fixed dt={:.3e}; consider adaptive time stepping",
                        self.step, measured, self.config.cfl, self.dt
                    );
                    self.cfl_warned = true;
                }
            }
            TimeStepping::Adaptive => {
                if let Some(dt) = cfl_time_step(&self.grid, self.config.cfl)
                    && dt != self.dt
                {
                    debug!("step {}: dt {:.3e} -> {:.3e}", self.step, self.dt, dt);
                    self.dt = dt;
                }
            }
        }
    }
}

impl FlowSimulation for EulerSimulation {
    fn step(&mut self) {
        self.grid.conservative_to_primitive();
        self.boundary.apply(&mut self.grid);
        self.select_dt();
        self.accumulator.accumulate(&self.grid, &mut self.fluxes);
        self.integrator.update(&mut self.grid, &self.fluxes, self.dt);

        self.step += 1;
        self.time += self.dt;
        self.phase = SimulationPhase::Stepping;
    }

    fn reset(&mut self) {
        self.grid.initialize(&self.config.initial_condition);
        self.boundary.apply(&mut self.grid);
        self.dt = self.config.initial_dt();
        self.step = 0;
        self.time = 0.0;
        self.phase = SimulationPhase::Initialized;
        self.cfl_warned = false;
        debug!("euler engine reset");
    }

    fn density_field(&mut self) -> Vec<Vec<f32>> {
        self.grid.conservative_to_primitive();
        self.grid.density_field()
    }

    fn velocity_field(&mut self) -> VelocityField {
        self.grid.conservative_to_primitive();
        let (u, v) = self.grid.velocity_field();
        VelocityField { u, v }
    }

    fn pressure_field(&mut self) -> Vec<Vec<f32>> {
        self.grid.conservative_to_primitive();
        self.grid.pressure_field()
    }

    fn info(&self) -> SimulationInfo {
        SimulationInfo {
            step: self.step,
            time: self.time,
            dt: self.dt,
            grid_size: self.config.n,
        }
    }

    /// Not modelled for the Euler engine: the call is logged and ignored,
    /// leaving the conserved state untouched.
    fn add_interaction(&mut self, x: f64, y: f64, strength: f64) {
        debug!(
            "euler engine ignores interaction at ({:.3}, {:.3}) with strength {:.3}",
            x, y, strength
        );
    }

    fn name(&self) -> &'static str {
        "euler"
    }
}
