//! Run loop over any [`FlowSimulation`].
//!
//! Engines own their time step, so the runner only decides when to stop and
//! when to hand the state to a callback.

use std::fmt;
use std::time::Instant;

use log::{debug, info};

use super::FlowSimulation;

// =============================================================================
// Run Configuration
// =============================================================================

/// Stopping and callback policy for a run.
#[derive(Clone, Debug, Default)]
pub struct RunConfig {
    /// Stop once simulated time reaches this value.
    pub t_end: Option<f64>,
    /// Stop after this many steps of this run.
    pub max_steps: Option<u64>,
    /// Simulated time between callbacks (every step if unset).
    pub callback_interval: Option<f64>,
}

// =============================================================================
// Run Summary
// =============================================================================

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Simulated time reached `t_end`.
    EndTime,
    /// `max_steps` steps were taken.
    StepLimit,
    /// Neither limit was configured; nothing was run.
    Unbounded,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::EndTime => f.write_str("end time reached"),
            StopReason::StepLimit => f.write_str("step limit reached"),
            StopReason::Unbounded => f.write_str("no stopping criterion"),
        }
    }
}

/// Result of a run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Steps taken during this run.
    pub n_steps: u64,
    /// Simulated time at the end of the run.
    pub final_time: f64,
    /// Wall-clock duration in seconds.
    pub wall_time: f64,
    /// Why the run ended.
    pub stop_reason: StopReason,
}

impl RunSummary {
    /// Steps per wall-clock second.
    pub fn steps_per_second(&self) -> f64 {
        if self.wall_time > 0.0 {
            self.n_steps as f64 / self.wall_time
        } else {
            0.0
        }
    }
}

// =============================================================================
// Simulation Runner
// =============================================================================

/// Drives an engine until a stopping criterion is met.
///
/// # Example
/// ```
/// use euler_fv::simulation::{EulerSimulation, SimulationRunner};
/// use euler_fv::solver::GridConfig;
///
/// let mut sim = EulerSimulation::new(GridConfig::new(16)).unwrap();
/// let summary = SimulationRunner::new().with_max_steps(4).run(&mut sim);
/// assert_eq!(summary.n_steps, 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationRunner {
    config: RunConfig,
}

impl SimulationRunner {
    /// Runner without limits; set at least one before running.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop at simulated time `t_end`.
    pub fn with_t_end(mut self, t_end: f64) -> Self {
        self.config.t_end = Some(t_end);
        self
    }

    /// Stop after `max_steps` steps.
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.config.max_steps = Some(max_steps);
        self
    }

    /// Call back every `interval` of simulated time.
    pub fn with_callback_interval(mut self, interval: f64) -> Self {
        self.config.callback_interval = Some(interval);
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run without a callback.
    pub fn run<S>(&self, sim: &mut S) -> RunSummary
    where
        S: FlowSimulation + ?Sized,
    {
        self.run_with_callback(sim, |_| {})
    }

    /// Run, calling `callback` at the start, at the configured interval and
    /// once at the end if the last step was not already reported.
    pub fn run_with_callback<S, F>(&self, sim: &mut S, mut callback: F) -> RunSummary
    where
        S: FlowSimulation + ?Sized,
        F: FnMut(&mut S),
    {
        let start_wall = Instant::now();
        let start_time = sim.info().time;
        let mut n_steps = 0;
        let mut last_callback_time = start_time;
        let mut reported = true;

        if self.config.t_end.is_none() && self.config.max_steps.is_none() {
            return RunSummary {
                n_steps,
                final_time: start_time,
                wall_time: 0.0,
                stop_reason: StopReason::Unbounded,
            };
        }

        info!(
            "running {} engine from t={:.4} (t_end={:?}, max_steps={:?})",
            sim.name(),
            start_time,
            self.config.t_end,
            self.config.max_steps
        );
        callback(&mut *sim);

        let stop_reason = loop {
            let info = sim.info();
            if let Some(t_end) = self.config.t_end
                && info.time >= t_end
            {
                break StopReason::EndTime;
            }
            if let Some(max_steps) = self.config.max_steps
                && n_steps >= max_steps
            {
                break StopReason::StepLimit;
            }

            sim.step();
            n_steps += 1;
            reported = false;

            let time = sim.info().time;
            let due = match self.config.callback_interval {
                Some(interval) => time - last_callback_time >= interval,
                None => true,
            };
            if due {
                callback(&mut *sim);
                last_callback_time = time;
                reported = true;
            }

            if n_steps % 100 == 0 {
                debug!("step {}: t = {:.4}", sim.info().step, time);
            }
        };

        if !reported {
            callback(&mut *sim);
        }

        let summary = RunSummary {
            n_steps,
            final_time: sim.info().time,
            wall_time: start_wall.elapsed().as_secs_f64(),
            stop_reason,
        };
        info!(
            "{} after {} steps: t={:.4}, {:.1} steps/s",
            summary.stop_reason,
            summary.n_steps,
            summary.final_time,
            summary.steps_per_second()
        );
        summary
    }
}
