//! Runtime diagnostics for 2D Euler simulations.
//!
//! Provides types for computing and tracking:
//! - Conservation quantities (mass, momentum, energy)
//! - CFL number
//! - Solution bounds (density, pressure, speed, Mach number)
//!
//! # Example
//!
//! ```
//! use euler_fv::solver::{DiagnosticsTracker, EulerDiagnostics2D, GridConfig, GridState};
//!
//! let config = GridConfig::new(32);
//! let grid = GridState::new(&config).unwrap();
//! let initial = EulerDiagnostics2D::compute(&grid, config.initial_dt());
//! assert!(initial.min_density > 0.0);
//!
//! let mut tracker = DiagnosticsTracker::new(initial.clone());
//! // ... simulation loop ...
//! tracker.update(0.1, initial);
//! assert!(tracker.mass_error() < 1e-12);
//! assert!(tracker.is_stable());
//! ```

use log::info;

use crate::solver::GridState;

/// Diagnostic quantities over the interior cells.
///
/// Totals are integrals over the unit square (cell sums times `dx²`).
#[derive(Clone, Debug, PartialEq)]
pub struct EulerDiagnostics2D {
    /// Total mass ∫ρ
    pub total_mass: f64,
    /// Total x-momentum ∫ρu
    pub momentum_x: f64,
    /// Total y-momentum ∫ρv
    pub momentum_y: f64,
    /// Total energy ∫E
    pub total_energy: f64,
    /// Kinetic part ∫½ρ(u² + v²)
    pub kinetic_energy: f64,
    /// Minimum density
    pub min_density: f64,
    /// Maximum density
    pub max_density: f64,
    /// Minimum pressure
    pub min_pressure: f64,
    /// Maximum pressure
    pub max_pressure: f64,
    /// Maximum speed |(u, v)|
    pub max_speed: f64,
    /// Maximum Mach number |(u, v)|/c
    pub max_mach: f64,
    /// CFL number for the given time step, dt·max(max(|u|,|v|)+c)/dx
    pub cfl_number: f64,
}

impl EulerDiagnostics2D {
    /// Compute all diagnostics from the conserved view.
    ///
    /// Primitives are derived on the fly, so the result does not depend on
    /// whether the primitive view is current.
    ///
    /// # Arguments
    /// * `grid` - Current grid state
    /// * `dt` - Current time step (for CFL computation)
    pub fn compute(grid: &GridState, dt: f64) -> Self {
        let gas = grid.gas();
        let area = grid.dx() * grid.dx();

        let mut total_mass = 0.0;
        let mut momentum_x = 0.0;
        let mut momentum_y = 0.0;
        let mut total_energy = 0.0;
        let mut kinetic_energy = 0.0;
        let mut min_density = f64::INFINITY;
        let mut max_density = f64::NEG_INFINITY;
        let mut min_pressure = f64::INFINITY;
        let mut max_pressure = f64::NEG_INFINITY;
        let mut max_speed: f64 = 0.0;
        let mut max_mach: f64 = 0.0;
        let mut max_signal: f64 = 0.0;

        for q in grid.interior_conserved() {
            total_mass += q.rho;
            momentum_x += q.rho_u;
            momentum_y += q.rho_v;
            total_energy += q.energy;

            let w = gas.to_primitive(q);
            let speed = w.speed();
            kinetic_energy += 0.5 * w.rho * speed * speed;

            min_density = min_density.min(w.rho);
            max_density = max_density.max(w.rho);
            min_pressure = min_pressure.min(w.p);
            max_pressure = max_pressure.max(w.p);

            let c = gas.sound_speed(&w);
            max_speed = max_speed.max(speed);
            max_mach = max_mach.max(speed / c);
            max_signal = max_signal.max(w.u.abs().max(w.v.abs()) + c);
        }

        Self {
            total_mass: total_mass * area,
            momentum_x: momentum_x * area,
            momentum_y: momentum_y * area,
            total_energy: total_energy * area,
            kinetic_energy: kinetic_energy * area,
            min_density,
            max_density,
            min_pressure,
            max_pressure,
            max_speed,
            max_mach,
            cfl_number: dt * max_signal / grid.dx(),
        }
    }

    /// Format diagnostics as a single-line summary.
    pub fn summary_line(&self) -> String {
        format!(
            "M={:.6e} E={:.6e} rho=[{:.4},{:.4}] p=[{:.4},{:.4}] |u|_max={:.4} Ma={:.3} CFL={:.3}",
            self.total_mass,
            self.total_energy,
            self.min_density,
            self.max_density,
            self.min_pressure,
            self.max_pressure,
            self.max_speed,
            self.max_mach,
            self.cfl_number
        )
    }

    /// Format diagnostics as detailed multi-line output.
    pub fn detailed(&self) -> String {
        format!(
            "Conservation:\n  Mass:      {:.6e}\n  Momentum:  ({:.6e}, {:.6e})\n  Energy:    {:.6e} (KE={:.6e})\n\
             Bounds:\n  Density:   [{:.4}, {:.4}]\n  Pressure:  [{:.4}, {:.4}]\n  Speed:     {:.4}\n\
             Stability:\n  CFL:       {:.4}\n  Mach:      {:.4}",
            self.total_mass,
            self.momentum_x,
            self.momentum_y,
            self.total_energy,
            self.kinetic_energy,
            self.min_density,
            self.max_density,
            self.min_pressure,
            self.max_pressure,
            self.max_speed,
            self.cfl_number,
            self.max_mach
        )
    }

    /// Whether every quantity is finite.
    pub fn is_finite(&self) -> bool {
        [
            self.total_mass,
            self.momentum_x,
            self.momentum_y,
            self.total_energy,
            self.max_density,
            self.max_pressure,
            self.max_speed,
            self.cfl_number,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Track diagnostics over time for monitoring conservation and stability.
#[derive(Clone, Debug)]
pub struct DiagnosticsTracker {
    /// Initial diagnostics (for conservation error computation)
    initial: EulerDiagnostics2D,
    /// Most recent diagnostics
    current: EulerDiagnostics2D,
    /// Time of most recent update
    current_time: f64,
    /// Number of updates
    n_updates: usize,
    /// Maximum CFL seen during simulation
    max_cfl_seen: f64,
    /// Maximum Mach number seen during simulation
    max_mach_seen: f64,
    /// Minimum density seen during simulation
    min_density_seen: f64,
    /// Minimum pressure seen during simulation
    min_pressure_seen: f64,
}

impl DiagnosticsTracker {
    /// Create a new tracker with initial diagnostics.
    pub fn new(initial: EulerDiagnostics2D) -> Self {
        Self {
            current: initial.clone(),
            current_time: 0.0,
            n_updates: 0,
            max_cfl_seen: initial.cfl_number,
            max_mach_seen: initial.max_mach,
            min_density_seen: initial.min_density,
            min_pressure_seen: initial.min_pressure,
            initial,
        }
    }

    /// Update tracker with new diagnostics.
    pub fn update(&mut self, time: f64, diag: EulerDiagnostics2D) {
        self.current_time = time;
        self.n_updates += 1;

        self.max_cfl_seen = self.max_cfl_seen.max(diag.cfl_number);
        self.max_mach_seen = self.max_mach_seen.max(diag.max_mach);
        self.min_density_seen = self.min_density_seen.min(diag.min_density);
        self.min_pressure_seen = self.min_pressure_seen.min(diag.min_pressure);

        self.current = diag;
    }

    /// Relative mass conservation error.
    pub fn mass_error(&self) -> f64 {
        relative_change(self.initial.total_mass, self.current.total_mass).abs()
    }

    /// Change in momentum magnitude, relative when the initial momentum is nonzero.
    pub fn momentum_error(&self) -> f64 {
        let initial = self.initial.momentum_x.hypot(self.initial.momentum_y);
        let current = self.current.momentum_x.hypot(self.current.momentum_y);
        if initial > 1e-14 {
            (current - initial).abs() / initial
        } else {
            (current - initial).abs()
        }
    }

    /// Relative energy change.
    pub fn energy_change(&self) -> f64 {
        relative_change(self.initial.total_energy, self.current.total_energy)
    }

    /// Get current diagnostics.
    pub fn current(&self) -> &EulerDiagnostics2D {
        &self.current
    }

    /// Get initial diagnostics.
    pub fn initial(&self) -> &EulerDiagnostics2D {
        &self.initial
    }

    /// Number of updates since construction.
    pub fn n_updates(&self) -> usize {
        self.n_updates
    }

    /// Largest CFL number seen so far.
    pub fn max_cfl_seen(&self) -> f64 {
        self.max_cfl_seen
    }

    /// Check if simulation appears stable (no blow-up indicators).
    pub fn is_stable(&self) -> bool {
        let diag = &self.current;
        diag.is_finite() && diag.min_density > 0.0 && diag.min_pressure > 0.0 && diag.cfl_number <= 1.0
    }

    /// Log a summary of the tracked diagnostics at info level.
    pub fn log_summary(&self) {
        info!(
            "diagnostics at t={:.4} ({} updates): mass error {:.2e}, momentum error {:.2e}, energy change {:.2e}",
            self.current_time,
            self.n_updates,
            self.mass_error(),
            self.momentum_error(),
            self.energy_change()
        );
        info!(
            "extrema: max CFL {:.4}, max Mach {:.4}, min density {:.4e}, min pressure {:.4e}",
            self.max_cfl_seen, self.max_mach_seen, self.min_density_seen, self.min_pressure_seen
        );
        info!("current: {}", self.current.summary_line());
    }
}

fn relative_change(initial: f64, current: f64) -> f64 {
    if initial.abs() > 1e-14 {
        (current - initial) / initial.abs()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{GridConfig, InitialCondition, PrimitiveState2D};

    const TOL: f64 = 1e-12;

    fn uniform(n: usize, w: PrimitiveState2D) -> GridState {
        let config = GridConfig::new(n).with_initial_condition(InitialCondition::Uniform(w));
        GridState::new(&config).unwrap()
    }

    #[test]
    fn test_uniform_totals() {
        let grid = uniform(8, PrimitiveState2D::new(2.0, 0.5, 0.0, 1.0));
        let diag = EulerDiagnostics2D::compute(&grid, 0.0);
        // Unit square: integrals equal the cell values.
        assert!((diag.total_mass - 2.0).abs() < TOL);
        assert!((diag.momentum_x - 1.0).abs() < TOL);
        assert!(diag.momentum_y.abs() < TOL);
        assert!((diag.kinetic_energy - 0.25).abs() < TOL);
        assert!((diag.total_energy - (1.0 / 0.4 + 0.25)).abs() < TOL);
        assert_eq!(diag.min_density, 2.0);
        assert!((diag.max_pressure - 1.0).abs() < TOL);
        assert_eq!(diag.cfl_number, 0.0);
    }

    #[test]
    fn test_vortex_bounds() {
        let config = GridConfig::new(32);
        let grid = GridState::new(&config).unwrap();
        let diag = EulerDiagnostics2D::compute(&grid, config.initial_dt());
        assert_eq!(diag.min_density, 1.0);
        assert_eq!(diag.max_density, 2.0);
        assert!((diag.min_pressure - 0.5).abs() < TOL);
        assert!(diag.max_mach < 1.0);
        assert!(diag.cfl_number > 0.0 && diag.cfl_number < config.cfl);
        assert!(diag.summary_line().contains("CFL="));
    }

    #[test]
    fn test_tracker_errors() {
        let grid = uniform(4, PrimitiveState2D::at_rest(1.0, 1.0));
        let initial = EulerDiagnostics2D::compute(&grid, 0.01);
        let mut tracker = DiagnosticsTracker::new(initial.clone());

        let mut drifted = initial.clone();
        drifted.total_mass *= 1.001;
        drifted.total_energy *= 0.99;
        tracker.update(0.5, drifted);

        assert!((tracker.mass_error() - 1e-3).abs() < 1e-12);
        assert!((tracker.energy_change() + 0.01).abs() < 1e-12);
        assert_eq!(tracker.momentum_error(), 0.0);
        assert_eq!(tracker.n_updates(), 1);
        assert!(tracker.is_stable());
    }

    #[test]
    fn test_tracker_detects_blow_up() {
        let grid = uniform(4, PrimitiveState2D::at_rest(1.0, 1.0));
        let initial = EulerDiagnostics2D::compute(&grid, 0.01);
        let mut tracker = DiagnosticsTracker::new(initial.clone());

        let mut negative = initial.clone();
        negative.min_pressure = -1.0;
        tracker.update(0.1, negative);
        assert!(!tracker.is_stable());

        let mut nan = initial;
        nan.total_energy = f64::NAN;
        tracker.update(0.2, nan);
        assert!(!tracker.is_stable());
    }
}
