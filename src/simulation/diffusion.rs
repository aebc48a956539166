//! Lightweight fallback flow model.
//!
//! A density field is carried by a velocity field that only diffuses and
//! decays; pressure is a static tracer of the initial disturbance. The model
//! is cheap enough for very small devices and responds to interactions,
//! which the Euler engine does not. All lengths are in grid units.
//!
//! Per step:
//!
//! 1. semi-Lagrangian advection of density with bilinear interpolation
//! 2. explicit diffusion of both velocity components, `v += ν·∇²v`
//! 3. damping of both velocity components by a constant factor

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::{FlowSimulation, SimulationInfo, VelocityField};
use crate::error::{ConfigError, Result};

/// Parameters of the fallback model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffusionConfig {
    /// Cells per side.
    pub n: usize,
    /// Time step.
    pub dt: f64,
    /// Velocity diffusion coefficient per step (stable up to 0.25).
    pub diffusion: f64,
    /// Velocity multiplier applied every step.
    pub damping: f64,
    /// Radius of the interaction kick in cells.
    pub interaction_radius: f64,
    /// Radius of the initial dense core in cells.
    pub core_radius: f64,
}

impl Default for DiffusionConfig {
    fn default() -> Self {
        Self {
            n: 64,
            dt: 0.01,
            diffusion: 0.01,
            damping: 0.99,
            interaction_radius: 3.0,
            core_radius: 10.0,
        }
    }
}

impl DiffusionConfig {
    /// Check every parameter, failing on the first invalid one.
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(ConfigError::InvalidGridSize(self.n));
        }
        let checks = [
            ("dt", self.dt, self.dt > 0.0),
            ("diffusion", self.diffusion, (0.0..=0.25).contains(&self.diffusion)),
            ("damping", self.damping, self.damping > 0.0 && self.damping <= 1.0),
            ("interaction_radius", self.interaction_radius, self.interaction_radius > 0.0),
            ("core_radius", self.core_radius, self.core_radius >= 0.0),
        ];
        for (name, value, ok) in checks {
            if !ok || !value.is_finite() {
                return Err(ConfigError::InvalidModelParameter { name, value });
            }
        }
        Ok(())
    }
}

/// Advection-diffusion fallback engine on an `n × n` grid.
///
/// Fields are returned raw; rescaling for display is left to the viewer.
#[derive(Clone, Debug)]
pub struct DiffusionModel {
    config: DiffusionConfig,
    density: Vec<f64>,
    velocity_x: Vec<f64>,
    velocity_y: Vec<f64>,
    pressure: Vec<f64>,
    scratch: Vec<f64>,
    step: u64,
    time: f64,
}

impl DiffusionModel {
    /// Validate `config` and seed the dense core.
    pub fn new(config: DiffusionConfig) -> Result<Self> {
        config.validate()?;
        let cells = config.n * config.n;
        let mut model = Self {
            density: vec![1.0; cells],
            velocity_x: vec![0.0; cells],
            velocity_y: vec![0.0; cells],
            pressure: vec![1.0; cells],
            scratch: vec![0.0; cells],
            step: 0,
            time: 0.0,
            config,
        };
        model.initialize();
        info!(
            "diffusion engine: {}x{} cells, dt={}, diffusion={}, damping={}",
            model.config.n, model.config.n, model.config.dt, model.config.diffusion, model.config.damping
        );
        Ok(model)
    }

    /// Parameters the model was built with.
    pub fn config(&self) -> &DiffusionConfig {
        &self.config
    }

    #[inline(always)]
    fn index(&self, i: usize, j: usize) -> usize {
        i * self.config.n + j
    }

    fn initialize(&mut self) {
        let n = self.config.n;
        let centre = (n / 2) as f64;
        self.density.fill(1.0);
        self.pressure.fill(1.0);
        self.velocity_x.fill(0.0);
        self.velocity_y.fill(0.0);
        for i in 0..n {
            for j in 0..n {
                let r = (i as f64 - centre).hypot(j as f64 - centre);
                if r < self.config.core_radius {
                    let idx = self.index(i, j);
                    self.density[idx] = 2.0;
                    self.pressure[idx] = 1.5;
                }
            }
        }
    }

    /// Backward-trace each interior cell and interpolate the old density.
    fn advect(&mut self) {
        let n = self.config.n;
        if n < 3 {
            return;
        }
        let dt = self.config.dt;
        let max = (n - 1) as f64;
        self.scratch.copy_from_slice(&self.density);

        for i in 1..n - 1 {
            for j in 1..n - 1 {
                let idx = self.index(i, j);
                let x = (i as f64 - self.velocity_x[idx] * dt).clamp(0.0, max);
                let y = (j as f64 - self.velocity_y[idx] * dt).clamp(0.0, max);
                let (ix, iy) = (x as usize, y as usize);
                if ix >= n - 1 || iy >= n - 1 {
                    continue;
                }
                let (fx, fy) = (x - ix as f64, y - iy as f64);
                let base = ix * n + iy;
                let d = &self.density;
                self.scratch[idx] = (1.0 - fx) * (1.0 - fy) * d[base]
                    + fx * (1.0 - fy) * d[base + n]
                    + (1.0 - fx) * fy * d[base + 1]
                    + fx * fy * d[base + n + 1];
            }
        }
        std::mem::swap(&mut self.density, &mut self.scratch);
    }

    /// Five-point Laplacian diffusion of one component, then damping.
    fn diffuse(field: &mut [f64], scratch: &mut [f64], n: usize, nu: f64, damping: f64) {
        scratch.copy_from_slice(field);
        for i in 1..n.saturating_sub(1) {
            for j in 1..n - 1 {
                let idx = i * n + j;
                let laplacian =
                    field[idx - n] + field[idx + n] + field[idx - 1] + field[idx + 1] - 4.0 * field[idx];
                scratch[idx] = field[idx] + nu * laplacian;
            }
        }
        for (out, value) in field.iter_mut().zip(scratch.iter()) {
            *out = value * damping;
        }
    }

    fn field(&self, values: &[f64]) -> Vec<Vec<f32>> {
        values
            .chunks(self.config.n)
            .map(|row| row.iter().map(|&v| v as f32).collect())
            .collect()
    }
}

impl FlowSimulation for DiffusionModel {
    fn step(&mut self) {
        self.advect();
        let (n, nu, damping) = (self.config.n, self.config.diffusion, self.config.damping);
        Self::diffuse(&mut self.velocity_x, &mut self.scratch, n, nu, damping);
        Self::diffuse(&mut self.velocity_y, &mut self.scratch, n, nu, damping);
        self.step += 1;
        self.time += self.config.dt;
    }

    fn reset(&mut self) {
        self.initialize();
        self.step = 0;
        self.time = 0.0;
        debug!("diffusion engine reset");
    }

    fn density_field(&mut self) -> Vec<Vec<f32>> {
        self.field(&self.density)
    }

    fn velocity_field(&mut self) -> VelocityField {
        VelocityField {
            u: self.field(&self.velocity_x),
            v: self.field(&self.velocity_y),
        }
    }

    fn pressure_field(&mut self) -> Vec<Vec<f32>> {
        self.field(&self.pressure)
    }

    fn info(&self) -> SimulationInfo {
        SimulationInfo {
            step: self.step,
            time: self.time,
            dt: self.config.dt,
            grid_size: self.config.n,
        }
    }

    /// Radial velocity kick around `(x, y)`, scaled to grid units.
    ///
    /// Points outside the unit square are ignored. The kick tapers linearly
    /// from `strength` at the centre to zero at the interaction radius.
    fn add_interaction(&mut self, x: f64, y: f64, strength: f64) {
        let n = self.config.n;
        let (gx, gy) = (x * n as f64, y * n as f64);
        if !(gx >= 0.0 && gx < n as f64 && gy >= 0.0 && gy < n as f64) {
            debug!("diffusion engine ignores interaction outside the domain at ({}, {})", x, y);
            return;
        }

        let radius = self.config.interaction_radius;
        let reach = radius.ceil() as i64;
        for di in -reach..=reach {
            for dj in -reach..=reach {
                let r = ((di * di + dj * dj) as f64).sqrt();
                if r >= radius {
                    continue;
                }
                let ni = (gx + di as f64).trunc() as i64;
                let nj = (gy + dj as f64).trunc() as i64;
                if ni < 0 || nj < 0 || ni >= n as i64 || nj >= n as i64 {
                    continue;
                }
                let factor = (radius - r) / radius * strength;
                let idx = self.index(ni as usize, nj as usize);
                self.velocity_x[idx] += di as f64 * factor;
                self.velocity_y[idx] += dj as f64 * factor;
            }
        }
    }

    fn name(&self) -> &'static str {
        "diffusion"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn model() -> DiffusionModel {
        DiffusionModel::new(DiffusionConfig::default()).unwrap()
    }

    #[test]
    fn test_initial_disturbance() {
        let mut sim = model();
        let rho = sim.density_field();
        assert_eq!(rho.len(), 64);
        assert_eq!(rho[32][32], 2.0);
        assert_eq!(rho[0][0], 1.0);
        assert_eq!(sim.pressure_field()[32][40], 1.5);
        let info = sim.info();
        assert_eq!(info.grid_size, 64);
        assert_eq!(info.dt, 0.01);
    }

    #[test]
    fn test_still_fluid_stays_still() {
        let mut sim = model();
        let before = sim.density_field();
        for _ in 0..5 {
            sim.step();
        }
        assert_eq!(sim.density_field(), before);
        assert_eq!(sim.info().step, 5);
        assert!((sim.info().time - 0.05).abs() < TOL);
    }

    #[test]
    fn test_interaction_kicks_outward() {
        let mut sim = model();
        sim.add_interaction(0.25, 0.25, 0.5);
        let vel = sim.velocity_field();
        // Centre cell (16, 16): di = dj = 0 gives no kick.
        assert_eq!(vel.u[16][16], 0.0);
        // East neighbour pushed in +x with factor (3 - 1)/3 * 0.5.
        assert!((vel.u[17][16] as f64 - 1.0 / 3.0).abs() < 1e-6);
        assert!((vel.u[15][16] as f64 + 1.0 / 3.0).abs() < 1e-6);
        assert!((vel.v[16][17] as f64 - 1.0 / 3.0).abs() < 1e-6);
        // Outside the radius nothing changes.
        assert_eq!(vel.u[19][16], 0.0);
    }

    #[test]
    fn test_interaction_outside_domain_ignored() {
        let mut sim = model();
        sim.add_interaction(1.2, 0.5, 1.0);
        sim.add_interaction(-0.1, 0.5, 1.0);
        let vel = sim.velocity_field();
        assert!(vel.u.iter().flatten().all(|&u| u == 0.0));
    }

    #[test]
    fn test_velocity_decays_and_density_moves() {
        let mut sim = model();
        // Kick at the edge of the dense core so the advected density changes.
        sim.add_interaction(42.0 / 64.0, 0.5, 1.0);
        let initial_peak = sim.velocity_x.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        let before = sim.density_field();
        for _ in 0..20 {
            sim.step();
        }
        let peak = sim.velocity_x.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        assert!(peak < initial_peak);
        assert_ne!(sim.density_field(), before);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut sim = model();
        let initial = sim.density_field();
        sim.add_interaction(0.5, 0.5, 1.0);
        sim.step();
        sim.reset();
        assert_eq!(sim.density_field(), initial);
        assert!(sim.velocity_field().u.iter().flatten().all(|&u| u == 0.0));
        assert_eq!(sim.info().step, 0);
        assert_eq!(sim.info().time, 0.0);
    }

    #[test]
    fn test_config_validation() {
        let bad = DiffusionConfig {
            diffusion: 0.5,
            ..DiffusionConfig::default()
        };
        assert_eq!(
            DiffusionModel::new(bad).unwrap_err(),
            ConfigError::InvalidModelParameter { name: "diffusion", value: 0.5 }
        );
        let bad = DiffusionConfig {
            n: 0,
            ..DiffusionConfig::default()
        };
        assert!(DiffusionModel::new(bad).is_err());
    }
}
