//! Runtime engine selection.

use std::fmt;
use std::str::FromStr;

use log::info;
use serde::{Deserialize, Serialize};

use super::{DiffusionConfig, DiffusionModel, EulerSimulation, FlowSimulation};
use crate::error::{ConfigError, Result};
use crate::solver::GridConfig;

/// Type alias for boxed engines (runtime polymorphism).
pub type BoxedSimulation = Box<dyn FlowSimulation>;

/// Available flow engines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Second-order finite-volume Euler solver
    #[default]
    Euler,
    /// Advection-diffusion fallback on its own 64×64 grid
    Diffusion,
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Euler => f.write_str("euler"),
            EngineKind::Diffusion => f.write_str("diffusion"),
        }
    }
}

impl FromStr for EngineKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" => Ok(EngineKind::Euler),
            "diffusion" | "fallback" | "simple" => Ok(EngineKind::Diffusion),
            _ => Err(ConfigError::unknown("engine", s, "euler, diffusion")),
        }
    }
}

/// Create an engine of the given kind.
///
/// The Euler engine is built from `config`; the diffusion engine uses
/// [`DiffusionConfig::default`] and ignores `config`.
pub fn create_engine(kind: EngineKind, config: &GridConfig) -> Result<BoxedSimulation> {
    info!("creating {} engine", kind);
    match kind {
        EngineKind::Euler => Ok(Box::new(EulerSimulation::new(config.clone())?)),
        EngineKind::Diffusion => Ok(Box::new(DiffusionModel::new(DiffusionConfig::default())?)),
    }
}
