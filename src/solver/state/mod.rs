//! Cell state types for the 2D Euler equations.

mod euler_2d;

pub use euler_2d::{EulerState2D, PrimitiveState2D};
