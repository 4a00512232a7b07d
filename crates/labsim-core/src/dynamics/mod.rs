//! Time-integrated physical models.

mod rlc;
mod shm;

pub use rlc::{RlcParams, RlcPoint, RLC_STEPS};
pub use shm::{RunState, ShmParams, ShmSimulator, TracePoint, MAX_SUBSTEPS};

use thiserror::Error;

/// Configuration errors that must be rejected before any integration step.
/// Stepping with these values would propagate NaN/Infinity into the state.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),

    #[error("stiffness must be non-negative and finite, got {0}")]
    InvalidStiffness(f64),

    #[error("damping must be non-negative and finite, got {0}")]
    InvalidDamping(f64),

    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),
}
