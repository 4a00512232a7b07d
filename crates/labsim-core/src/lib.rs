//! LabSim core — the simulation engine behind the interactive games.
//!
//! Everything here is headless and deterministic: widgets own these models,
//! drive them from user events and clock ticks, and hand snapshots to a
//! presentation layer. The core never renders and never reads wall time.
//!
//! # Architecture
//!
//! - `solvers` — fixed-step explicit integrators (Euler, RK4) over
//!   `nalgebra::DVector` state
//! - `dynamics` — time-integrated models (mass-spring-damper, RLC step
//!   response) built on the solvers
//! - `statics` — closed-form models (series DC circuit, beam deflection,
//!   torque balance)
//! - `sorting` — replayable step generators for the sorting visualizers
//! - `structures` — stack, queue and graph editor models
//! - `challenge` — random targets and tolerance-band evaluation
//! - `progress` — keyed best-ever (stars, xp) store

pub mod challenge;
pub mod dynamics;
pub mod progress;
pub mod solvers;
pub mod sorting;
pub mod statics;
pub mod structures;

pub use challenge::{Challenge, ChallengeSession, Outcome};
pub use progress::{JsonFileStore, MemoryStore, ProgressStore, StoreError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::challenge::{Challenge, ChallengeSession, Outcome};
    pub use crate::dynamics::{RlcParams, RlcPoint, RunState, ShmParams, ShmSimulator};
    pub use crate::progress::{JsonFileStore, MemoryStore, ProgressStore, StoreError};
    pub use crate::solvers::{Euler, ExplicitSolver, Rk4, Solver};
    pub use crate::sorting::{generate_steps, replay, Algorithm};
    pub use crate::statics::{BeamBalance, BeamParams, SeriesCircuit};
    pub use crate::structures::{EmptyError, GraphModel, Queue, Stack};
    pub use labsim_types::{GraphDocument, Progress, SortStep, StepTrace};
}
