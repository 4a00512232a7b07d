//! Shared types for LabSim interactive engineering games.
//!
//! This crate defines the data structures exchanged between the simulation
//! core and the widget state layer:
//! - Sorting step traces (replayable algorithm recordings)
//! - Graph editor documents (export/import format)
//! - Progress records (stars and XP per level)
//! - Playback settings

mod graph;
mod progress;
mod settings;
mod step;

pub use graph::*;
pub use progress::*;
pub use settings::*;
pub use step::*;

/// Position in 2D space
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Squared distance to another position
    pub fn distance_sq(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::zero()
    }
}
