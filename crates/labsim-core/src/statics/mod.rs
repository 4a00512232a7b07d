//! Closed-form models: no integration, recomputed from parameters.

mod balance;
mod beam;
mod circuit;

pub use balance::{BeamBalance, PlacedWeight, PALETTE_MASSES, SLOTS};
pub use beam::BeamParams;
pub use circuit::{SeriesCircuit, SeriesSolution};
