//! Balance game: drag weights onto a beam until the torques match.

use labsim_core::statics::{BeamBalance, PlacedWeight, PALETTE_MASSES};

/// Summary of the beam's state for the status bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceSummary {
    pub left_torque: f64,
    pub right_torque: f64,
    pub balanced: bool,
    pub tilt_degrees: f64,
}

/// Interaction state for the torque balance game. Weights come from a
/// fixed palette, are dropped at a normalized beam coordinate that snaps
/// to a slot, and are removed by clicking them.
#[derive(Debug, Clone, Default)]
pub struct BalanceGame {
    beam: BeamBalance,

    /// Palette mass picked up and not yet dropped, in kg
    carrying: Option<f64>,
}

impl BalanceGame {
    pub fn new() -> Self {
        Self::default()
    }

    /// The draggable palette, in kg
    pub fn palette(&self) -> &'static [f64] {
        &PALETTE_MASSES
    }

    pub fn weights(&self) -> &[PlacedWeight] {
        self.beam.items()
    }

    pub fn carrying(&self) -> Option<f64> {
        self.carrying
    }

    /// Pick a mass up from the palette. Unknown masses are ignored.
    pub fn pick_up(&mut self, mass: f64) {
        if PALETTE_MASSES.contains(&mass) {
            self.carrying = Some(mass);
        }
    }

    /// Drop the carried mass at a normalized beam coordinate in [-1, 1].
    /// Snaps to the nearest slot; an occupant at that slot is replaced.
    /// Returns the placed weight's id.
    pub fn drop_at(&mut self, normalized: f64) -> Option<String> {
        let mass = self.carrying.take()?;
        let slot = BeamBalance::snap_to_slot(normalized);
        self.beam.place(mass, slot)
    }

    /// Click a placed weight to take it off the beam
    pub fn remove(&mut self, id: &str) -> bool {
        self.beam.remove(id)
    }

    pub fn reset(&mut self) {
        self.beam.reset();
        self.carrying = None;
    }

    pub fn summary(&self) -> BalanceSummary {
        let (left_torque, right_torque) = self.beam.torques();
        BalanceSummary {
            left_torque,
            right_torque,
            balanced: self.beam.is_balanced(),
            tilt_degrees: self.beam.tilt_degrees(),
        }
    }
}
