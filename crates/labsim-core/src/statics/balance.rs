//! Torque balance beam.
//!
//! Weights snap to integer slots either side of a central pivot. Torque is
//! mass times absolute distance from the pivot; the beam is balanced when
//! the left and right sums are equal.

/// Allowed slot positions; 0 is the pivot and is excluded
pub const SLOTS: [i32; 10] = [-5, -4, -3, -2, -1, 1, 2, 3, 4, 5];

/// Palette of draggable masses in kg
pub const PALETTE_MASSES: [f64; 4] = [1.0, 2.0, 3.0, 5.0];

/// A weight placed on the beam
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWeight {
    /// Unique identifier
    pub id: String,

    /// Mass in kg
    pub mass: f64,

    /// Slot position; negative = left of pivot, positive = right
    pub pos: i32,
}

/// The beam with its placed weights
#[derive(Debug, Clone, Default)]
pub struct BeamBalance {
    items: Vec<PlacedWeight>,
    id_counter: u64,
}

impl BeamBalance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weights currently on the beam, ordered left to right
    pub fn items(&self) -> &[PlacedWeight] {
        &self.items
    }

    /// Map a normalized beam coordinate in [-1, 1] (0 = pivot) to the
    /// nearest slot. The pivot itself is not a slot: values rounding to 0
    /// are nudged to ±1 on the side they came from.
    pub fn snap_to_slot(normalized: f64) -> i32 {
        let approx = (normalized * 5.0).round() as i32;
        let snapped = if approx == 0 {
            if normalized >= 0.0 {
                1
            } else {
                -1
            }
        } else {
            approx
        };
        let clamped = snapped.clamp(-5, 5);
        if clamped == 0 {
            1
        } else {
            clamped
        }
    }

    /// Place a weight at a slot. A weight already occupying the slot is
    /// replaced. Returns the new weight's id, or `None` when the slot or
    /// mass is not usable (pivot, out of range, non-positive mass).
    pub fn place(&mut self, mass: f64, pos: i32) -> Option<String> {
        if !SLOTS.contains(&pos) || !(mass.is_finite() && mass > 0.0) {
            return None;
        }
        self.items.retain(|w| w.pos != pos);
        self.id_counter += 1;
        let id = format!("w-{}", self.id_counter);
        self.items.push(PlacedWeight {
            id: id.clone(),
            mass,
            pos,
        });
        self.items.sort_by_key(|w| w.pos);
        Some(id)
    }

    /// Remove a placed weight by id; returns true if something was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|w| w.id != id);
        self.items.len() != before
    }

    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Summed torques (left, right); each is Σ mass·|pos| for its side
    pub fn torques(&self) -> (f64, f64) {
        let left = self
            .items
            .iter()
            .filter(|w| w.pos < 0)
            .map(|w| w.mass * w.pos.abs() as f64)
            .sum();
        let right = self
            .items
            .iter()
            .filter(|w| w.pos > 0)
            .map(|w| w.mass * w.pos.abs() as f64)
            .sum();
        (left, right)
    }

    pub fn is_balanced(&self) -> bool {
        let (left, right) = self.torques();
        left == right
    }

    /// Visual tilt angle: (right − left) / 5, clamped to ±12 degrees
    pub fn tilt_degrees(&self) -> f64 {
        let (left, right) = self.torques();
        ((right - left) / 5.0).clamp(-12.0, 12.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_tip_scenario() {
        // 5 kg at -2 and 2 kg at +5: 10 vs 10, balanced
        let mut beam = BeamBalance::new();
        beam.place(5.0, -2).unwrap();
        beam.place(2.0, 5).unwrap();

        let (left, right) = beam.torques();
        assert_eq!(left, 10.0);
        assert_eq!(right, 10.0);
        assert!(beam.is_balanced());
        assert_eq!(beam.tilt_degrees(), 0.0);
    }

    #[test]
    fn test_pivot_rejected_and_occupied_slot_replaced() {
        let mut beam = BeamBalance::new();
        assert!(beam.place(1.0, 0).is_none());
        assert!(beam.place(1.0, 7).is_none());

        beam.place(1.0, 3).unwrap();
        beam.place(5.0, 3).unwrap();
        assert_eq!(beam.items().len(), 1);
        assert_eq!(beam.items()[0].mass, 5.0);
    }

    #[test]
    fn test_snap_to_slot() {
        assert_eq!(BeamBalance::snap_to_slot(1.0), 5);
        assert_eq!(BeamBalance::snap_to_slot(-1.0), -5);
        assert_eq!(BeamBalance::snap_to_slot(0.42), 2);
        // near-pivot values nudge to the side they came from
        assert_eq!(BeamBalance::snap_to_slot(0.05), 1);
        assert_eq!(BeamBalance::snap_to_slot(-0.05), -1);
        // beyond the beam ends clamps to the outermost slots
        assert_eq!(BeamBalance::snap_to_slot(1.7), 5);
    }

    #[test]
    fn test_tilt_clamped() {
        let mut beam = BeamBalance::new();
        beam.place(5.0, 5).unwrap();
        beam.place(5.0, 4).unwrap();
        beam.place(5.0, 3).unwrap();
        // right torque 60 -> raw tilt 12, clamped boundary
        assert_eq!(beam.tilt_degrees(), 12.0);
    }

    #[test]
    fn test_ids_unique_under_rapid_creation() {
        let mut beam = BeamBalance::new();
        let a = beam.place(1.0, 1).unwrap();
        let b = beam.place(1.0, 2).unwrap();
        assert_ne!(a, b);
        beam.remove(&a);
        let c = beam.place(1.0, 1).unwrap();
        assert_ne!(b, c);
    }
}
