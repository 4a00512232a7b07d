//! Sorting step types.
//!
//! A sort run is recorded as an ordered sequence of atomic steps. Replaying
//! the first `k` steps against the base array reproduces the exact visual
//! state after `k` actions, which is what drives forward stepping, backward
//! stepping (replay to `k - 1`) and timed playback.

use serde::{Deserialize, Serialize};

/// One atomic action recorded during a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SortStep {
    /// Two positions were compared; no data changes
    Compare { i: usize, j: usize },
    /// The values at two positions were exchanged
    Swap { i: usize, j: usize },
    /// A value was written to a position (insertion shifts, merge writes)
    Set { i: usize, value: u32 },
}

/// A recorded sort: the untouched base array plus the full step sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTrace {
    /// The initial array the steps apply to
    pub base: Vec<u32>,

    /// Ordered, replayable steps
    pub steps: Vec<SortStep>,
}

impl StepTrace {
    pub fn new(base: Vec<u32>, steps: Vec<SortStep>) -> Self {
        Self { base, steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_json_shape() {
        let step = SortStep::Set { i: 3, value: 42 };
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(json, r#"{"type":"set","i":3,"value":42}"#);

        let back: SortStep = serde_json::from_str(&json).unwrap();
        assert_eq!(back, step);
    }
}
