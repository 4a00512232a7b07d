//! Challenge targets and tolerance-band evaluation.
//!
//! Every game poses the same shape of problem: hit a numeric target within
//! a relative tolerance. The target is drawn from a game-specific range and
//! can be regenerated at any time; completing a challenge awards a fixed
//! (stars, xp) to the progress store, at most once per session.

use std::ops::Range;

use rand::Rng;

use labsim_types::Progress;

use crate::progress::{ProgressStore, StoreError};

/// Result of checking the player's current value against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Within the tolerance band
    Success,
    /// Outside the band; try again
    Retry,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// A numeric target with a relative tolerance band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Challenge {
    pub target: f64,
    /// Relative tolerance, e.g. 0.05 for a ±5% band
    pub tolerance: f64,
}

impl Challenge {
    pub fn new(target: f64, tolerance: f64) -> Self {
        Self { target, tolerance }
    }

    /// Draw a target uniformly from `range`
    pub fn random<R: Rng>(rng: &mut R, range: Range<f64>, tolerance: f64) -> Self {
        let target = range.start + rng.gen::<f64>() * (range.end - range.start);
        Self { target, tolerance }
    }

    /// Replace the target with a fresh draw, keeping the tolerance
    pub fn regenerate<R: Rng>(&mut self, rng: &mut R, range: Range<f64>) {
        self.target = range.start + rng.gen::<f64>() * (range.end - range.start);
    }

    /// Success iff `|current - target| <= |target| * tolerance`. A zero
    /// target therefore only accepts exactly zero.
    pub fn evaluate(&self, current: f64) -> Outcome {
        if (current - self.target).abs() <= self.target.abs() * self.tolerance {
            Outcome::Success
        } else {
            Outcome::Retry
        }
    }
}

/// Tracks whether this session has already awarded its level completion.
/// Checks can keep succeeding; the store is written only on the first one.
/// Resetting requires constructing a new session.
#[derive(Debug, Clone)]
pub struct ChallengeSession {
    level_key: String,
    completed: bool,
}

impl ChallengeSession {
    pub fn new(level_key: impl Into<String>) -> Self {
        Self {
            level_key: level_key.into(),
            completed: false,
        }
    }

    pub fn level_key(&self) -> &str {
        &self.level_key
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Record a completion for this session's level. The first call writes
    /// `(stars, xp)` to the store and returns `true`; every later call is a
    /// no-op returning `false`. A failed write leaves the session open so
    /// the award can be retried.
    pub fn complete_once<S: ProgressStore>(
        &mut self,
        store: &mut S,
        stars: u8,
        xp: u32,
    ) -> Result<bool, StoreError> {
        if self.completed {
            return Ok(false);
        }
        store.write(&self.level_key, Progress::new(stars, xp))?;
        self.completed = true;
        Ok(true)
    }
}
