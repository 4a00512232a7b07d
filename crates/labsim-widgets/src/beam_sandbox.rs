//! Beam bending sandbox: explore δ = F·L³ / (48·E·I).

use labsim_core::challenge::ChallengeSession;
use labsim_core::progress::{ProgressStore, StoreError};
use labsim_core::statics::BeamParams;

const LEVEL_KEY: &str = "mech_beams";
const REWARD_STARS: u8 = 3;
const REWARD_XP: u32 = 50;

/// Deflection readouts needed to finish the level
const TARGET_SCORE: u32 = 3;

/// Exploration sandbox for beam deflection. There is no numeric target:
/// the level completes after the player has computed the deflection a few
/// times with different parameters.
#[derive(Debug, Clone)]
pub struct BeamSandbox {
    params: BeamParams,
    score: u32,
    message: Option<String>,
    session: ChallengeSession,
}

impl BeamSandbox {
    pub fn new() -> Self {
        Self {
            params: BeamParams::default(),
            score: 0,
            message: None,
            session: ChallengeSession::new(LEVEL_KEY),
        }
    }

    pub fn params(&self) -> BeamParams {
        self.params
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.session.is_completed()
    }

    pub fn set_force(&mut self, newtons: f64) {
        self.params.force = newtons;
    }

    pub fn set_length(&mut self, meters: f64) {
        self.params.length = meters;
    }

    pub fn set_modulus_gpa(&mut self, gpa: f64) {
        self.params.modulus_gpa = gpa;
    }

    pub fn set_inertia_cm4(&mut self, cm4: f64) {
        self.params.inertia_cm4 = cm4;
    }

    /// Live deflection for the diagram
    pub fn deflection(&self) -> f64 {
        self.params.center_deflection()
    }

    /// Show the computed deflection and count it towards the score
    pub fn show_deflection(&mut self) {
        let deflection = self.deflection();
        self.message = Some(format!("Deflection at center: {deflection:.3e} m"));
        self.score += 1;
    }

    /// Award the level after enough readouts
    pub fn maybe_complete<S: ProgressStore>(&mut self, store: &mut S) -> Result<bool, StoreError> {
        if self.score < TARGET_SCORE {
            return Ok(false);
        }
        self.session.complete_once(store, REWARD_STARS, REWARD_XP)
    }

    /// Restore the default beam; score and completion are kept
    pub fn reset(&mut self) {
        self.params = BeamParams::default();
        self.message = None;
    }
}

impl Default for BeamSandbox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labsim_core::progress::MemoryStore;
    use labsim_types::Progress;

    #[test]
    fn test_show_deflection_messages_and_scores() {
        let mut sandbox = BeamSandbox::new();
        sandbox.show_deflection();
        assert_eq!(sandbox.score(), 1);
        assert!(sandbox
            .message()
            .unwrap()
            .starts_with("Deflection at center:"));
    }

    #[test]
    fn test_three_readouts_complete_level_once() {
        let mut store = MemoryStore::new();
        let mut sandbox = BeamSandbox::new();

        for expected in [false, false, true] {
            sandbox.show_deflection();
            assert_eq!(sandbox.maybe_complete(&mut store).unwrap(), expected);
        }
        assert_eq!(store.read("mech_beams"), Progress::new(3, 50));

        sandbox.show_deflection();
        assert!(!sandbox.maybe_complete(&mut store).unwrap());
    }

    #[test]
    fn test_reset_restores_default_params() {
        let mut sandbox = BeamSandbox::new();
        sandbox.set_force(5_000.0);
        sandbox.set_length(6.0);
        sandbox.show_deflection();
        sandbox.reset();

        assert_eq!(sandbox.params(), BeamParams::default());
        assert_eq!(sandbox.score(), 1);
        assert!(sandbox.message().is_none());
    }
}
