//! RLC sandbox: step-response curve recomputed on every slider move.

use labsim_core::challenge::ChallengeSession;
use labsim_core::dynamics::{RlcParams, RlcPoint};
use labsim_core::progress::{ProgressStore, StoreError};

const LEVEL_KEY: &str = "ece_rlc";
const REWARD_STARS: u8 = 3;
const REWARD_XP: u32 = 50;

/// Completion band: final capacitor voltage within this of the step input
const SETTLE_BAND_V: f64 = 0.1;

/// Simulated window bounds in seconds
const MIN_DURATION: f64 = 0.005;
const MAX_DURATION: f64 = 0.2;

/// The RLC step-response sandbox. The whole curve is cheap to compute, so
/// any parameter change recomputes it wholesale; the level completes when
/// the player finds a configuration whose capacitor voltage has settled
/// onto the step input by the end of the window.
#[derive(Debug, Clone)]
pub struct RlcWidget {
    params: RlcParams,
    duration: f64,
    curve: Vec<RlcPoint>,
    session: ChallengeSession,
}

impl RlcWidget {
    pub fn new() -> Self {
        let params = RlcParams::default();
        let duration = 0.05;
        Self {
            curve: params.simulate(duration),
            params,
            duration,
            session: ChallengeSession::new(LEVEL_KEY),
        }
    }

    pub fn params(&self) -> RlcParams {
        self.params
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Current response samples for the plot
    pub fn curve(&self) -> &[RlcPoint] {
        &self.curve
    }

    pub fn is_completed(&self) -> bool {
        self.session.is_completed()
    }

    pub fn set_resistance(&mut self, ohms: f64) {
        self.params.resistance = ohms;
        self.recompute();
    }

    pub fn set_inductance_mh(&mut self, mh: f64) {
        self.params.inductance_mh = mh;
        self.recompute();
    }

    pub fn set_capacitance_uf(&mut self, uf: f64) {
        self.params.capacitance_uf = uf;
        self.recompute();
    }

    pub fn set_duration(&mut self, secs: f64) {
        self.duration = secs.clamp(MIN_DURATION, MAX_DURATION);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.curve = self.params.simulate(self.duration);
    }

    /// True when the curve has settled onto the step voltage
    pub fn is_settled(&self) -> bool {
        match self.curve.last() {
            Some(last) => (last.v_cap - self.params.step_voltage).abs() <= SETTLE_BAND_V,
            None => false,
        }
    }

    /// Award the level if the current curve settles. Called by the host
    /// after each parameter change, mirroring the auto-check on recompute.
    pub fn maybe_complete<S: ProgressStore>(&mut self, store: &mut S) -> Result<bool, StoreError> {
        if !self.is_settled() {
            return Ok(false);
        }
        self.session.complete_once(store, REWARD_STARS, REWARD_XP)
    }
}

impl Default for RlcWidget {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labsim_core::dynamics::RLC_STEPS;
    use labsim_core::progress::MemoryStore;
    use labsim_types::Progress;

    #[test]
    fn test_curve_recomputed_on_change() {
        let mut w = RlcWidget::new();
        assert_eq!(w.curve().len(), RLC_STEPS + 1);
        let before = w.curve().last().unwrap().v_cap;

        w.set_resistance(10.0);
        let after = w.curve().last().unwrap().v_cap;
        assert_ne!(before, after);
        assert_eq!(w.curve().len(), RLC_STEPS + 1);
    }

    #[test]
    fn test_duration_clamped() {
        let mut w = RlcWidget::new();
        w.set_duration(10.0);
        assert_eq!(w.duration(), 0.2);
        w.set_duration(0.0);
        assert_eq!(w.duration(), 0.005);
    }

    #[test]
    fn test_settled_configuration_completes_once() {
        let mut w = RlcWidget::new();
        // defaults over a longer window are overdamped and fully settled
        w.set_duration(0.1);
        assert!(w.is_settled());

        let mut store = MemoryStore::new();
        assert!(w.maybe_complete(&mut store).unwrap());
        assert!(!w.maybe_complete(&mut store).unwrap());
        assert_eq!(store.read("ece_rlc"), Progress::new(3, 50));
    }

    #[test]
    fn test_unsettled_configuration_does_not_complete() {
        let mut w = RlcWidget::new();
        // short window: the capacitor has barely started charging
        w.set_duration(0.005);
        assert!(!w.is_settled());

        let mut store = MemoryStore::new();
        assert!(!w.maybe_complete(&mut store).unwrap());
        assert!(store.is_empty());
    }
}
