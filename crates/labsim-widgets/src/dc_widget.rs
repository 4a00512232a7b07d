//! DC circuit lab: tune a series loop to hit a target current.

use rand::Rng;

use labsim_core::challenge::{Challenge, ChallengeSession};
use labsim_core::progress::{ProgressStore, StoreError};
use labsim_core::statics::{SeriesCircuit, SeriesSolution};

const LEVEL_KEY: &str = "ece_dc";
const REWARD_STARS: u8 = 3;
const REWARD_XP: u32 = 50;

/// Relative tolerance on the target current
const TOLERANCE: f64 = 0.05;

/// Series DC circuit game. The player moves the voltage and resistance
/// sliders until the loop current matches a random target within 5%.
#[derive(Debug, Clone)]
pub struct DcCircuitWidget {
    circuit: SeriesCircuit,
    challenge: Challenge,
    message: Option<String>,
    session: ChallengeSession,
}

impl DcCircuitWidget {
    /// Sandbox defaults with an initial target of 0.05–0.25 A
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let target = round_to(0.05 + rng.gen::<f64>() * 0.2, 3);
        Self {
            circuit: SeriesCircuit::default(),
            challenge: Challenge::new(target, TOLERANCE),
            message: None,
            session: ChallengeSession::new(LEVEL_KEY),
        }
    }

    pub fn circuit(&self) -> SeriesCircuit {
        self.circuit
    }

    pub fn target(&self) -> f64 {
        self.challenge.target
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.session.is_completed()
    }

    /// Derived quantities for the readout panel
    pub fn solution(&self) -> SeriesSolution {
        self.circuit.solve()
    }

    pub fn set_voltage(&mut self, volts: f64) {
        self.circuit.voltage = volts;
    }

    pub fn set_resistance(&mut self, index: usize, ohms: f64) {
        if let Some(slot) = self.circuit.resistances.get_mut(index) {
            *slot = ohms;
        }
    }

    /// Draw a fresh target of roughly 0.02–0.32 A, floored at 1 mA
    pub fn new_target<R: Rng>(&mut self, rng: &mut R) {
        let target = (0.02 + rng.gen::<f64>() * 0.3).max(0.001);
        self.challenge = Challenge::new(round_to(target, 4), TOLERANCE);
        self.message = None;
    }

    /// Re-roll the whole challenge: a standard battery voltage, random
    /// resistances, and a target scaled 0.6–1.8x around the current those
    /// values imply, so it is always reachable.
    pub fn randomize_challenge<R: Rng>(&mut self, rng: &mut R) {
        let voltages = [3.0, 5.0, 9.0, 12.0];
        let voltage = voltages[rng.gen_range(0..voltages.len())];
        let resistances = [
            (20.0 + rng.gen::<f64>() * 300.0).round(),
            (20.0 + rng.gen::<f64>() * 300.0).round(),
            (20.0 + rng.gen::<f64>() * 300.0).round(),
        ];
        self.circuit = SeriesCircuit::new(voltage, resistances);

        let implied = self.circuit.solve().current;
        let factor = 0.6 + rng.gen::<f64>() * 1.2;
        self.challenge = Challenge::new(round_to(implied * factor, 4), TOLERANCE);
        self.message = None;
    }

    /// Compare the loop current against the target and award the level on
    /// the first success.
    pub fn check<S: ProgressStore>(&mut self, store: &mut S) -> Result<bool, StoreError> {
        let current = self.circuit.solve().current;
        if self.challenge.evaluate(current).is_success() {
            self.message = Some(format!(
                "Success! Current = {current:.4} A (target {} A)",
                self.challenge.target
            ));
            self.session.complete_once(store, REWARD_STARS, REWARD_XP)?;
            Ok(true)
        } else {
            self.message = Some(format!(
                "Not yet. Current = {current:.4} A; target = {} A. \
                 Try lowering resistances or increasing voltage.",
                self.challenge.target
            ));
            Ok(false)
        }
    }

    /// Restore the 5 V / 100 Ω defaults; target and completion are kept
    pub fn reset(&mut self) {
        self.circuit = SeriesCircuit::default();
        self.message = None;
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
