//! Oscillator lab: live mass-spring-damper with an amplitude challenge.

use rand::Rng;

use labsim_core::challenge::ChallengeSession;
use labsim_core::dynamics::{ConfigError, ShmParams, ShmSimulator, TracePoint};
use labsim_core::progress::{ProgressStore, StoreError};

const LEVEL_KEY: &str = "mech_shm";
const REWARD_STARS: u8 = 3;
const REWARD_XP: u32 = 50;

/// Window over which the peak amplitude is measured, in seconds
const PEAK_WINDOW: f64 = 2.0;

/// Acceptance is slightly forgiving: peak may exceed the target by 2%
const FORGIVENESS: f64 = 1.02;

/// The challenge: keep the recent peak amplitude at or below a target
/// number of millimeters. The player tunes damping and initial conditions
/// to get there.
#[derive(Debug, Clone)]
pub struct ShmWidget {
    sim: ShmSimulator,
    target_mm: f64,
    message: Option<String>,
    session: ChallengeSession,
    /// Clock value at the previous tick, in seconds
    last_tick: Option<f64>,
}

impl ShmWidget {
    /// Sandbox defaults with a random initial target of 20–80 mm
    pub fn new<R: Rng>(rng: &mut R) -> Result<Self, ConfigError> {
        let sim = ShmSimulator::new(ShmParams::default(), 0.12, 0.0, 1.0 / 120.0)?;
        Ok(Self {
            sim,
            target_mm: round1(20.0 + rng.gen::<f64>() * 60.0),
            message: None,
            session: ChallengeSession::new(LEVEL_KEY),
            last_tick: None,
        })
    }

    pub fn sim(&self) -> &ShmSimulator {
        &self.sim
    }

    pub fn target_mm(&self) -> f64 {
        self.target_mm
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.session.is_completed()
    }

    /// Displacement history for the plot
    pub fn trace(&self) -> &[TracePoint] {
        self.sim.trace()
    }

    /// Slider updates; invalid values are reported and ignored
    pub fn set_params(&mut self, params: ShmParams) {
        if let Err(err) = self.sim.set_params(params) {
            self.message = Some(err.to_string());
        }
    }

    pub fn set_dt(&mut self, dt: f64) {
        if let Err(err) = self.sim.set_dt(dt) {
            self.message = Some(err.to_string());
        }
    }

    pub fn set_initial(&mut self, x0: f64, v0: f64) {
        self.sim.set_initial(x0, v0);
    }

    pub fn play(&mut self) {
        self.sim.start();
        self.last_tick = None;
    }

    pub fn pause(&mut self) {
        self.sim.pause();
        self.last_tick = None;
    }

    pub fn step(&mut self) {
        self.sim.step_once();
    }

    pub fn reset(&mut self) {
        self.sim.reset();
        self.last_tick = None;
        self.message = None;
    }

    /// Frame callback: catch the physics up with the caller's clock.
    /// Sub-stepping is bounded inside the simulator, so a stalled tab
    /// cannot freeze the loop.
    pub fn tick(&mut self, now_secs: f64) {
        let elapsed = match self.last_tick {
            Some(last) => now_secs - last,
            None => 0.0,
        };
        self.last_tick = Some(now_secs);
        self.sim.advance(elapsed);
    }

    /// Draw a fresh target of 5–85 mm
    pub fn new_target<R: Rng>(&mut self, rng: &mut R) {
        self.target_mm = round1(5.0 + rng.gen::<f64>() * 80.0);
        self.message = None;
    }

    /// Check the trailing peak against the target and award the level on
    /// the first success.
    pub fn check<S: ProgressStore>(&mut self, store: &mut S) -> Result<bool, StoreError> {
        let Some(peak) = self.sim.recent_peak(PEAK_WINDOW) else {
            self.message = Some("Run the simulation first.".to_string());
            return Ok(false);
        };
        let peak_mm = peak * 1000.0;
        if peak_mm <= self.target_mm * FORGIVENESS {
            self.message = Some(format!(
                "Success! max {peak_mm:.2} mm <= target {:.1} mm",
                self.target_mm
            ));
            self.session.complete_once(store, REWARD_STARS, REWARD_XP)?;
            Ok(true)
        } else {
            self.message = Some(format!(
                "Not yet. Recent max = {peak_mm:.2} mm; target = {:.1} mm. \
                 Try increasing damping or reducing initial displacement.",
                self.target_mm
            ));
            Ok(false)
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
