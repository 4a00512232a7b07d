//! Mass-spring-damper simulator.
//!
//! Second-order ODE integrated with RK4:
//! ```text
//! x' = v
//! v' = (-k*x - c*v) / m
//! ```
//!
//! The simulator is driven by widget ticks: each tick reports the wall-time
//! elapsed since the previous tick and the simulator catches up with a
//! bounded number of fixed-size sub-steps. All state lives in this struct;
//! nothing is captured in closures between ticks.

use nalgebra::DVector;

use super::ConfigError;
use crate::solvers::{ExplicitSolver, Rk4, Solver};

/// Upper bound on integration sub-steps applied per tick. Caps worst-case
/// work when a tab was backgrounded and a huge elapsed interval arrives.
pub const MAX_SUBSTEPS: usize = 2000;

/// Physical parameters of the oscillator (SI units)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShmParams {
    /// Mass in kg, must be > 0
    pub mass: f64,

    /// Spring stiffness in N/m, must be >= 0
    pub stiffness: f64,

    /// Viscous damping in N·s/m, must be >= 0
    pub damping: f64,
}

impl ShmParams {
    pub fn new(mass: f64, stiffness: f64, damping: f64) -> Self {
        Self {
            mass,
            stiffness,
            damping,
        }
    }

    /// Reject configurations that would divide by zero or inject NaN
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ConfigError::InvalidMass(self.mass));
        }
        if !(self.stiffness.is_finite() && self.stiffness >= 0.0) {
            return Err(ConfigError::InvalidStiffness(self.stiffness));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        Ok(())
    }
}

impl Default for ShmParams {
    /// Defaults match the sandbox's initial sliders: 0.5 kg, 20 N/m, 0.4 N·s/m
    fn default() -> Self {
        Self::new(0.5, 20.0, 0.4)
    }
}

/// One recorded sample of the displacement history
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    /// Simulation time in seconds
    pub t: f64,

    /// Displacement in meters
    pub x: f64,
}

/// Run state of the animation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

/// Mass-spring-damper simulator with a displacement history buffer
#[derive(Debug, Clone)]
pub struct ShmSimulator {
    params: ShmParams,
    dt: f64,
    x0: f64,
    v0: f64,
    solver: Rk4,
    time: f64,
    /// Wall-time not yet consumed by whole sub-steps
    pending: f64,
    run_state: RunState,
    trace: Vec<TracePoint>,
}

impl ShmSimulator {
    /// Create a simulator at rest at `(x0, v0)`. Fails if the parameters or
    /// the step size are unusable.
    pub fn new(params: ShmParams, x0: f64, v0: f64, dt: f64) -> Result<Self, ConfigError> {
        params.validate()?;
        if !(dt.is_finite() && dt > 0.0) {
            return Err(ConfigError::InvalidTimeStep(dt));
        }
        Ok(Self {
            params,
            dt,
            x0,
            v0,
            solver: Rk4::new(DVector::from_vec(vec![x0, v0])),
            time: 0.0,
            pending: 0.0,
            run_state: RunState::Idle,
            trace: vec![TracePoint { t: 0.0, x: x0 }],
        })
    }

    pub fn params(&self) -> ShmParams {
        self.params
    }

    /// Change physical parameters; takes effect from the next sub-step
    pub fn set_params(&mut self, params: ShmParams) -> Result<(), ConfigError> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Change the integration step size
    pub fn set_dt(&mut self, dt: f64) -> Result<(), ConfigError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(ConfigError::InvalidTimeStep(dt));
        }
        self.dt = dt;
        Ok(())
    }

    /// Change initial conditions and rewind to them
    pub fn set_initial(&mut self, x0: f64, v0: f64) {
        self.x0 = x0;
        self.v0 = v0;
        self.reset();
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Current displacement in meters
    pub fn position(&self) -> f64 {
        self.solver.state()[0]
    }

    /// Current velocity in m/s
    pub fn velocity(&self) -> f64 {
        self.solver.state()[1]
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Recorded displacement history, oldest first
    pub fn trace(&self) -> &[TracePoint] {
        &self.trace
    }

    /// Start the animation loop. Elapsed time starts accumulating from the
    /// next `advance` call.
    pub fn start(&mut self) {
        self.run_state = RunState::Running;
        self.pending = 0.0;
    }

    /// Pause: subsequent `advance` calls apply no steps until restarted
    pub fn pause(&mut self) {
        self.run_state = RunState::Idle;
        self.pending = 0.0;
    }

    /// Rewind to the initial conditions and stop
    pub fn reset(&mut self) {
        self.solver
            .set_state(DVector::from_vec(vec![self.x0, self.v0]));
        self.time = 0.0;
        self.pending = 0.0;
        self.run_state = RunState::Idle;
        self.trace.clear();
        self.trace.push(TracePoint {
            t: 0.0,
            x: self.x0,
        });
    }

    /// Apply exactly one integration step (manual "Step" button); works
    /// whether or not the loop is running.
    pub fn step_once(&mut self) {
        let ShmParams {
            mass,
            stiffness,
            damping,
        } = self.params;
        let dt = self.dt;

        self.solver.step(
            |state, _t| {
                let x = state[0];
                let v = state[1];
                DVector::from_vec(vec![v, (-stiffness * x - damping * v) / mass])
            },
            self.time,
            dt,
        );

        self.time += dt;
        self.trace.push(TracePoint {
            t: self.time,
            x: self.solver.state()[0],
        });
    }

    /// Catch up with `elapsed` seconds of wall time using fixed sub-steps,
    /// capped at [`MAX_SUBSTEPS`]. Returns the number of steps applied.
    /// Does nothing while idle.
    pub fn advance(&mut self, elapsed: f64) -> usize {
        if self.run_state != RunState::Running || !(elapsed.is_finite() && elapsed > 0.0) {
            return 0;
        }

        self.pending += elapsed;
        let mut applied = 0;
        while self.pending + 1e-12 >= self.dt && applied < MAX_SUBSTEPS {
            self.step_once();
            self.pending -= self.dt;
            applied += 1;
        }
        // drop any backlog the cap refused, so a long stall does not turn
        // into a burst on the next tick
        if applied == MAX_SUBSTEPS {
            self.pending = 0.0;
        }
        applied
    }

    /// Largest |x| over the trailing `window` seconds of the trace
    pub fn recent_peak(&self, window: f64) -> Option<f64> {
        let cutoff = self.time - window;
        self.trace
            .iter()
            .filter(|p| p.t >= cutoff)
            .map(|p| p.x.abs())
            .fold(None, |acc, x| Some(acc.map_or(x, |a: f64| a.max(x))))
    }

    /// Total mechanical energy: ½mv² + ½kx²
    pub fn energy(&self) -> f64 {
        let x = self.position();
        let v = self.velocity();
        0.5 * self.params.mass * v * v + 0.5 * self.params.stiffness * x * x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_non_positive_mass() {
        let err = ShmSimulator::new(ShmParams::new(0.0, 10.0, 0.0), 0.1, 0.0, 0.01).unwrap_err();
        assert_eq!(err, ConfigError::InvalidMass(0.0));
        assert!(ShmParams::new(-1.0, 10.0, 0.0).validate().is_err());
    }

    #[test]
    fn test_free_particle_velocity_constant() {
        // k = 0, c = 0: no forces, so velocity never changes and energy
        // (all kinetic) is conserved exactly up to rounding
        let mut sim = ShmSimulator::new(ShmParams::new(1.0, 0.0, 0.0), 0.0, 0.7, 0.01).unwrap();
        let e0 = sim.energy();
        for _ in 0..5_000 {
            sim.step_once();
        }
        assert_relative_eq!(sim.velocity(), 0.7, epsilon = 1e-12);
        assert_relative_eq!(sim.energy(), e0, epsilon = 1e-12);
    }

    #[test]
    fn test_undamped_energy_no_secular_growth() {
        // c = 0: total energy must stay within discretization tolerance over
        // many periods (no steady drift)
        let params = ShmParams::new(0.5, 20.0, 0.0);
        let mut sim = ShmSimulator::new(params, 0.12, 0.0, 1.0 / 120.0).unwrap();
        let e0 = sim.energy();
        for _ in 0..10_000 {
            sim.step_once();
        }
        assert_relative_eq!(sim.energy(), e0, max_relative = 1e-4);
    }

    #[test]
    fn test_damped_amplitude_decays() {
        let mut sim = ShmSimulator::new(ShmParams::new(0.5, 20.0, 1.0), 0.12, 0.0, 1.0 / 120.0)
            .unwrap();
        for _ in 0..2_000 {
            sim.step_once();
        }
        assert!(sim.position().abs() < 0.01);
    }

    #[test]
    fn test_advance_bounded_and_gated() {
        let mut sim = ShmSimulator::new(ShmParams::default(), 0.1, 0.0, 0.01).unwrap();

        // idle: ticks apply nothing
        assert_eq!(sim.advance(1.0), 0);

        sim.start();
        assert_eq!(sim.advance(0.1), 10);

        // absurd elapsed time is capped
        assert_eq!(sim.advance(1e6), MAX_SUBSTEPS);

        sim.pause();
        assert_eq!(sim.advance(0.1), 0);
    }

    #[test]
    fn test_reset_restores_initial_conditions() {
        let mut sim = ShmSimulator::new(ShmParams::default(), 0.12, 0.5, 0.01).unwrap();
        sim.start();
        sim.advance(0.5);
        sim.reset();

        assert_eq!(sim.position(), 0.12);
        assert_eq!(sim.velocity(), 0.5);
        assert_eq!(sim.time(), 0.0);
        assert_eq!(sim.trace().len(), 1);
        assert!(!sim.is_running());
    }

    #[test]
    fn test_recent_peak_window() {
        let mut sim = ShmSimulator::new(ShmParams::new(1.0, 0.0, 0.0), 0.0, 1.0, 0.1).unwrap();
        for _ in 0..50 {
            sim.step_once(); // x grows linearly, 0.1 per step
        }
        // full history peak is the final position
        let peak = sim.recent_peak(10.0).unwrap();
        assert_relative_eq!(peak, sim.position(), epsilon = 1e-12);
        // narrow window still includes the latest point
        assert!(sim.recent_peak(0.05).is_some());
    }
}
