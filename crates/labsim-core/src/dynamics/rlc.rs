//! Series RLC step response.
//!
//! Two coupled first-order ODEs integrated with explicit Euler:
//! ```text
//! di/dt  = (V - R*i - vC) / L
//! dvC/dt = i / C
//! ```
//!
//! Unlike the live oscillator this model is recomputed wholesale whenever a
//! slider moves, so it uses a fixed number of subdivisions per simulated
//! duration instead of wall-clock pacing.

use nalgebra::DVector;

use crate::solvers::{Euler, ExplicitSolver, Solver};

/// Number of Euler subdivisions per simulated duration
pub const RLC_STEPS: usize = 600;

/// Series RLC circuit parameters in slider units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RlcParams {
    /// Resistance in ohms
    pub resistance: f64,

    /// Inductance in millihenries
    pub inductance_mh: f64,

    /// Capacitance in microfarads
    pub capacitance_uf: f64,

    /// Step input voltage in volts
    pub step_voltage: f64,
}

impl RlcParams {
    pub fn new(resistance: f64, inductance_mh: f64, capacitance_uf: f64) -> Self {
        Self {
            resistance,
            inductance_mh,
            capacitance_uf,
            step_voltage: 5.0,
        }
    }
}

impl Default for RlcParams {
    /// Sandbox defaults: 100 Ω, 10 mH, 100 µF, 5 V step
    fn default() -> Self {
        Self::new(100.0, 10.0, 100.0)
    }
}

/// One sample of the computed response
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RlcPoint {
    /// Time in seconds
    pub t: f64,

    /// Branch current in amperes
    pub current: f64,

    /// Capacitor voltage in volts
    pub v_cap: f64,
}

impl RlcParams {
    /// Simulate the step response from rest over `duration` seconds.
    ///
    /// Guards: a non-positive L or C zeroes the corresponding derivative
    /// instead of dividing by zero, and any non-finite intermediate state is
    /// clamped back to 0 so a single divergent step cannot permanently
    /// corrupt the curve. Both are documented, deliberate trades of strict
    /// correctness for visual stability.
    pub fn simulate(&self, duration: f64) -> Vec<RlcPoint> {
        let l_si = self.inductance_mh / 1_000.0;
        let c_si = self.capacitance_uf / 1_000_000.0;
        let r = self.resistance;
        let v_step = self.step_voltage;
        let dt = duration / RLC_STEPS as f64;

        // state = [i, vC], starting from rest
        let mut solver = Euler::new(DVector::from_vec(vec![0.0, 0.0]));
        let mut points = Vec::with_capacity(RLC_STEPS + 1);
        points.push(RlcPoint {
            t: 0.0,
            current: 0.0,
            v_cap: 0.0,
        });

        let mut t = 0.0;
        for _ in 0..RLC_STEPS {
            solver.step(
                |state, _t| {
                    let i = state[0];
                    let v_c = state[1];
                    let di_dt = if l_si > 0.0 {
                        (v_step - r * i - v_c) / l_si
                    } else {
                        0.0
                    };
                    let dvc_dt = if c_si > 0.0 { i / c_si } else { 0.0 };
                    DVector::from_vec(vec![di_dt, dvc_dt])
                },
                t,
                dt,
            );
            t += dt;

            // clamp numerical divergence
            let state = solver.state_mut();
            for value in state.iter_mut() {
                if !value.is_finite() {
                    *value = 0.0;
                }
            }

            points.push(RlcPoint {
                t,
                current: state[0],
                v_cap: state[1],
            });
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_count_and_timebase() {
        let points = RlcParams::default().simulate(0.05);
        assert_eq!(points.len(), RLC_STEPS + 1);
        assert_eq!(points[0].t, 0.0);
        assert_relative_eq!(points.last().unwrap().t, 0.05, epsilon = 1e-9);
    }

    #[test]
    fn test_overdamped_settles_to_step_voltage() {
        // heavily damped: vC rises monotonically towards 5 V
        let params = RlcParams::new(100.0, 10.0, 100.0);
        let points = params.simulate(0.1);
        let last = points.last().unwrap();
        assert_relative_eq!(last.v_cap, 5.0, epsilon = 0.1);
        // current has decayed to nearly zero once charged
        assert!(last.current.abs() < 1e-2);
    }

    #[test]
    fn test_underdamped_overshoots() {
        // small R, big L, small C: ringing past the step voltage
        let params = RlcParams::new(1.0, 200.0, 10.0);
        let points = params.simulate(0.2);
        let max_vc = points.iter().map(|p| p.v_cap).fold(f64::MIN, f64::max);
        assert!(max_vc > 5.5, "expected overshoot, max vC = {max_vc}");
    }

    #[test]
    fn test_zero_inductance_freezes_current() {
        // L = 0 zeroes di/dt rather than dividing by zero; from rest the
        // whole response then stays at zero
        let params = RlcParams::new(100.0, 0.0, 100.0);
        let points = params.simulate(0.05);
        assert!(points.iter().all(|p| p.current == 0.0 && p.v_cap == 0.0));
    }

    #[test]
    fn test_all_samples_finite() {
        // deliberately stiff configuration that would blow up unclamped
        let params = RlcParams::new(0.0, 1e-9, 1e-9);
        let points = params.simulate(1.0);
        assert!(points.iter().all(|p| p.current.is_finite() && p.v_cap.is_finite()));
    }
}
