//! Forward Euler method for numerical integration

use nalgebra::DVector;

use super::{ExplicitSolver, Solver};

/// Explicit forward Euler method
///
/// First-order, single-stage explicit integration method.
///
/// # Mathematical Form
/// ```text
/// x_{n+1} = x_n + h * f(x_n, t_n)
/// ```
///
/// # Note
/// The cheapest solver per step but also the least accurate. Good enough
/// for the RLC sandbox, which recomputes its whole curve from rest on every
/// parameter change and only needs a pedagogically convincing shape.
#[derive(Debug, Clone)]
pub struct Euler {
    state: DVector<f64>,
    initial: DVector<f64>,
}

impl Euler {
    /// Create a new Euler solver with the given initial state
    pub fn new(initial: DVector<f64>) -> Self {
        Self {
            state: initial.clone(),
            initial,
        }
    }
}

impl Solver for Euler {
    fn state(&self) -> &DVector<f64> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut DVector<f64> {
        &mut self.state
    }

    fn set_state(&mut self, state: DVector<f64>) {
        self.state = state;
    }

    fn reset(&mut self) {
        self.state = self.initial.clone();
    }

    fn order(&self) -> usize {
        1
    }

    fn stages(&self) -> usize {
        1
    }

    fn is_explicit(&self) -> bool {
        true
    }
}

impl ExplicitSolver for Euler {
    fn step<F>(&mut self, mut f: F, t: f64, dt: f64)
    where
        F: FnMut(&DVector<f64>, f64) -> DVector<f64>,
    {
        self.state = &self.state + dt * f(&self.state, t);
    }
}
