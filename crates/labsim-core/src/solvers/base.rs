//! Base solver traits.

use nalgebra::DVector;

/// Core solver trait for numerical integration
pub trait Solver {
    /// Get current state vector
    fn state(&self) -> &DVector<f64>;

    /// Get mutable reference to state vector
    fn state_mut(&mut self) -> &mut DVector<f64>;

    /// Set state vector
    fn set_state(&mut self, state: DVector<f64>);

    /// Reset solver to its initial state
    fn reset(&mut self);

    /// Order of the method
    fn order(&self) -> usize;

    /// Number of stages
    fn stages(&self) -> usize;

    /// Is this an explicit solver?
    fn is_explicit(&self) -> bool;
}

/// Explicit fixed-step solver trait
pub trait ExplicitSolver: Solver {
    /// Advance the state by one step of size `dt`, evaluating the
    /// right-hand side `f(x, t)` as many times as the method requires.
    fn step<F>(&mut self, f: F, t: f64, dt: f64)
    where
        F: FnMut(&DVector<f64>, f64) -> DVector<f64>;
}
