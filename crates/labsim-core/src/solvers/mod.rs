//! Fixed-step numerical integration solvers.
//!
//! The interactive models only ever take small fixed steps driven by UI
//! ticks, so the solvers here are deliberately simple explicit methods:
//! - `Euler` — first order, used where intuition-friendly curves matter
//!   more than accuracy (RLC step response)
//! - `Rk4` — classic fourth order, used for the live mass-spring-damper
//!   animation where energy drift would be visible

mod base;
mod euler;
mod rk4;

pub use base::*;
pub use euler::Euler;
pub use rk4::Rk4;
