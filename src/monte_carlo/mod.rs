//! Monte Carlo estimation of definite integrals.
//!
//! Hit-or-miss sampling over a bounding box, with seedable randomness and an
//! error-versus-budget sweep for studying convergence.

mod integrate;
mod rng;

pub use integrate::{sample_sizes, ErrorPoint, HitOrMissIntegrator, IntegralEstimate};
pub use rng::MonteCarloRng;
