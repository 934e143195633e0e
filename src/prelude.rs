//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use lineal::prelude::*;
//! ```

pub use crate::error::LinealError;
pub use crate::monte_carlo::{HitOrMissIntegrator, IntegralEstimate, MonteCarloRng};
pub use crate::primitives::{CrossProduct, Matrix, Vector};
