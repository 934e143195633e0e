//! Lineal: educational linear algebra in pure Rust.
//!
//! Lineal provides small, immutable vector and matrix value types with the
//! classic arithmetic surface (element-wise sums, dot and cross products,
//! matrix products) plus a hit-or-miss Monte Carlo integrator for studying
//! sampling error.
//!
//! # Quick Start
//!
//! ```
//! use lineal::prelude::*;
//!
//! let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
//!
//! let product = a.matmul(&b).unwrap();
//! assert_eq!(product.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
//!
//! let v = Vector::from_slice(&[1.0, 0.0]);
//! let image = a.matvec(&v).unwrap();
//! assert_eq!(image.as_slice(), &[1.0, 3.0]);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`monte_carlo`]: Hit-or-miss integral estimation
//! - [`error`]: The crate-wide error type
//! - [`prelude`]: Convenience re-exports

pub mod error;
pub mod monte_carlo;
pub mod prelude;
pub mod primitives;

pub use error::LinealError;
