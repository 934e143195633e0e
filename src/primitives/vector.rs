//! Vector type for 1D numeric data.

use std::fmt;
use std::ops::{Add, Index, Mul, Sub};
use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::error::LinealError;

/// A fixed-dimension vector of numeric components.
///
/// The dimension is set at construction; every operation returns a new
/// `Vector` rather than mutating in place.
///
/// # Examples
///
/// ```
/// use lineal::primitives::Vector;
///
/// let v = Vector::from_slice(&[3.0, 4.0]);
/// assert_eq!(v.len(), 2);
/// assert_eq!(v.norm(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Copy> Vector<T> {
    /// Creates a vector that takes ownership of its components.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Creates a vector by copying a slice of components.
    #[must_use]
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Returns the dimension of the vector.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets the component at `idx`, or `None` past the end.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<T> {
        self.data.get(idx).copied()
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the components.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the components as an owned `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl Vector<f64> {
    /// Element-wise sum of two vectors.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DimensionMismatch`] if the dimensions differ.
    pub fn add(&self, other: &Self) -> Result<Self, LinealError> {
        self.check_same_dimension(other)?;
        Ok(Self::from_vec(
            self.iter().zip(other.iter()).map(|(a, b)| a + b).collect(),
        ))
    }

    /// Element-wise difference of two vectors.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DimensionMismatch`] if the dimensions differ.
    pub fn sub(&self, other: &Self) -> Result<Self, LinealError> {
        self.check_same_dimension(other)?;
        Ok(Self::from_vec(
            self.iter().zip(other.iter()).map(|(a, b)| a - b).collect(),
        ))
    }

    /// Multiplies each component by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        Self::from_vec(self.iter().map(|c| c * scalar).collect())
    }

    /// Sum of the components.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Euclidean norm, `sqrt(sum(c^2))`.
    ///
    /// The norm of the empty vector is 0.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Dot product, the sum of pairwise component products.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DimensionMismatch`] if the dimensions differ.
    pub fn dot(&self, other: &Self) -> Result<f64, LinealError> {
        self.check_same_dimension(other)?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    /// Cross product of two vectors.
    ///
    /// Two 2D operands produce the scalar `a0*b1 - a1*b0`; two 3D operands
    /// produce the usual orthogonal vector via the determinant expansion.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::UnsupportedDimension`] for any other dimension
    /// combination, including mixed 2D/3D operands.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineal::primitives::{CrossProduct, Vector};
    ///
    /// let a = Vector::from_slice(&[1.0, 0.0, 0.0]);
    /// let b = Vector::from_slice(&[0.0, 1.0, 0.0]);
    /// let c = a.cross(&b).unwrap();
    /// assert_eq!(c, CrossProduct::Vector(Vector::from_slice(&[0.0, 0.0, 1.0])));
    /// ```
    pub fn cross(&self, other: &Self) -> Result<CrossProduct, LinealError> {
        match (self.len(), other.len()) {
            (2, 2) => {
                let (a, b) = (self.as_slice(), other.as_slice());
                Ok(CrossProduct::Scalar(a[0] * b[1] - a[1] * b[0]))
            }
            (3, 3) => {
                let (a, b) = (self.as_slice(), other.as_slice());
                Ok(CrossProduct::Vector(Self::from_vec(vec![
                    a[1] * b[2] - a[2] * b[1],
                    a[2] * b[0] - a[0] * b[2],
                    a[0] * b[1] - a[1] * b[0],
                ])))
            }
            (left, right) => Err(LinealError::UnsupportedDimension { left, right }),
        }
    }

    fn check_same_dimension(&self, other: &Self) -> Result<(), LinealError> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(LinealError::DimensionMismatch {
                expected: self.len().to_string(),
                actual: other.len().to_string(),
            })
        }
    }
}

/// Result of a cross product.
///
/// The 2D case collapses to a signed area; the 3D case stays a vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CrossProduct {
    /// Signed magnitude produced by two 2D operands.
    Scalar(f64),
    /// Orthogonal vector produced by two 3D operands.
    Vector(Vector<f64>),
}

impl CrossProduct {
    /// Returns the scalar form, if this is the 2D case.
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(s) => Some(*s),
            Self::Vector(_) => None,
        }
    }

    /// Returns the vector form, if this is the 3D case.
    #[must_use]
    pub fn as_vector(&self) -> Option<&Vector<f64>> {
        match self {
            Self::Scalar(_) => None,
            Self::Vector(v) => Some(v),
        }
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    /// Renders the vector as `(c1, c2, ..., cn)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, value) in self.data.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}

impl Add for &Vector<f64> {
    type Output = Vector<f64>;

    /// Checked [`Vector::add`] as an operator.
    ///
    /// # Panics
    ///
    /// Panics with the dimension-mismatch message if the dimensions differ.
    fn add(self, rhs: Self) -> Self::Output {
        Vector::add(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Sub for &Vector<f64> {
    type Output = Vector<f64>;

    /// Checked [`Vector::sub`] as an operator.
    ///
    /// # Panics
    ///
    /// Panics with the dimension-mismatch message if the dimensions differ.
    fn sub(self, rhs: Self) -> Self::Output {
        Vector::sub(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Mul<f64> for &Vector<f64> {
    type Output = Vector<f64>;

    /// Scalar scaling, `&v * s`.
    fn mul(self, scalar: f64) -> Self::Output {
        self.mul_scalar(scalar)
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_vector_contract.rs"]
mod contract;
