//! Values that are either constant or given per optimization period.
//!
//! Ambient temperatures, storage loss terms, and COP curves may be supplied
//! as a single value for the whole horizon or as one value per period.
//! [`Profile`] keeps that distinction explicit and broadcasts a constant
//! against a series when two profiles are combined.

use thiserror::Error;

/// Errors from combining profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// Two series were combined element-wise but differ in length.
    #[error("series lengths differ: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// A value for every optimization period.
#[derive(Debug, Clone, PartialEq)]
pub enum Profile<T> {
    /// Same value in every period.
    Constant(T),
    /// One value per period.
    Series(Vec<T>),
}

impl<T> Profile<T> {
    /// Returns the number of periods, or `None` for a constant.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Constant(_) => None,
            Self::Series(values) => Some(values.len()),
        }
    }

    /// Returns `true` for a series without any periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Series(values) if values.is_empty())
    }

    /// Returns the value in period `t`.
    ///
    /// A constant has a value in every period.
    #[must_use]
    pub fn at(&self, t: usize) -> Option<&T> {
        match self {
            Self::Constant(value) => Some(value),
            Self::Series(values) => values.get(t),
        }
    }

    /// Returns the distinct values, one for a constant.
    #[must_use]
    pub fn values(&self) -> &[T] {
        match self {
            Self::Constant(value) => std::slice::from_ref(value),
            Self::Series(values) => values,
        }
    }

    /// Applies `f` to every value.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Profile<U> {
        match self {
            Self::Constant(value) => Profile::Constant(f(value)),
            Self::Series(values) => Profile::Series(values.iter().map(f).collect()),
        }
    }

    /// Combines two profiles period by period.
    ///
    /// A constant is broadcast against a series; two constants yield a constant.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::LengthMismatch`] if both are series of different length.
    pub fn zip_with<U, V>(
        &self,
        other: &Profile<U>,
        mut f: impl FnMut(&T, &U) -> V,
    ) -> Result<Profile<V>, ProfileError> {
        Ok(match (self, other) {
            (Self::Constant(a), Profile::Constant(b)) => Profile::Constant(f(a, b)),
            (Self::Constant(a), Profile::Series(ys)) => {
                Profile::Series(ys.iter().map(|b| f(a, b)).collect())
            }
            (Self::Series(xs), Profile::Constant(b)) => {
                Profile::Series(xs.iter().map(|a| f(a, b)).collect())
            }
            (Self::Series(xs), Profile::Series(ys)) => {
                if xs.len() != ys.len() {
                    return Err(ProfileError::LengthMismatch {
                        left: xs.len(),
                        right: ys.len(),
                    });
                }
                Profile::Series(xs.iter().zip(ys).map(|(a, b)| f(a, b)).collect())
            }
        })
    }
}

impl<T> From<T> for Profile<T> {
    fn from(value: T) -> Self {
        Self::Constant(value)
    }
}
