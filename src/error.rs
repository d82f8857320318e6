//! Error types for the wrapper core.
//!
//! Every failure in this crate is a programmer error: building a `Some` out of
//! a bare absence, or unwrapping a value that is not there. The panicking
//! operations (`unwrap`, `unwrap_err`) reuse the [`Display`] text of these
//! variants, while the `try_*` forms return them.
//!
//! [`Display`]: std::fmt::Display

use thiserror::Error;

/// Represents the ways an `Option` or `Result` operation can fail.
///
/// # Examples
///
/// ```rust
/// use chained_viper::{Option, WrapperError};
///
/// let error = Option::<i32>::None.try_unwrap().unwrap_err();
/// assert_eq!(error, WrapperError::UnwrapOnNone);
/// assert_eq!(
///     error.to_string(),
///     "called `Option::unwrap()` on a `None` value"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum WrapperError {
    /// A `Some` was requested for a bare absence. Use `Option::None` instead.
    #[error("cannot construct `Option::Some` from a bare `None`; use `Option::None`")]
    InvalidConstruction,
    /// `unwrap` was called on `Option::None`.
    #[error("called `Option::unwrap()` on a `None` value")]
    UnwrapOnNone,
    /// `unwrap` was called on `Result::Err`. Carries the `Debug` rendering of the error.
    #[error("called `Result::unwrap()` on an `Err` value: {0}")]
    UnwrapOnErr(String),
}

impl WrapperError {
    /// Returns `true` for errors raised while building a wrapper.
    #[inline]
    pub const fn is_construction(&self) -> bool {
        matches!(self, Self::InvalidConstruction)
    }

    /// Returns `true` for errors raised while extracting a value.
    #[inline]
    pub const fn is_unwrap(&self) -> bool {
        matches!(self, Self::UnwrapOnNone | Self::UnwrapOnErr(_))
    }
}
