//! Result type - the outcome of a fallible computation.
//!
//! `Result<T, E>` is either `Ok(T)` or `Err(E)`. It mirrors the combinator set
//! of [`Option`](crate::Option), with `map_err` for the error branch and
//! `ok`/`err` to drop one side into an `Option`.
//!
//! # Examples
//!
//! ```rust
//! use chained_viper::{Option, Result};
//!
//! let parsed: Result<i32, String> = Result::Ok(21);
//! assert_eq!(parsed.map(|x| x * 2), Result::Ok(42));
//!
//! let failed: Result<i32, String> = Result::Err("bad".to_string());
//! assert_eq!(failed.clone().map_err(|e| e.len()), Result::Err(3));
//! assert_eq!(failed.ok(), Option::None);
//! ```

use core::option::Option as StdOption;
use core::result::Result as StdResult;
use std::fmt;

use crate::cursor::{IntoElements, LazyCursor};
use crate::error::WrapperError;
use crate::option::Option;

/// The outcome of a computation: `Ok(T)` on success, `Err(E)` on failure.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<T, E> {
    /// Success value.
    Ok(T),
    /// Error value.
    Err(E),
}

impl<T, E> Result<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Runs `function` and wraps the std result it returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chained_viper::Result;
    ///
    /// let parsed = Result::from_fn(|| "42".parse::<i32>());
    /// assert_eq!(parsed, Result::Ok(42));
    ///
    /// let failed = Result::from_fn(|| "x".parse::<i32>());
    /// assert!(failed.is_err());
    /// ```
    #[inline]
    pub fn from_fn<F>(function: F) -> Self
    where
        F: FnOnce() -> StdResult<T, E>,
    {
        Self::from(function())
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if this is `Ok` and the value satisfies `predicate`.
    #[inline]
    pub fn is_ok_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is `Err` and the error satisfies `predicate`.
    #[inline]
    pub fn is_err_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => predicate(error),
        }
    }

    /// Returns `true` if this is `Ok` and the value equals `expected`.
    #[inline]
    pub fn contains<U>(&self, expected: &U) -> bool
    where
        T: PartialEq<U>,
    {
        matches!(self, Self::Ok(value) if value == expected)
    }

    /// Returns `true` if this is `Err` and the error equals `expected`.
    #[inline]
    pub fn contains_err<F>(&self, expected: &F) -> bool
    where
        E: PartialEq<F>,
    {
        matches!(self, Self::Err(error) if error == expected)
    }

    /// Converts from `&Result<T, E>` to `Result<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the success value; an `Err` passes through untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(function(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Applies `function` to the error value; an `Ok` passes through untouched.
    #[inline]
    pub fn map_err<G, F>(self, function: F) -> Result<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(function(error)),
        }
    }

    /// Applies `function` to the success value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(_) => default,
        }
    }

    /// Applies `function` to the success value, or `default` to the error.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => default(error),
        }
    }

    /// Like [`map_or_else`](Self::map_or_else), but keeps the outcome wrapped.
    ///
    /// The outcome is always `Ok`: either `function(value)` or
    /// `default(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chained_viper::Result;
    ///
    /// let ok: Result<i32, &str> = Result::Ok(1);
    /// assert_eq!(ok.map_or_else_wrapped(|x| x + 1, |e| e.len() as i32), Result::Ok(2));
    ///
    /// let err: Result<i32, &str> = Result::Err("bad");
    /// assert_eq!(err.map_or_else_wrapped(|x| x + 1, |e| e.len() as i32), Result::Ok(3));
    /// ```
    #[inline]
    pub fn map_or_else_wrapped<U, F, D>(self, function: F, default: D) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
        D: FnOnce(E) -> U,
    {
        Result::Ok(self.map_or_else(default, function))
    }

    // =========================================================================
    // Boolean Combinators
    // =========================================================================

    /// Returns `other` if this is `Ok`, otherwise this `Err`.
    #[inline]
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Chains a computation that may itself fail.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Returns this `Ok`, otherwise `other`.
    #[inline]
    pub fn or<G>(self, other: Result<T, G>) -> Result<T, G> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Returns this `Ok`, otherwise recovers from the error with `function`.
    #[inline]
    pub fn or_else<G, F>(self, function: F) -> Result<T, G>
    where
        F: FnOnce(E) -> Result<T, G>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success value, or [`WrapperError::UnwrapOnErr`].
    ///
    /// # Errors
    ///
    /// Fails if this is `Err`; the error is rendered with `Debug`.
    #[inline]
    pub fn try_unwrap(self) -> StdResult<T, WrapperError>
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(WrapperError::UnwrapOnErr(format!("{error:?}"))),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with the [`WrapperError::UnwrapOnErr`] message if this is `Err`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `message` and the error if this is `Err`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => panic!("{message}: {error:?}"),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics if this is `Ok`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(value) => panic!("called `Result::unwrap_err()` on an `Ok` value: {value:?}"),
            Self::Err(error) => error,
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with `message` and the value if this is `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(value) => panic!("{message}: {value:?}"),
            Self::Err(error) => error,
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Keeps the success value, discarding the error into `None`.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Option::Some(value),
            Self::Err(_) => Option::None,
        }
    }

    /// Keeps the error value, discarding the success into `None`.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => Option::None,
            Self::Err(error) => Option::Some(error),
        }
    }

    /// Converts into the std `Result`.
    #[inline]
    pub fn into_std(self) -> StdResult<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    // =========================================================================
    // Lazy Iteration
    // =========================================================================

    /// Returns a lazy cursor over the success value's elements.
    ///
    /// `Err` gives a cursor that is exhausted from the start.
    #[allow(clippy::iter_not_returning_iterator)]
    pub fn iter<'a>(self) -> LazyCursor<'a, T::Element>
    where
        T: IntoElements<'a>,
    {
        match self {
            Self::Ok(value) => value.into_elements(),
            Self::Err(_) => LazyCursor::empty(),
        }
    }

    /// Returns a lazy cursor that yields the whole success value once.
    pub fn iter_once<'a>(self) -> LazyCursor<'a, T>
    where
        T: 'a,
    {
        match self {
            Self::Ok(value) => LazyCursor::once(value),
            Self::Err(_) => LazyCursor::empty(),
        }
    }
}

impl<T: Default, E> Result<T, E> {
    /// Returns the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }
}

impl<T, E> Result<Option<T>, E> {
    /// Turns a result of an option inside out.
    ///
    /// `Ok(None)` becomes `None`; `Ok(Some(v))` becomes `Some(Ok(v))`;
    /// `Err(e)` becomes `Some(Err(e))`.
    #[inline]
    pub fn transpose(self) -> Option<Result<T, E>> {
        match self {
            Self::Ok(Option::Some(value)) => Option::Some(Result::Ok(value)),
            Self::Ok(Option::None) => Option::None,
            Self::Err(error) => Option::Some(Result::Err(error)),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Result<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Err(error) => write!(formatter, "Err({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<StdResult<T, E>> for Result<T, E> {
    #[inline]
    fn from(result: StdResult<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for StdResult<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result.into_std()
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let value: StdOption<T> = self.ok().into_std();
        value.into_iter()
    }
}
