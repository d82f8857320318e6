//! Option type - an explicit optional value.
//!
//! This module provides `Option<T>`, a value that is either `Some(T)` or
//! `None`. Absence is its own variant: there is no sentinel value that can be
//! confused with ordinary data. The only way to obtain `None` is the `None`
//! variant itself (or a conversion from the std `Option`, which maps absence to
//! absence).
//!
//! All combinators on `Option` are eager. For deferred evaluation, turn the
//! option into a [`LazyCursor`] with [`Option::iter`] and chain steps there.
//!
//! # Examples
//!
//! ```rust
//! use chained_viper::Option;
//!
//! let value = Option::Some(4).map(|x| x + 1).filter(|x| *x > 3);
//! assert_eq!(value, Option::Some(5));
//!
//! let missing: Option<i32> = Option::None;
//! assert_eq!(missing.map(|x| x + 1), Option::None);
//! ```

use core::option::Option as StdOption;
use core::result::Result as StdResult;
use std::fmt;

use crate::cursor::{IntoElements, LazyCursor};
use crate::error::WrapperError;
use crate::result::Result;

/// An optional value: either `Some(T)` or `None`.
///
/// `None` orders before any `Some`, matching the std `Option`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub enum Option<T> {
    /// No value.
    #[default]
    None,
    /// Some value of type `T`.
    Some(T),
}

impl<T> Option<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value in `Some`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self::Some(value)
    }

    /// Returns `None`. This is the dedicated path for building an absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Builds a `Some` from a std optional value, refusing a bare `None`.
    ///
    /// Use this at boundaries where a value is supposed to be present. Callers
    /// that want absence to become `Option::None` should use `From` instead.
    ///
    /// # Errors
    ///
    /// Returns [`WrapperError::InvalidConstruction`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chained_viper::{Option, WrapperError};
    ///
    /// assert_eq!(Option::try_some(Some(0)), Ok(Option::Some(0)));
    /// assert_eq!(
    ///     Option::<i32>::try_some(None),
    ///     Err(WrapperError::InvalidConstruction)
    /// );
    /// ```
    pub fn try_some(value: StdOption<T>) -> StdResult<Self, WrapperError> {
        match value {
            Some(value) => Ok(Self::Some(value)),
            None => {
                tracing::debug!("rejected `Option::Some` construction from a bare `None`");
                Err(WrapperError::InvalidConstruction)
            }
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if this is `Some` and the value satisfies `predicate`.
    #[inline]
    pub fn is_some_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// Returns `true` if this is `Some` and the value equals `expected`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chained_viper::Option;
    ///
    /// assert!(Option::Some(2).contains(&2));
    /// assert!(!Option::Some(3).contains(&2));
    /// assert!(!Option::<i32>::None.contains(&2));
    /// ```
    #[inline]
    pub fn contains<U>(&self, expected: &U) -> bool
    where
        T: PartialEq<U>,
    {
        matches!(self, Self::Some(value) if value == expected)
    }

    // =========================================================================
    // Reference Adapters
    // =========================================================================

    /// Converts from `&Option<T>` to `Option<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    /// Converts from `&mut Option<T>` to `Option<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the contained value.
    ///
    /// The function runs immediately and exactly once for `Some`, and never for
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chained_viper::Option;
    ///
    /// assert_eq!(Option::Some(1).map(|x| x + 1), Option::Some(2));
    /// assert_eq!(Option::<i32>::None.map(|x| x + 1), Option::None);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Option::Some(function(value)),
            Self::None => Option::None,
        }
    }

    /// Applies `function` to the contained value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => default,
        }
    }

    /// Applies `function` to the contained value, or computes a default.
    ///
    /// Exactly one of the two closures runs.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => default(),
        }
    }

    /// Like [`map_or_else`](Self::map_or_else), but keeps the result wrapped.
    ///
    /// The outcome is always `Some`: either `function(value)` or `default()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chained_viper::Option;
    ///
    /// let present = Option::Some(1).map_or_else_wrapped(|x| x + 1, || 0);
    /// assert_eq!(present, Option::Some(2));
    ///
    /// let absent = Option::<i32>::None.map_or_else_wrapped(|x| x + 1, || 0);
    /// assert_eq!(absent, Option::Some(0));
    /// ```
    #[inline]
    pub fn map_or_else_wrapped<U, F, D>(self, function: F, default: D) -> Option<U>
    where
        F: FnOnce(T) -> U,
        D: FnOnce() -> U,
    {
        Option::Some(self.map_or_else(default, function))
    }

    /// Keeps the value only if `predicate` accepts it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Some(value) = self
            && predicate(&value)
        {
            return Self::Some(value);
        }
        Self::None
    }

    // =========================================================================
    // Boolean Combinators
    // =========================================================================

    /// Returns `other` if both are `Some`, otherwise `None`.
    #[inline]
    pub fn and<U>(self, other: Option<U>) -> Option<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Option::None,
        }
    }

    /// Chains a computation that may itself produce `None`.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Option::None,
        }
    }

    /// Returns `self` if it is `Some`, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Returns `self` if it is `Some`, otherwise the result of `function`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => function(),
        }
    }

    /// Returns whichever side is `Some` when exactly one of them is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chained_viper::Option;
    ///
    /// assert_eq!(Option::Some(1).xor(Option::None), Option::Some(1));
    /// assert_eq!(Option::None.xor(Option::Some(2)), Option::Some(2));
    /// assert_eq!(Option::Some(1).xor(Option::Some(2)), Option::None);
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Pairs two present values.
    #[inline]
    pub fn zip<U>(self, other: Option<U>) -> Option<(T, U)> {
        match (self, other) {
            (Self::Some(left), Option::Some(right)) => Option::Some((left, right)),
            _ => Option::None,
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with the [`WrapperError::UnwrapOnNone`] message if this is `None`.
    /// Prefer [`try_unwrap`](Self::try_unwrap), [`unwrap_or`](Self::unwrap_or)
    /// or [`ok_or`](Self::ok_or) where absence is expected.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{}", WrapperError::UnwrapOnNone),
        }
    }

    /// Returns the contained value, or [`WrapperError::UnwrapOnNone`].
    ///
    /// # Errors
    ///
    /// Fails if this is `None`.
    #[inline]
    pub fn try_unwrap(self) -> StdResult<T, WrapperError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(WrapperError::UnwrapOnNone),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `None`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{message}"),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value or computes it from `function`.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => function(),
        }
    }

    // =========================================================================
    // In-place Mutation
    // =========================================================================

    /// Stores `value`, dropping any previous one, and returns a reference to it.
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Self::Some(value);
        match self {
            Self::Some(value) => value,
            Self::None => unreachable!("a value was just inserted"),
        }
    }

    /// Moves the value out, leaving `None` in its place.
    #[inline]
    pub const fn take(&mut self) -> Self {
        std::mem::replace(self, Self::None)
    }

    /// Stores `value` and returns the previous contents.
    #[inline]
    pub const fn replace(&mut self, value: T) -> Self {
        std::mem::replace(self, Self::Some(value))
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts `Some(v)` into `Ok(v)` and `None` into `Err(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chained_viper::{Option, Result};
    ///
    /// assert_eq!(Option::Some(4).ok_or("x"), Result::Ok(4));
    /// assert_eq!(Option::<i32>::None.ok_or("x"), Result::Err("x"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::None => Result::Err(error),
        }
    }

    /// Like [`ok_or`](Self::ok_or), but only builds the error when needed.
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::None => Result::Err(function()),
        }
    }

    /// Converts into the std `Option`.
    #[inline]
    pub fn into_std(self) -> StdOption<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    // =========================================================================
    // Lazy Iteration
    // =========================================================================

    /// Returns a lazy cursor over the contained value's elements.
    ///
    /// `None` gives a cursor that is exhausted from the start. A collection
    /// yields its elements; a scalar yields itself once. Which of the two
    /// applies is decided by the [`IntoElements`] impl of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chained_viper::Option;
    ///
    /// assert_eq!(Option::Some(5).iter().next(), Option::Some(5));
    /// assert_eq!(Option::Some(vec![1, 2]).iter().collect(), vec![1, 2]);
    /// assert_eq!(Option::<i32>::None.iter().next(), Option::None);
    /// ```
    #[allow(clippy::iter_not_returning_iterator)]
    pub fn iter<'a>(self) -> LazyCursor<'a, T::Element>
    where
        T: IntoElements<'a>,
    {
        match self {
            Self::Some(value) => value.into_elements(),
            Self::None => LazyCursor::empty(),
        }
    }

    /// Returns a lazy cursor that yields the whole contained value once.
    pub fn iter_once<'a>(self) -> LazyCursor<'a, T>
    where
        T: 'a,
    {
        match self {
            Self::Some(value) => LazyCursor::once(value),
            Self::None => LazyCursor::empty(),
        }
    }
}

impl<T: Default> Option<T> {
    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => T::default(),
        }
    }
}

impl<T> Option<Option<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Option<T> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Option::None,
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Option<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<StdOption<T>> for Option<T> {
    /// Maps std `Some` to `Some` and std `None` to `None`.
    #[inline]
    fn from(value: StdOption<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Option<T>> for StdOption<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.into_std()
    }
}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_std().into_iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Option<T> {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Some(value) => serializer.serialize_some(value),
            Self::None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Option<T> {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <StdOption<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    static_assertions::assert_impl_all!(Option<i32>: Copy, Send, Sync);

    #[rstest]
    fn test_default_is_none() {
        assert_eq!(Option::<i32>::default(), Option::None);
    }

    #[rstest]
    fn test_none_orders_before_some() {
        assert!(Option::None < Option::Some(i32::MIN));
    }

    #[rstest]
    fn test_take_leaves_none() {
        let mut value = Option::Some(3);
        assert_eq!(value.take(), Option::Some(3));
        assert_eq!(value, Option::None);
    }

    #[rstest]
    fn test_replace_returns_previous() {
        let mut value = Option::None;
        assert_eq!(value.replace(1), Option::None);
        assert_eq!(value.replace(2), Option::Some(1));
        assert_eq!(value, Option::Some(2));
    }

    #[rstest]
    fn test_insert_returns_reference_to_new_value() {
        let mut value = Option::Some(1);
        *value.insert(5) += 1;
        assert_eq!(value, Option::Some(6));
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Option::Some(42).to_string(), "Some(42)");
        assert_eq!(Option::<i32>::None.to_string(), "None");
    }

    #[rstest]
    fn test_std_conversion_roundtrip() {
        let value: Option<i32> = Some(1).into();
        assert_eq!(value, Option::Some(1));
        let back: StdOption<i32> = value.into();
        assert_eq!(back, Some(1));

        let absent: Option<i32> = None.into();
        assert!(absent.is_none());
    }

    #[rstest]
    fn test_flatten() {
        assert_eq!(Option::Some(Option::Some(1)).flatten(), Option::Some(1));
        assert_eq!(Option::Some(Option::<i32>::None).flatten(), Option::None);
    }
}
