//! Lazy, chainable cursors.
//!
//! A [`LazyCursor`] is a pull-based iteration handle over a source sequence.
//! Steps such as [`map`](LazyCursor::map) and [`filter`](LazyCursor::filter)
//! are only registered when chained: nothing runs until a consuming call
//! ([`next`](LazyCursor::next), [`peek`](LazyCursor::peek),
//! [`collect`](LazyCursor::collect), ...) asks for a value. Every produced
//! value comes back wrapped in an [`Option`].
//!
//! Chaining takes the cursor by value and hands back the extended cursor, so
//! no stale handle to the pre-chain cursor can be observed.
//!
//! # Examples
//!
//! ```rust
//! use chained_viper::cursor;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let mut lazy = cursor::iter(vec![1, 2, 3, 4])
//!     .filter(|x| *x > 2)
//!     .map(|x| {
//!         calls.set(calls.get() + 1);
//!         x * 10
//!     });
//!
//! // Nothing has run yet
//! assert_eq!(calls.get(), 0);
//!
//! assert_eq!(lazy.next().unwrap(), 30);
//! assert_eq!(calls.get(), 1);
//! assert_eq!(lazy.collect(), vec![40]);
//! ```

use core::option::Option as StdOption;
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Range, RangeInclusive};

use crate::option::Option;

/// Inline capacity of the step descriptor list.
const INLINE_STEPS: usize = 8;

/// The outcome of pulling one raw element through the registered steps.
enum Pull<T> {
    /// The element survived every step.
    Yield(T),
    /// A step rejected the element; the next raw element should be pulled.
    Skip,
    /// The source has no more elements.
    Exhausted,
}

impl<T> Pull<T> {
    #[inline]
    fn and_then<U, F>(self, function: F) -> Pull<U>
    where
        F: FnOnce(T) -> Pull<U>,
    {
        match self {
            Self::Yield(value) => function(value),
            Self::Skip => Pull::Skip,
            Self::Exhausted => Pull::Exhausted,
        }
    }
}

/// The source plus every registered step, composed in registration order.
type Stage<'a, T> = Box<dyn FnMut() -> Pull<T> + 'a>;

#[inline]
fn boxed<'a, T, F>(stage: F) -> Stage<'a, T>
where
    F: FnMut() -> Pull<T> + 'a,
{
    Box::new(stage)
}

/// Wraps `previous` so that each element it yields is expanded by `function`
/// and drained before the next one is pulled.
fn expanding<'a, T, I, F>(mut previous: Stage<'a, T>, mut function: F) -> Stage<'a, I::Item>
where
    T: 'a,
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    F: FnMut(T) -> I + 'a,
{
    let mut inner: StdOption<I::IntoIter> = None;
    boxed(move || {
        loop {
            if let Some(elements) = inner.as_mut() {
                if let Some(value) = elements.next() {
                    return Pull::Yield(value);
                }
                inner = None;
            }
            match previous() {
                Pull::Yield(value) => inner = Some(function(value).into_iter()),
                Pull::Skip => return Pull::Skip,
                Pull::Exhausted => return Pull::Exhausted,
            }
        }
    })
}

/// Describes a deferred step registered on a [`LazyCursor`].
///
/// The descriptors are kept for introspection; the behaviour itself lives in
/// the composed stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Transforms each element.
    Map,
    /// Drops elements rejected by a predicate.
    Filter,
    /// Transforms each element into an `Option`, dropping `None`.
    FilterMap,
    /// Expands each element into a sequence.
    FlatMap,
    /// Yields the elements of nested sequences.
    Flatten,
    /// Observes each element without changing it.
    Inspect,
    /// Pairs each element with its index.
    Enumerate,
    /// Keeps every n-th element.
    StepBy(usize),
    /// Drops leading elements while a predicate holds.
    SkipWhile,
    /// Ends the cursor at the first element rejected by a predicate.
    TakeWhile,
    /// Continues with another sequence once the source is exhausted.
    Chain,
    /// Pairs elements with those of another sequence.
    Zip,
}

/// A stateful, pull-based cursor with deferred transformation steps.
///
/// # Thread Safety
///
/// This type is NOT thread-safe. Steps are stored as non-`Send` closures and
/// the cursor is meant to be owned by one piece of code at a time.
///
/// # Examples
///
/// ```rust
/// use chained_viper::{LazyCursor, Option};
///
/// let mut lazy = LazyCursor::new(0..10).filter(|x| x % 3 == 0);
///
/// assert_eq!(lazy.peek(), Option::Some(&0));
/// assert_eq!(lazy.peek(), Option::Some(&0));
/// assert_eq!(lazy.next(), Option::Some(0));
/// assert_eq!(lazy.next(), Option::Some(3));
/// ```
pub struct LazyCursor<'a, T> {
    stage: Stage<'a, T>,
    pending_ops: SmallVec<[Step; INLINE_STEPS]>,
    exhausted: bool,
    /// Outer `None`: nothing buffered. Inner `None`: buffered exhaustion.
    peeked: StdOption<Option<T>>,
}

// A cursor owns non-`Send` closures and must stay on one thread.
static_assertions::assert_not_impl_any!(LazyCursor<'static, i32>: Send, Sync);

impl<'a, T: 'a> LazyCursor<'a, T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a cursor over `source` with no pending steps.
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        let mut source = source.into_iter();
        Self::from_stage(boxed(move || match source.next() {
            Some(value) => Pull::Yield(value),
            None => Pull::Exhausted,
        }))
    }

    /// Creates a cursor that is exhausted from the start.
    pub fn empty() -> Self {
        let mut cursor = Self::from_stage(boxed(|| Pull::Exhausted));
        cursor.exhausted = true;
        cursor
    }

    /// Creates a cursor that yields `value` once.
    pub fn once(value: T) -> Self {
        Self::new(std::iter::once(value))
    }

    fn from_stage(stage: Stage<'a, T>) -> Self {
        Self {
            stage,
            pending_ops: SmallVec::new(),
            exhausted: false,
            peeked: None,
        }
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Returns the registered steps in registration order.
    #[inline]
    pub fn pending_steps(&self) -> &[Step] {
        &self.pending_ops
    }

    /// Returns `true` once a pull has found the source exhausted.
    ///
    /// A cursor over an empty source that has not been pulled yet still
    /// reports `false`.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    // =========================================================================
    // Deferred Steps
    // =========================================================================

    /// Registers `step` and wraps the current stage with `compose`.
    ///
    /// A value buffered by `peek` is fed to the new stage ahead of the source,
    /// so it still goes through the new step, and only when pulled.
    fn extend<U, F>(self, step: Step, compose: F) -> LazyCursor<'a, U>
    where
        U: 'a,
        F: FnOnce(Stage<'a, T>) -> Stage<'a, U>,
    {
        let Self {
            stage,
            mut pending_ops,
            exhausted,
            peeked,
        } = self;

        let stage = match peeked {
            Some(Option::Some(value)) => {
                let mut front = Some(value);
                let mut rest = stage;
                boxed(move || match front.take() {
                    Some(value) => Pull::Yield(value),
                    None => rest(),
                })
            }
            _ => stage,
        };

        pending_ops.push(step);
        tracing::trace!(?step, pending = pending_ops.len(), "registered deferred step");

        LazyCursor {
            stage: compose(stage),
            pending_ops,
            exhausted,
            peeked: None,
        }
    }

    /// Registers a transform. `function` is not called until a value is pulled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chained_viper::{LazyCursor, Option};
    ///
    /// let mut lazy = LazyCursor::new(vec![1, 2]).map(|x| x.to_string());
    /// assert_eq!(lazy.next(), Option::Some("1".to_string()));
    /// ```
    pub fn map<U, F>(self, mut function: F) -> LazyCursor<'a, U>
    where
        U: 'a,
        F: FnMut(T) -> U + 'a,
    {
        self.extend(Step::Map, move |mut previous| {
            boxed(move || previous().and_then(|value| Pull::Yield(function(value))))
        })
    }

    /// Registers a filter. Elements rejected by `predicate` are skipped one at
    /// a time; later steps never see them.
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.extend(Step::Filter, move |mut previous| {
            boxed(move || {
                previous().and_then(|value| {
                    if predicate(&value) {
                        Pull::Yield(value)
                    } else {
                        Pull::Skip
                    }
                })
            })
        })
    }

    /// Registers a transform that may drop elements by returning `None`.
    pub fn filter_map<U, F>(self, mut function: F) -> LazyCursor<'a, U>
    where
        U: 'a,
        F: FnMut(T) -> Option<U> + 'a,
    {
        self.extend(Step::FilterMap, move |mut previous| {
            boxed(move || {
                previous().and_then(|value| match function(value) {
                    Option::Some(mapped) => Pull::Yield(mapped),
                    Option::None => Pull::Skip,
                })
            })
        })
    }

    /// Registers a transform that expands each element into a sequence.
    pub fn flat_map<U, I, F>(self, function: F) -> LazyCursor<'a, U>
    where
        U: 'a,
        I: IntoIterator<Item = U>,
        I::IntoIter: 'a,
        F: FnMut(T) -> I + 'a,
    {
        self.extend(Step::FlatMap, move |previous| expanding(previous, function))
    }

    /// Yields the elements of each nested sequence in turn.
    ///
    /// Empty inner sequences contribute nothing; the cursor moves on to the
    /// next outer element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chained_viper::LazyCursor;
    ///
    /// let nested = LazyCursor::new(vec![vec![1, 2], vec![], vec![3]]);
    /// assert_eq!(nested.flatten().collect(), vec![1, 2, 3]);
    /// ```
    pub fn flatten(self) -> LazyCursor<'a, T::Item>
    where
        T: IntoIterator,
        T::IntoIter: 'a,
        T::Item: 'a,
    {
        self.extend(Step::Flatten, move |previous| expanding(previous, |inner: T| inner))
    }

    /// Registers an observer called with each element as it is pulled.
    pub fn inspect<F>(self, mut function: F) -> Self
    where
        F: FnMut(&T) + 'a,
    {
        self.extend(Step::Inspect, move |mut previous| {
            boxed(move || {
                previous().and_then(|value| {
                    function(&value);
                    Pull::Yield(value)
                })
            })
        })
    }

    /// Pairs each surviving element with its zero-based position.
    pub fn enumerate(self) -> LazyCursor<'a, (usize, T)> {
        self.enumerate_from(0)
    }

    /// Pairs each surviving element with its position, counting from `start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chained_viper::LazyCursor;
    ///
    /// let numbered = LazyCursor::new(vec!['a', 'b']).enumerate_from(1).collect();
    /// assert_eq!(numbered, vec![(1, 'a'), (2, 'b')]);
    /// ```
    pub fn enumerate_from(self, start: usize) -> LazyCursor<'a, (usize, T)> {
        self.extend(Step::Enumerate, move |mut previous| {
            let mut index = start;
            boxed(move || {
                previous().and_then(|value| {
                    let position = index;
                    index += 1;
                    Pull::Yield((position, value))
                })
            })
        })
    }

    /// Keeps the first surviving element and then every `step`-th one.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    pub fn step_by(self, step: usize) -> Self {
        assert!(step != 0, "step_by requires a non-zero step");
        self.extend(Step::StepBy(step), move |mut previous| {
            let mut position = 0;
            boxed(move || {
                previous().and_then(|value| {
                    let keep = position % step == 0;
                    position += 1;
                    if keep { Pull::Yield(value) } else { Pull::Skip }
                })
            })
        })
    }

    /// Drops elements while `predicate` holds, then passes everything through.
    pub fn skip_while<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.extend(Step::SkipWhile, move |mut previous| {
            let mut skipping = true;
            boxed(move || {
                previous().and_then(|value| {
                    if skipping && predicate(&value) {
                        Pull::Skip
                    } else {
                        skipping = false;
                        Pull::Yield(value)
                    }
                })
            })
        })
    }

    /// Passes elements while `predicate` holds; the first rejected element
    /// ends the cursor.
    pub fn take_while<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.extend(Step::TakeWhile, move |mut previous| {
            let mut done = false;
            boxed(move || {
                if done {
                    return Pull::Exhausted;
                }
                previous().and_then(|value| {
                    if predicate(&value) {
                        Pull::Yield(value)
                    } else {
                        done = true;
                        Pull::Exhausted
                    }
                })
            })
        })
    }

    /// Continues with `other` once this cursor's source runs out.
    ///
    /// Unlike the other steps this one extends the source, so chaining onto
    /// an exhausted cursor yields the elements of `other`.
    pub fn chain<I>(self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        let mut left_done = self.exhausted;
        let mut right = other.into_iter();
        let mut chained = self.extend(Step::Chain, move |mut previous| {
            boxed(move || {
                if !left_done {
                    match previous() {
                        Pull::Exhausted => left_done = true,
                        pull => return pull,
                    }
                }
                right.next().map_or(Pull::Exhausted, Pull::Yield)
            })
        });
        chained.exhausted = false;
        chained
    }

    /// Pairs each surviving element with the next element of `other`.
    ///
    /// The cursor ends as soon as either side runs out.
    pub fn zip<U, I>(self, other: I) -> LazyCursor<'a, (T, U)>
    where
        U: 'a,
        I: IntoIterator<Item = U>,
        I::IntoIter: 'a,
    {
        let mut right = other.into_iter();
        self.extend(Step::Zip, move |mut previous| {
            boxed(move || {
                previous().and_then(|left| match right.next() {
                    Some(value) => Pull::Yield((left, value)),
                    None => Pull::Exhausted,
                })
            })
        })
    }

    // =========================================================================
    // Consuming Operations
    // =========================================================================

    /// Pulls raw elements until one survives every step or the source ends.
    fn pull(&mut self) -> Option<T> {
        if self.exhausted {
            return Option::None;
        }
        loop {
            match (self.stage)() {
                Pull::Yield(value) => return Option::Some(value),
                Pull::Skip => tracing::trace!("element rejected by a deferred step"),
                Pull::Exhausted => {
                    self.exhausted = true;
                    tracing::trace!(pending = self.pending_ops.len(), "cursor exhausted");
                    return Option::None;
                }
            }
        }
    }

    /// Returns the next surviving element, or `None` once exhausted.
    ///
    /// A value buffered by [`peek`](Self::peek) is returned first without
    /// running any step again.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<T> {
        match self.peeked.take() {
            Some(buffered) => buffered,
            None => self.pull(),
        }
    }

    /// Returns a reference to the next element without consuming it.
    ///
    /// Repeated calls return the same buffered value until [`next`](Self::next)
    /// takes it.
    pub fn peek(&mut self) -> Option<&T> {
        if self.peeked.is_none() {
            let produced = self.pull();
            self.peeked = Some(produced);
        }
        match &self.peeked {
            Some(buffered) => buffered.as_ref(),
            None => Option::None,
        }
    }

    /// Drains the cursor into a `Vec`, in order.
    pub fn collect(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Drains the cursor into any collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chained_viper::LazyCursor;
    /// use std::collections::BTreeSet;
    ///
    /// let set: BTreeSet<i32> = LazyCursor::new(vec![3, 1, 3]).collect_into();
    /// assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn collect_into<C>(self) -> C
    where
        C: FromIterator<T>,
    {
        self.into_iter().collect()
    }

    /// Counts the remaining elements, consuming the cursor.
    pub fn count(self) -> usize {
        self.into_iter().count()
    }

    /// Returns the last remaining element.
    pub fn last(self) -> Option<T> {
        self.into_iter().last().into()
    }

    /// Returns the `n`-th remaining element (zero-based), consuming everything
    /// before it.
    pub fn nth(&mut self, n: usize) -> Option<T> {
        if self.advance_by(n) < n {
            return Option::None;
        }
        self.next()
    }

    /// Skips up to `n` elements and returns how many were actually skipped.
    pub fn advance_by(&mut self, n: usize) -> usize {
        let mut skipped = 0;
        while skipped < n && self.next().is_some() {
            skipped += 1;
        }
        skipped
    }

    /// Returns `true` if every remaining element satisfies `predicate`.
    ///
    /// Stops at the first failure.
    pub fn all<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(T) -> bool,
    {
        while let Option::Some(value) = self.next() {
            if !predicate(value) {
                return false;
            }
        }
        true
    }

    /// Returns `true` if any remaining element satisfies `predicate`.
    ///
    /// Stops at the first success.
    pub fn any<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(T) -> bool,
    {
        while let Option::Some(value) = self.next() {
            if predicate(value) {
                return true;
            }
        }
        false
    }

    /// Returns the first remaining element satisfying `predicate`.
    pub fn find<P>(&mut self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        while let Option::Some(value) = self.next() {
            if predicate(&value) {
                return Option::Some(value);
            }
        }
        Option::None
    }

    /// Returns the first `Some` produced by `function`.
    pub fn find_map<U, F>(&mut self, mut function: F) -> Option<U>
    where
        F: FnMut(T) -> Option<U>,
    {
        while let Option::Some(value) = self.next() {
            if let Option::Some(mapped) = function(value) {
                return Option::Some(mapped);
            }
        }
        Option::None
    }

    /// Folds every remaining element into an accumulator.
    pub fn fold<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(initial, function)
    }
}

impl<'a, T: 'a> Default for LazyCursor<'a, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for LazyCursor<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LazyCursor")
            .field("pending_ops", &self.pending_ops.as_slice())
            .field("exhausted", &self.exhausted)
            .field("buffered", &self.peeked.is_some())
            .finish_non_exhaustive()
    }
}

/// Creates a cursor over any sequence.
///
/// # Examples
///
/// ```rust
/// use chained_viper::cursor;
///
/// let doubled = cursor::iter([1, 2, 3]).map(|x| x * 2).collect();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn iter<'a, I>(source: I) -> LazyCursor<'a, I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    LazyCursor::new(source)
}

// =============================================================================
// Std Iterator Bridge
// =============================================================================

/// A std [`Iterator`] draining a [`LazyCursor`].
///
/// Created by [`LazyCursor::into_iter`].
pub struct Values<'a, T> {
    cursor: LazyCursor<'a, T>,
}

impl<'a, T: 'a> Iterator for Values<'a, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> StdOption<T> {
        self.cursor.next().into_std()
    }
}

impl<'a, T: 'a> FusedIterator for Values<'a, T> {}

impl<T> fmt::Debug for Values<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Values").field(&self.cursor).finish()
    }
}

impl<'a, T: 'a> IntoIterator for LazyCursor<'a, T> {
    type Item = T;
    type IntoIter = Values<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Values { cursor: self }
    }
}

// =============================================================================
// Element Sources
// =============================================================================

/// Values that can be turned into a [`LazyCursor`] over their elements.
///
/// Collections yield their elements; scalars yield themselves once. This is
/// what [`Option::iter`] and [`Result::iter`](crate::Result::iter) dispatch
/// on.
pub trait IntoElements<'a> {
    /// The element type produced by the cursor.
    type Element: 'a;

    /// Converts `self` into a cursor over its elements.
    fn into_elements(self) -> LazyCursor<'a, Self::Element>;
}

macro_rules! impl_scalar_elements {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl<'a> IntoElements<'a> for $scalar {
                type Element = Self;

                #[inline]
                fn into_elements(self) -> LazyCursor<'a, Self> {
                    LazyCursor::once(self)
                }
            }
        )*
    };
}

impl_scalar_elements!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
);

impl<'a, T: 'a> IntoElements<'a> for Vec<T> {
    type Element = T;

    fn into_elements(self) -> LazyCursor<'a, T> {
        LazyCursor::new(self)
    }
}

impl<'a, T: 'a, const N: usize> IntoElements<'a> for [T; N] {
    type Element = T;

    fn into_elements(self) -> LazyCursor<'a, T> {
        LazyCursor::new(self)
    }
}

impl<'a, T> IntoElements<'a> for &'a [T] {
    type Element = &'a T;

    fn into_elements(self) -> LazyCursor<'a, &'a T> {
        LazyCursor::new(self)
    }
}

impl<'a, T: 'a> IntoElements<'a> for VecDeque<T> {
    type Element = T;

    fn into_elements(self) -> LazyCursor<'a, T> {
        LazyCursor::new(self)
    }
}

impl<'a> IntoElements<'a> for String {
    type Element = char;

    fn into_elements(self) -> LazyCursor<'a, char> {
        let mut offset = 0;
        LazyCursor::new(std::iter::from_fn(move || {
            let character = self[offset..].chars().next()?;
            offset += character.len_utf8();
            Some(character)
        }))
    }
}

impl<'a> IntoElements<'a> for &'a str {
    type Element = char;

    fn into_elements(self) -> LazyCursor<'a, char> {
        LazyCursor::new(self.chars())
    }
}

impl<'a, Idx: 'a> IntoElements<'a> for Range<Idx>
where
    Self: Iterator<Item = Idx>,
{
    type Element = Idx;

    fn into_elements(self) -> LazyCursor<'a, Idx> {
        LazyCursor::new(self)
    }
}

impl<'a, Idx: 'a> IntoElements<'a> for RangeInclusive<Idx>
where
    Self: Iterator<Item = Idx>,
{
    type Element = Idx;

    fn into_elements(self) -> LazyCursor<'a, Idx> {
        LazyCursor::new(self)
    }
}

impl<'a, T: 'a> IntoElements<'a> for StdOption<T> {
    type Element = T;

    fn into_elements(self) -> LazyCursor<'a, T> {
        LazyCursor::new(self)
    }
}

impl<'a, T: 'a> IntoElements<'a> for Option<T> {
    type Element = T;

    fn into_elements(self) -> LazyCursor<'a, T> {
        self.iter_once()
    }
}

impl<'a, T: 'a> IntoElements<'a> for LazyCursor<'a, T> {
    type Element = T;

    #[inline]
    fn into_elements(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_new_cursor_has_no_pending_steps() {
        let lazy = LazyCursor::new(vec![1, 2, 3]);
        assert!(lazy.pending_steps().is_empty());
        assert!(!lazy.is_exhausted());
    }

    #[rstest]
    fn test_steps_are_recorded_in_order() {
        let lazy = LazyCursor::new(0..4)
            .filter(|x| x % 2 == 0)
            .map(|x| x + 1)
            .step_by(2);
        assert_eq!(
            lazy.pending_steps(),
            &[Step::Filter, Step::Map, Step::StepBy(2)]
        );
    }

    #[rstest]
    fn test_empty_cursor_is_exhausted() {
        let mut lazy = LazyCursor::<i32>::empty();
        assert!(lazy.is_exhausted());
        assert_eq!(lazy.next(), Option::None);
    }

    #[rstest]
    fn test_exhaustion_is_recorded_after_pull() {
        let mut lazy = LazyCursor::new(Vec::<i32>::new());
        assert!(!lazy.is_exhausted());
        assert_eq!(lazy.next(), Option::None);
        assert!(lazy.is_exhausted());
    }

    #[rstest]
    fn test_exhausted_source_is_not_pulled_again() {
        let pulls = Cell::new(0);
        let source = std::iter::from_fn(|| {
            pulls.set(pulls.get() + 1);
            None::<i32>
        });
        let mut lazy = LazyCursor::new(source);
        assert_eq!(lazy.next(), Option::None);
        assert_eq!(lazy.next(), Option::None);
        assert_eq!(pulls.get(), 1);
    }

    #[rstest]
    fn test_peeked_value_flows_through_new_step_lazily() {
        let calls = Cell::new(0);
        let mut lazy = LazyCursor::new(vec![1, 2]);
        assert_eq!(lazy.peek(), Option::Some(&1));

        let mut mapped = lazy.map(|x| {
            calls.set(calls.get() + 1);
            x * 100
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(mapped.next(), Option::Some(100));
        assert_eq!(mapped.next(), Option::Some(200));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_debug_does_not_require_debug_elements() {
        struct Opaque;
        let lazy = LazyCursor::once(Opaque).inspect(|_| {});
        let rendered = format!("{lazy:?}");
        assert!(rendered.starts_with("LazyCursor { pending_ops: [Inspect]"));
    }

    #[rstest]
    #[should_panic(expected = "step_by requires a non-zero step")]
    fn test_step_by_zero_panics() {
        let _ = LazyCursor::new(0..3).step_by(0);
    }

    #[rstest]
    fn test_string_elements_handle_multibyte_chars() {
        let lazy = "héllo".to_string().into_elements();
        assert_eq!(lazy.collect(), vec!['h', 'é', 'l', 'l', 'o']);
    }
}
