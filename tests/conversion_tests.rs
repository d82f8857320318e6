//! Tests for moving between Option, Result, cursors and their std counterparts.

use chained_viper::{LazyCursor, Option, Result};
use rstest::rstest;
use std::cell::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
struct E(&'static str);

// =============================================================================
// Option <-> Result
// =============================================================================

#[rstest]
fn none_ok_or_is_err() {
    assert_eq!(Option::<i32>::None.ok_or(E("x")), Result::Err(E("x")));
}

#[rstest]
fn some_ok_or_is_ok() {
    assert_eq!(Option::Some(4).ok_or(E("x")), Result::Ok(4));
}

#[rstest]
fn ok_or_else_builds_error_lazily() {
    let calls = Cell::new(0);
    let value = Option::Some(1).ok_or_else(|| {
        calls.set(calls.get() + 1);
        E("x")
    });
    assert_eq!(value, Result::Ok(1));
    assert_eq!(calls.get(), 0);

    let missing = Option::<i32>::None.ok_or_else(|| E("y"));
    assert_eq!(missing, Result::Err(E("y")));
}

#[rstest]
#[case(Result::Ok(1), Option::Some(1), Option::None)]
#[case(Result::Err(E("e")), Option::None, Option::Some(E("e")))]
fn ok_and_err_discard_the_other_side(
    #[case] value: Result<i32, E>,
    #[case] ok: Option<i32>,
    #[case] err: Option<E>,
) {
    assert_eq!(value.clone().ok(), ok);
    assert_eq!(value.err(), err);
}

#[rstest]
fn option_result_round_trip() {
    let value = Option::Some(3);
    assert_eq!(value.ok_or(E("unused")).ok(), value);
}

// =============================================================================
// Cursor re-wrapping
// =============================================================================

#[rstest]
fn next_results_are_always_wrapped() {
    let mut lazy = LazyCursor::new(vec![Option::Some(1), Option::None]);
    // Elements that are themselves options stay distinguishable from exhaustion
    assert_eq!(lazy.next(), Option::Some(Option::Some(1)));
    assert_eq!(lazy.next(), Option::Some(Option::None));
    assert_eq!(lazy.next(), Option::None);
}

#[rstest]
fn nested_option_iter_flattens_one_level() {
    let nested = Option::Some(Option::Some(7));
    assert_eq!(nested.iter().collect(), vec![7]);
}

#[rstest]
fn std_option_source_yields_zero_or_one() {
    assert_eq!(Option::Some(Some(1)).iter().collect(), vec![1]);
    assert!(Option::Some(None::<i32>).iter().collect().is_empty());
}

#[rstest]
fn slice_elements_are_borrowed() {
    let data = [1, 2, 3];
    let lazy = Option::Some(&data[..]).iter().map(|x| x * 2);
    assert_eq!(lazy.collect(), vec![2, 4, 6]);
}

// =============================================================================
// Std interop
// =============================================================================

#[rstest]
fn std_option_interop() {
    let value: Option<i32> = Some(1).into();
    assert_eq!(value.into_std(), Some(1));
    let std_value: std::option::Option<i32> = Option::<i32>::None.into();
    assert_eq!(std_value, None);
}

#[rstest]
fn std_result_interop() {
    let parsed: Result<i32, std::num::ParseIntError> = "5".parse::<i32>().into();
    assert_eq!(parsed.clone().into_std(), Ok(5));
    let back: std::result::Result<i32, _> = parsed.into();
    assert_eq!(back, Ok(5));
}

#[rstest]
fn wrappers_feed_std_iterators() {
    let total: i32 = Option::Some(2).into_iter().chain(Result::<i32, E>::Ok(3)).sum();
    assert_eq!(total, 5);
}
