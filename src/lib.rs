//! # chained-viper
//!
//! Explicit optional and fallible values, plus a lazy cursor to chain
//! transformations over them.
//!
//! ## Overview
//!
//! - **`Option<T>`**: `Some(T)` or `None`, with eager combinators
//! - **`Result<T, E>`**: `Ok(T)` or `Err(E)`, mirroring `Option`
//! - **`LazyCursor`**: a pull-based cursor whose `map`/`filter`/... steps only
//!   run when `next`, `peek` or `collect` asks for a value
//!
//! Absence is a tagged variant. There is no sentinel that can be mistaken for
//! data, and [`Option::try_some`] refuses to build a `Some` out of a bare
//! `None`.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `Option` and `Result`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use chained_viper::prelude::*;
//!
//! let evens = Option::Some(vec![1, 2, 3, 4])
//!     .iter()
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * 10)
//!     .collect();
//! assert_eq!(evens, vec![20, 40]);
//!
//! let missing: Option<i32> = Option::None;
//! assert_eq!(missing.ok_or("absent"), Result::Err("absent"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the wrapper types, the cursor and the error type. Note that
/// importing the prelude shadows the std `Option` and `Result`.
///
/// # Usage
///
/// ```rust
/// use chained_viper::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cursor::{IntoElements, LazyCursor, Step, Values};
    pub use crate::error::WrapperError;
    pub use crate::option::Option;
    pub use crate::result::Result;
}

pub mod cursor;
pub mod error;
pub mod option;
pub mod result;

pub use cursor::{IntoElements, LazyCursor, Step, Values};
pub use error::WrapperError;
pub use option::Option;
pub use result::Result;
