//! Validation for equations built out of numeral and operator tiles.
//!
//! A player arranges tiles like `"1"`, `"2"`, `"+"`, `"="` into a row, and the
//! [`Checker`] decides whether the row reads as a true equation.
//!
//! ```rust
//! use tile_equations::{check_equation, Rejection, Verdict};
//!
//! let verdict = check_equation(&["2", "+", "3", "x", "4", "=", "14"]);
//! assert!(verdict.is_valid());
//!
//! let verdict = check_equation(&["2", "+", "2", "=", "5"]);
//! assert_eq!(
//!     verdict,
//!     Verdict::Invalid(Rejection::ValueMismatch { expected: 4.0, found: 5.0 })
//! );
//! ```

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

pub mod algebra;
mod config;
mod equations;
mod glyphs;
mod slots;
mod verdict;

pub use config::{ChainPolicy, CheckerConfig};
pub use equations::{check_equation, Checker, EQUALITY};
pub use glyphs::Glyphs;
pub use slots::{SlotError, SlotRow};
pub use verdict::{format_value, Rejection, Verdict};
