//! Phoenix Check
//!
//! A lightweight assertion harness. Assertions return a [`CheckFailure`]
//! instead of aborting, and [`run_named_check`] turns any failure raised
//! inside a procedure into a reported, non-propagating outcome.

pub mod assert;
pub mod colors;
pub mod runner;

pub use assert::{
    assert_container_equal, assert_container_not_equal, assert_equal, assert_greater,
    assert_greater_or_equal, assert_less, assert_less_or_equal, assert_not_equal, CheckFailure,
    CheckResult,
};
pub use colors::Palette;
pub use runner::{
    run_named_check, CheckFn, CheckOutcome, CheckReturn, CheckSuite, CheckSummary, RunOptions,
};
