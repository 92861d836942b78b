//! Self-check suites run by `phoenix check`.
//!
//! Each module registers its checks under a `module::name` prefix so that
//! `--filter vector` selects a whole suite.

use phoenix_check::CheckSuite;

pub mod array;
pub mod sort;
pub mod utility;
pub mod vector;

/// Register every suite, in a fixed order.
pub fn register_all(suite: &mut CheckSuite<'_>) {
    vector::register(suite);
    array::register(suite);
    sort::register(suite);
    utility::register(suite);
}
