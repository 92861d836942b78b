//! Equality, ordering and container assertions.
//!
//! Every assertion returns `Err(CheckFailure)` with a message of the form
//! `<check::NAME failed!> MESSAGE [first: A] [second: B]` so that procedures can
//! bail out with `?`.

use std::cmp::Ordering;
use std::fmt::Debug;

use thiserror::Error;

/// A failed assertion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CheckFailure {
    message: String,
}

impl CheckFailure {
    pub fn new(message: impl Into<String>) -> Self {
        CheckFailure {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type CheckResult = Result<(), CheckFailure>;

fn pair_failure<A: Debug, B: Debug>(
    check: &str,
    message: &str,
    first: &A,
    second: &B,
) -> CheckFailure {
    CheckFailure::new(format!(
        "<check::{} failed!> {} [first: {:?}] [second: {:?}]",
        check, message, first, second
    ))
}

/// Fails when `first != second`.
pub fn assert_equal<A, B>(first: A, second: B, message: &str) -> CheckResult
where
    A: PartialEq<B> + Debug,
    B: Debug,
{
    if first != second {
        return Err(pair_failure("equal", message, &first, &second));
    }
    Ok(())
}

/// Fails when `first == second`.
pub fn assert_not_equal<A, B>(first: A, second: B, message: &str) -> CheckResult
where
    A: PartialEq<B> + Debug,
    B: Debug,
{
    if first == second {
        return Err(pair_failure("not_equal", message, &first, &second));
    }
    Ok(())
}

/// Fails unless `first > second`.
pub fn assert_greater<A, B>(first: A, second: B, message: &str) -> CheckResult
where
    A: PartialOrd<B> + Debug,
    B: Debug,
{
    match first.partial_cmp(&second) {
        Some(Ordering::Greater) => Ok(()),
        _ => Err(pair_failure("greater", message, &first, &second)),
    }
}

/// Fails unless `first < second`.
pub fn assert_less<A, B>(first: A, second: B, message: &str) -> CheckResult
where
    A: PartialOrd<B> + Debug,
    B: Debug,
{
    match first.partial_cmp(&second) {
        Some(Ordering::Less) => Ok(()),
        _ => Err(pair_failure("less", message, &first, &second)),
    }
}

/// Fails unless `first >= second`.
pub fn assert_greater_or_equal<A, B>(first: A, second: B, message: &str) -> CheckResult
where
    A: PartialOrd<B> + Debug,
    B: Debug,
{
    match first.partial_cmp(&second) {
        Some(Ordering::Greater | Ordering::Equal) => Ok(()),
        _ => Err(pair_failure("greater_or_equal", message, &first, &second)),
    }
}

/// Fails unless `first <= second`.
pub fn assert_less_or_equal<A, B>(first: A, second: B, message: &str) -> CheckResult
where
    A: PartialOrd<B> + Debug,
    B: Debug,
{
    match first.partial_cmp(&second) {
        Some(Ordering::Less | Ordering::Equal) => Ok(()),
        _ => Err(pair_failure("less_or_equal", message, &first, &second)),
    }
}

/// Fails when the lengths differ (naming the bigger side) or at the first
/// index whose elements differ (naming the index and both values).
pub fn assert_container_equal<A, B>(first: &[A], second: &[B], message: &str) -> CheckResult
where
    A: PartialEq<B> + Debug,
    B: Debug,
{
    if first.len() != second.len() {
        let bigger = if first.len() > second.len() {
            "first"
        } else {
            "second"
        };
        return Err(CheckFailure::new(format!(
            "<check::container_equal failed: {} container is bigger> {}",
            bigger, message
        )));
    }

    match first.iter().zip(second).position(|(a, b)| a != b) {
        Some(index) => Err(CheckFailure::new(format!(
            "<check::container_equal failed: {:?} != {:?} at index #{}> {}",
            first[index], second[index], index, message
        ))),
        None => Ok(()),
    }
}

/// Fails only when both containers have the same length and every pair of
/// elements is equal.
pub fn assert_container_not_equal<A, B>(first: &[A], second: &[B], message: &str) -> CheckResult
where
    A: PartialEq<B>,
{
    if first.len() != second.len() {
        return Ok(());
    }
    if first.iter().zip(second).all(|(a, b)| a == b) {
        return Err(CheckFailure::new(format!(
            "<check::container_not_equal failed!> {}",
            message
        )));
    }
    Ok(())
}
