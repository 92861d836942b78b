//! Named check execution and suite reporting.

use std::any::Any;
use std::error::Error;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use crate::assert::CheckFailure;
use crate::colors::Palette;

/// What a check procedure returns. Assertion failures travel through `?`
/// as [`CheckFailure`]; any other error is reported as a non-check error.
pub type CheckReturn = Result<(), Box<dyn Error>>;

pub type CheckFn<'a> = Box<dyn FnOnce() -> CheckReturn + 'a>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    /// An assertion failed.
    Failed(String),
    /// The procedure returned an error that is not a [`CheckFailure`].
    Errored(String),
    Panicked(String),
}

impl CheckOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CheckOutcome::Passed)
    }

    /// The report line body for a non-passing outcome.
    pub fn message(&self) -> Option<String> {
        match self {
            CheckOutcome::Passed => None,
            CheckOutcome::Failed(msg) => Some(msg.clone()),
            CheckOutcome::Errored(msg) => Some(format!("non-check error occurred: {}", msg)),
            CheckOutcome::Panicked(msg) => Some(format!("panicked: {}", msg)),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "<non-string panic payload>".to_string()
    }
}

fn execute<F>(procedure: F) -> CheckOutcome
where
    F: FnOnce() -> CheckReturn,
{
    match panic::catch_unwind(AssertUnwindSafe(procedure)) {
        Ok(Ok(())) => CheckOutcome::Passed,
        Ok(Err(err)) => match err.downcast_ref::<CheckFailure>() {
            Some(failure) => CheckOutcome::Failed(failure.message().to_string()),
            None => CheckOutcome::Errored(err.to_string()),
        },
        Err(payload) => CheckOutcome::Panicked(panic_message(payload.as_ref())),
    }
}

/// Runs `procedure` and reports the result under `name` to `sink`.
///
/// Writes `name check passed!` on success and `<name> MESSAGE` otherwise.
/// Failures, foreign errors and panics are all absorbed into the returned
/// [`CheckOutcome`]; only a failing sink surfaces as an error.
pub fn run_named_check<F, W>(procedure: F, name: &str, sink: &mut W) -> io::Result<CheckOutcome>
where
    F: FnOnce() -> CheckReturn,
    W: Write + ?Sized,
{
    let outcome = execute(procedure);
    match outcome.message() {
        None => writeln!(sink, "{} check passed!", name)?,
        Some(message) => writeln!(sink, "<{}> {}", name, message)?,
    }
    Ok(outcome)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl CheckSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Only checks whose name contains this text are run.
    pub filter: Option<String>,
    pub color: bool,
}

/// An ordered collection of named checks.
pub struct CheckSuite<'a> {
    name: String,
    checks: Vec<(String, CheckFn<'a>)>,
}

impl<'a> CheckSuite<'a> {
    pub fn new(name: impl Into<String>) -> Self {
        CheckSuite {
            name: name.into(),
            checks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn add<F>(&mut self, name: impl Into<String>, procedure: F) -> &mut Self
    where
        F: FnOnce() -> CheckReturn + 'a,
    {
        self.checks.push((name.into(), Box::new(procedure)));
        self
    }

    /// Runs every check that passes the filter, printing one line per check
    /// and a failure digest at the end.
    pub fn run<W>(self, sink: &mut W, options: &RunOptions) -> io::Result<CheckSummary>
    where
        W: Write + ?Sized,
    {
        let palette = Palette::new(options.color);
        let selected: Vec<_> = self
            .checks
            .into_iter()
            .filter(|(name, _)| match &options.filter {
                Some(filter) => name.contains(filter.as_str()),
                None => true,
            })
            .collect();

        let mut summary = CheckSummary {
            total: selected.len(),
            ..CheckSummary::default()
        };
        writeln!(
            sink,
            "{} {} check{} ({})",
            palette.status_label("Running"),
            summary.total,
            if summary.total == 1 { "" } else { "s" },
            self.name
        )?;

        let start = Instant::now();
        let mut failures = Vec::new();
        for (name, procedure) in selected {
            let outcome = execute(procedure);
            let status = match outcome.message() {
                None => {
                    summary.passed += 1;
                    palette.green("✓ ok")
                }
                Some(message) => {
                    summary.failed += 1;
                    failures.push((name.clone(), message));
                    palette.red("✗ FAILED")
                }
            };
            writeln!(
                sink,
                "  {} {} ... {}",
                palette.gray("check"),
                palette.bold(&name),
                status
            )?;
        }

        if !failures.is_empty() {
            writeln!(sink)?;
            writeln!(sink, "{}", palette.bold("--- FAILURES ---"))?;
            for (name, message) in &failures {
                writeln!(sink, "  <{}> {}", name, message)?;
            }
        }

        writeln!(sink)?;
        writeln!(
            sink,
            "{} Finished in {:.2}s, {} passed, {} failed",
            palette.status_label("Done"),
            start.elapsed().as_secs_f64(),
            palette.green(&summary.passed.to_string()),
            if summary.failed > 0 {
                palette.red(&summary.failed.to_string())
            } else {
                summary.failed.to_string()
            }
        )?;
        Ok(summary)
    }
}
