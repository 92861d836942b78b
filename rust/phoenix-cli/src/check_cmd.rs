//! `phoenix check`: run the built-in self-check suites.

use std::io::{self, Write};

use phoenix_check::{CheckSuite, CheckSummary, RunOptions};

use crate::suites;

/// Every registered self-check, in run order.
pub fn build_suite<'a>() -> CheckSuite<'a> {
    let mut suite = CheckSuite::new("phoenix");
    suites::register_all(&mut suite);
    suite
}

pub fn run_checks<W>(sink: &mut W, options: &RunOptions) -> io::Result<CheckSummary>
where
    W: Write + ?Sized,
{
    build_suite().run(sink, options)
}
