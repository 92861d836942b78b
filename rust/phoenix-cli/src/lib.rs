//! Phoenix CLI library.
//!
//! Command implementations shared by the `phoenix` binary and its tests.

pub mod check_cmd;
pub mod error;
pub mod init_cmd;
pub mod sort_cmd;
pub mod suites;

pub use error::CliError;
