//! isorun runs every test program in a directory, each inside its own freshly
//! created working directory, and prints what the programs wrote.
//!
//! ## Testing Model
//! A test is any file in the test directory whose name starts with `test_`
//! and ends with `.py`. The file must be directly executable: it needs the
//! execute permission and an interpreter line such as `#!/usr/bin/env python3`.
//!
//! For every test, isorun:
//!   1. removes `executions/<name>/` if a previous run left it behind,
//!   2. creates it again and copies the test file into it,
//!   3. runs the copy with no arguments and `executions/<name>/` as its
//!      working directory, killing it after 120 seconds,
//!   4. prints everything the test wrote to STDOUT and STDERR.
//!
//! Tests run one at a time, sorted by name. Whatever a test leaves in its
//! workspace stays there until the next run of the same test.
//!
//! ## Running
//! ```bash
//! isorun path/to/tests
//! ```
//! produces a report section per test:
//! ```text
//! ----------test_hello----------
//! stdout:
//!     hello
//! stderr:
//!
//! ```
//! Each captured line is indented with a tab. The exit status of a test is
//! not judged. A test that times out, or that isorun fails to prepare or
//! launch, is reported with an `error:` section instead and the remaining
//! tests still run; isorun then exits with status 1.
//!
//! ## Configuration
//! An optional `isorun.toml` next to the tests can move the executions root:
//! ```toml
//! ver = "0.1.0"
//! executions = "build/executions"
//! ```
//! Use `-v`, `-vv` or `RUST_LOG` to see what the harness is doing on STDERR.
pub mod cli;
pub mod errors;
pub mod executor;
pub mod picker;
