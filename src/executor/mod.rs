//! An executor is responsible for preparing workspaces, running the tests in
//! them and generating results.

pub mod results;
pub mod workspace;
mod context;

pub use context::Context;
pub use test::{Test, TIMEOUT};
