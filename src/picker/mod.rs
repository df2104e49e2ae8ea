//! Pickers gather the tests to run and the settings to run them with.

pub mod convention;
pub mod toml;
