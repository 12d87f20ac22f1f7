//! Shared plumbing for the `shop` and `wizard` solver binaries.
//!
//! Each binary is a composition root: it reads [`config::ClientConfig`]
//! from the environment, applies its command-line overrides, installs
//! logging, runs one solver from `game-core` and prints the answers with
//! [`output`]. Answers go to stdout, logs to stderr.

pub mod config;
pub mod logging;
pub mod output;

pub use config::ClientConfig;
