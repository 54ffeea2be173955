//! Command Line Interface (CLI) layer for CARDCROP.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! platform constraints (`platform`) and the orchestration logic (`runner`)
//! for the batch flow. It wires user-provided options to the underlying
//! library functionality exposed via `cardcrop::api`.
pub mod args;
pub mod errors;
pub mod platform;
pub mod runner;

pub use args::CliArgs;
pub use runner::{RunStatus, run};
