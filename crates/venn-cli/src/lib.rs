//! Terminal front end for live Venn set-expression evaluation.
//!
//! The `venn` binary either evaluates a single expression given with
//! `--expr`, or reads edits line by line from stdin and re-renders the
//! session after each one. When the current expression is not evaluable the
//! last good result stays on screen together with the reason.
//!
//! # Configuration
//!
//! - `VENN_LOG_LEVEL`: Log verbosity (trace, debug, info, warn, error)
//! - `VENN_UNIVERSE_SIZE`: Number of universe elements (`1..=N`)

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod repl;
