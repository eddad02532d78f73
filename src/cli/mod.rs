//! # Command-Line Interface
//!
//! One batch per invocation: issue IDs arrive on stdin, the rendering leaves
//! on stdout, diagnostics on stderr. Call [`run()`] to parse arguments and
//! execute the batch.

mod app;

pub use app::{run, Cli};
