//! Terminal front end: argument parsing, dispatch, and text rendering.

mod args;
mod commands;
mod render;

pub use args::Cli;
pub use commands::run;
