//! # CLI
//!
//! One possible UI client for poolpass. The CLI is the only place that knows
//! about terminal I/O, exit codes and output formatting.
//!
//! Running `poolpass` with no arguments is `poolpass status`: how far along
//! the passport is, and the pool currently selected. Pools are addressed by
//! their 1-based number in `poolpass list` or by id; passport pages are
//! 1-based on the command line and zero-based everywhere else.
//!
//! - `args`: Argument parsing via clap
//! - `print`: Output formatting (colors, aligned columns, messages)

pub mod args;
pub mod print;
