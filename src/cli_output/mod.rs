//! Line-based terminal output: notices and the `--list` candidate table.

mod lines;

pub use lines::*;
