//! Interactive terminal front end.
//!
//! The menu reads from any `BufRead` and writes to any `Write`, so it runs
//! the same against a terminal and against in-memory buffers in tests.

mod menu;
mod prompt;
mod report;

pub use menu::{Menu, MenuChoice};
pub use prompt::{Prompt, parse_decimal, parse_u32};
pub use report::{OutputFormat, render_all, render_company};
