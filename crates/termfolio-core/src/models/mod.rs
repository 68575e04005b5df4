//! Data models shared by the interpreter and its front ends.
//!
//! - [`OutputLine`], [`OutputLineData`] - terminal output lines

mod terminal;

pub use terminal::{OutputLine, OutputLineData};
