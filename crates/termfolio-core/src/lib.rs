//! Core logic for the termfolio portfolio terminal.
//!
//! This crate provides:
//! - [`VirtualFs`] - the flat, read-only file catalog
//! - [`Interpreter`] - turns input lines into [`CommandResult`]s
//! - [`OutputLine`] - terminal output model shared by the web page and the CLI
//! - [`effects`] - decorative animations as testable state machines

pub mod commands;
pub mod config;
pub mod effects;
pub mod error;
mod filesystem;
mod interpreter;
pub mod markup;
pub mod models;
pub mod parser;
mod ring_buffer;

pub use commands::{Command, CommandResult, Directive};
pub use error::VfsError;
pub use filesystem::{VirtualFile, VirtualFs};
pub use interpreter::Interpreter;
pub use models::{OutputLine, OutputLineData};
pub use parser::{ParsedCommand, parse_input};
pub use ring_buffer::RingBuffer;
