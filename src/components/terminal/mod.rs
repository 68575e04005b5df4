mod boot;
mod input;
mod output;
mod shell;
mod terminal;

pub use input::{INPUT_ID, Input};
pub use output::Output;
pub use shell::Shell;
