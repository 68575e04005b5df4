//! Native REPL over the termfolio interpreter.
//!
//! Reads lines from any [`BufRead`], writes rendered results to any
//! [`Write`], so sessions can be driven from tests without a terminal.

use std::io::{self, BufRead, Write};

use clap::Parser;
use thiserror::Error;

use termfolio_core::effects::{boot_script, welcome_line};
use termfolio_core::{CommandResult, Directive, Interpreter, OutputLineData};

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Parser)]
#[command(name = "termfolio-cli", about = "Portfolio terminal in your shell")]
pub struct Cli {
    /// Host shown in the prompt
    #[arg(long)]
    pub host: Option<String>,

    /// Print each result as a JSON object instead of text
    #[arg(long)]
    pub json: bool,

    /// Skip the boot log
    #[arg(long)]
    pub no_boot: bool,

    /// Run a single line and exit
    #[arg(short, long, value_name = "LINE")]
    pub command: Option<String>,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Input ran out
    Eof,
    /// A single `--command` line was run
    Done,
}

/// A terminal session bound to an output sink.
pub struct Session<W: Write> {
    shell: Interpreter,
    host: Option<String>,
    out: W,
    json: bool,
    boot: bool,
}

impl<W: Write> Session<W> {
    pub fn new(cli: &Cli, out: W) -> Self {
        Self {
            shell: fresh_shell(cli.host.as_deref()),
            host: cli.host.clone(),
            out,
            json: cli.json,
            boot: !cli.no_boot,
        }
    }

    /// Print the boot log. Delays are skipped; the log is decoration.
    pub fn boot(&mut self) -> Result<(), CliError> {
        if !self.boot || self.json {
            return Ok(());
        }
        for step in boot_script(&mut rand::thread_rng()) {
            writeln!(self.out, "{}", step.line)?;
        }
        writeln!(self.out, "{}", welcome_line().plain_text())?;
        Ok(())
    }

    /// Run one line and render its result.
    pub fn run_line(&mut self, line: &str) -> Result<(), CliError> {
        let result = self.shell.dispatch(line);
        tracing::debug!(
            lines = result.output.len(),
            directive = ?result.directive,
            "command finished"
        );

        if self.json {
            serde_json::to_writer(&mut self.out, &result)?;
            writeln!(self.out)?;
        } else {
            self.render(&result)?;
        }

        match result.directive {
            Directive::None => {}
            Directive::ClearOutput => {
                if !self.json {
                    write!(self.out, "{}", CLEAR_SCREEN)?;
                }
            }
            Directive::Reload => {
                tracing::info!("session reset");
                self.shell = fresh_shell(self.host.as_deref());
                if !self.json {
                    write!(self.out, "{}", CLEAR_SCREEN)?;
                }
                self.boot()?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Read lines until EOF, printing a prompt before each.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<Exit, CliError> {
        self.boot()?;
        let mut lines = input.lines();
        loop {
            if !self.json {
                write!(self.out, "{} ", self.shell.prompt())?;
                self.out.flush()?;
            }
            let Some(line) = lines.next() else {
                if !self.json {
                    writeln!(self.out)?;
                }
                return Ok(Exit::Eof);
            };
            self.run_line(&line?)?;
        }
    }

    /// Run a single line without boot log or prompt.
    pub fn run_once(&mut self, line: &str) -> Result<Exit, CliError> {
        self.run_line(line)?;
        Ok(Exit::Done)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Text rendering. The echo line is skipped since the user already sees
    /// the prompt and their input.
    fn render(&mut self, result: &CommandResult) -> Result<(), CliError> {
        for line in &result.output {
            if matches!(line.data, OutputLineData::Command { .. }) {
                continue;
            }
            writeln!(self.out, "{}", line.plain_text())?;
        }
        Ok(())
    }
}

fn fresh_shell(host: Option<&str>) -> Interpreter {
    match host {
        Some(host) => Interpreter::default().with_host(host),
        None => Interpreter::default(),
    }
}
