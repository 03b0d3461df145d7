//! `quicklink shell` – long-lived interactive session over one store.
//!
//! Every line is parsed as a command. Store errors and parse errors are
//! printed and the loop continues; only I/O on the terminal itself ends it.
//! For `shorten`, the rest of the line is the URL, spaces included.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use quicklink_core::MappingStore;
use std::io::{BufRead, Write};

use super::{run_delete, run_list, run_retrieve, run_shorten};
use crate::cli::ListArgs;

const PROMPT: &str = "quicklink> ";

#[derive(Debug, Parser)]
#[command(name = "quicklink", no_binary_name = true, disable_help_subcommand = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    /// Shorten a long URL (the rest of the line) and print its token.
    Shorten { url: String },
    /// Print the original URL for a short token.
    Retrieve { token: String },
    /// Delete a short token.
    Delete { token: String },
    /// List short tokens in creation order.
    List(ListArgs),
    /// Show this help.
    Help,
    /// Leave the shell.
    #[command(alias = "exit")]
    Quit,
}

/// What the loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run_shell(store: &mut MappingStore, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    tracing::info!(path = %store.path().display(), "shell started");
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if run_line(store, &line, out)? == Flow::Quit {
            break;
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    writeln!(out)?;
    tracing::info!("shell finished");
    Ok(())
}

/// URL argument of a `shorten` line, taken verbatim up to the end of the
/// line. `None` for other commands and for flags such as `shorten --help`.
fn shorten_argument(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix("shorten")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let url = rest.trim();
    (!url.is_empty() && !url.starts_with('-')).then_some(url)
}

fn run_line(store: &mut MappingStore, line: &str, out: &mut impl Write) -> Result<Flow> {
    if let Some(url) = shorten_argument(line) {
        if let Err(err) = run_shorten(store, url, out) {
            tracing::debug!("shell command failed: {:#}", err);
            writeln!(out, "Error: {:#}", err)?;
        }
        return Ok(Flow::Continue);
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(Flow::Continue);
    }

    let command = match ShellLine::try_parse_from(words.iter().copied()) {
        Ok(parsed) => parsed.command,
        Err(err) => {
            write!(out, "{}", err.render())?;
            return Ok(Flow::Continue);
        }
    };

    let result = match command {
        ShellCommand::Shorten { url } => run_shorten(store, &url, out),
        ShellCommand::Retrieve { token } => run_retrieve(store, &token, out),
        ShellCommand::Delete { token } => run_delete(store, &token, out),
        ShellCommand::List(args) => run_list(store, args, out),
        ShellCommand::Help => {
            write!(out, "{}", ShellLine::command().render_help())?;
            Ok(())
        }
        ShellCommand::Quit => return Ok(Flow::Quit),
    };

    if let Err(err) = result {
        tracing::debug!("shell command failed: {:#}", err);
        writeln!(out, "Error: {:#}", err)?;
    }
    Ok(Flow::Continue)
}
