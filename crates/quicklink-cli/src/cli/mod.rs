//! CLI for the QuickLink URL shortener.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use quicklink_core::config;
use quicklink_core::MappingStore;
use std::io;
use std::path::PathBuf;

use commands::{
    run_completions, run_delete, run_list, run_man, run_retrieve, run_shell, run_shorten,
};

/// Top-level CLI for QuickLink.
#[derive(Debug, Parser)]
#[command(name = "quicklink")]
#[command(about = "QuickLink: shorten, look up, and delete short URLs", long_about = None)]
pub struct Cli {
    /// Mappings file to use instead of the configured one.
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Shorten a long URL and print its token.
    Shorten {
        /// URL to shorten.
        url: String,
    },

    /// Print the original URL for a short token.
    Retrieve {
        /// Short token, e.g. short.ly/632849614.
        token: String,
    },

    /// Delete a short token.
    Delete {
        /// Short token to delete.
        token: String,
    },

    /// List short tokens in creation order.
    List(ListArgs),

    /// Interactive mode: read commands from stdin until `quit` or EOF.
    Shell,

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff).
    Man,
}

/// Output options shared by `list` and the shell's `list`.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct ListArgs {
    /// Show the original URL next to each token.
    #[arg(long, conflicts_with = "json")]
    pub long: bool,

    /// Print mappings as a JSON array of {token, url}.
    #[arg(long)]
    pub json: bool,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut out = io::stdout().lock();

        // Commands that never touch the store.
        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell, &mut out),
            CliCommand::Man => return run_man(&mut out),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let path = cfg.resolve_store_path(cli.store)?;
        let mut store = MappingStore::open(path, cfg.token_prefix)?;

        match cli.command {
            CliCommand::Shorten { url } => run_shorten(&mut store, &url, &mut out)?,
            CliCommand::Retrieve { token } => run_retrieve(&store, &token, &mut out)?,
            CliCommand::Delete { token } => run_delete(&mut store, &token, &mut out)?,
            CliCommand::List(args) => run_list(&store, args, &mut out)?,
            CliCommand::Shell => run_shell(&mut store, io::stdin().lock(), &mut out)?,
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
