//! `quicklink completions <shell>` and `quicklink man` – generated docs.

use anyhow::Result;
use clap::CommandFactory;
use std::io::Write;

use crate::cli::Cli;

pub fn run_completions(shell: clap_complete::Shell, out: &mut impl Write) -> Result<()> {
    clap_complete::generate(shell, &mut Cli::command(), "quicklink", out);
    Ok(())
}

pub fn run_man(out: &mut impl Write) -> Result<()> {
    clap_mangen::Man::new(Cli::command()).render(out)?;
    Ok(())
}
