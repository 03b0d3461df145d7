//! `quicklink shorten <url>` – create (or re-create) a short token.

use anyhow::Result;
use quicklink_core::MappingStore;
use std::io::Write;

pub fn run_shorten(store: &mut MappingStore, url: &str, out: &mut impl Write) -> Result<()> {
    let token = store.shorten(url)?;
    writeln!(out, "{token}")?;
    Ok(())
}
