//! `quicklink retrieve <token>` – print the original URL.

use anyhow::Result;
use quicklink_core::MappingStore;
use std::io::Write;

pub fn run_retrieve(store: &MappingStore, token: &str, out: &mut impl Write) -> Result<()> {
    let url = store.retrieve(token)?;
    writeln!(out, "Original URL: {url}")?;
    Ok(())
}
