//! `quicklink delete <token>` – remove a mapping from memory and disk.

use anyhow::Result;
use quicklink_core::MappingStore;
use std::io::Write;

pub fn run_delete(store: &mut MappingStore, token: &str, out: &mut impl Write) -> Result<()> {
    store.delete(token)?;
    writeln!(out, "Shortened URL deleted successfully.")?;
    Ok(())
}
