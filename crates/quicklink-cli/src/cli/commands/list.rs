//! `quicklink list` – show tokens in creation order.

use anyhow::Result;
use quicklink_core::{Mapping, MappingStore};
use std::io::Write;

use crate::cli::ListArgs;

pub fn run_list(store: &MappingStore, args: ListArgs, out: &mut impl Write) -> Result<()> {
    if args.json {
        let mappings: Vec<Mapping<'_>> = store.mappings().collect();
        serde_json::to_writer_pretty(&mut *out, &mappings)?;
        writeln!(out)?;
        return Ok(());
    }

    if store.is_empty() {
        writeln!(out, "No short URLs yet.")?;
        return Ok(());
    }

    if args.long {
        let width = store
            .list()
            .iter()
            .map(String::len)
            .max()
            .unwrap_or(0)
            .max("TOKEN".len());
        writeln!(out, "{:<width$}  {}", "TOKEN", "URL")?;
        for m in store.mappings() {
            writeln!(out, "{:<width$}  {}", m.token, m.url)?;
        }
    } else {
        for token in store.list() {
            writeln!(out, "{token}")?;
        }
    }
    Ok(())
}
