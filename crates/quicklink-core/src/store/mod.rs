//! Mapping store: short token -> original URL, backed by a line-oriented file.
//!
//! The whole file is loaded on open. `shorten` appends one line, `delete`
//! rewrites the file without the token's lines. Memory is updated first and
//! is not rolled back if the file write fails, so after a persistence error
//! the in-memory view and the file can disagree until the next open.

pub mod persist;

use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::record;
use crate::token;

/// Default file name under the XDG state dir.
pub const DEFAULT_FILE_NAME: &str = "url_mappings.txt";

/// One token/URL pair, borrowed from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mapping<'a> {
    pub token: &'a str,
    pub url: &'a str,
}

/// Single-owner store. Not synchronized; wrap it in a mutex or give it a
/// single writer if it ever needs to be shared.
#[derive(Debug)]
pub struct MappingStore {
    path: PathBuf,
    token_prefix: String,
    urls: HashMap<String, String>,
    /// Tokens in insertion order, each once.
    order: Vec<String>,
}

impl MappingStore {
    /// Open the store at `path`, loading any existing mappings.
    ///
    /// A missing file is an empty store. Malformed lines are skipped. When a
    /// token appears on several lines the last URL wins and the token keeps
    /// the position of its first line.
    pub fn open(path: impl Into<PathBuf>, token_prefix: impl Into<String>) -> Result<Self, StoreError> {
        let mut store = MappingStore {
            path: path.into(),
            token_prefix: token_prefix.into(),
            urls: HashMap::new(),
            order: Vec::new(),
        };

        let Some(contents) = persist::read_all(&store.path)? else {
            tracing::debug!(path = %store.path.display(), "no mappings file yet");
            return Ok(store);
        };

        let mut skipped = 0usize;
        for line in contents.lines() {
            match record::parse_line(line) {
                Some((token, url)) => store.insert(token, url),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            tracing::debug!(skipped, "skipped malformed lines in mappings file");
        }
        tracing::info!(
            path = %store.path.display(),
            count = store.order.len(),
            "loaded mappings"
        );
        Ok(store)
    }

    /// Shorten `long_url` and persist the mapping. Returns the token.
    ///
    /// The URL is trimmed first; an empty result, or one that still contains
    /// a line break, is a validation error. The same URL always yields the
    /// same token.
    pub fn shorten(&mut self, long_url: &str) -> Result<String, StoreError> {
        let url = long_url.trim();
        if url.is_empty() || record::has_line_break(url) {
            return Err(StoreError::Validation);
        }

        let token = token::derive_token(&self.token_prefix, url);
        if let Some(previous) = self.urls.get(&token) {
            if previous != url {
                tracing::warn!(
                    token = %token,
                    previous = %previous,
                    url = %url,
                    "token collision, overwriting existing mapping"
                );
            }
        }
        if record::has_separator(url) {
            tracing::warn!(
                url = %url,
                "url contains a comma and will not load back from the mappings file"
            );
        }

        self.insert(&token, url);
        persist::append_line(&self.path, &record::format_line(&token, url))?;
        tracing::info!(token = %token, url = %url, "shortened");
        Ok(token)
    }

    /// Original URL for `token`.
    pub fn retrieve(&self, token: &str) -> Result<&str, StoreError> {
        self.urls
            .get(token)
            .map(String::as_str)
            .ok_or_else(|| StoreError::not_found(token))
    }

    /// Remove `token` from memory and from the mappings file.
    pub fn delete(&mut self, token: &str) -> Result<(), StoreError> {
        if self.urls.remove(token).is_none() {
            return Err(StoreError::not_found(token));
        }
        self.order.retain(|t| t != token);

        let removed = persist::rewrite_without(&self.path, token)?;
        tracing::info!(token = %token, lines_removed = removed, "deleted");
        Ok(())
    }

    /// Tokens in insertion order.
    pub fn list(&self) -> &[String] {
        &self.order
    }

    /// Token/URL pairs in insertion order.
    pub fn mappings(&self) -> impl Iterator<Item = Mapping<'_>> + '_ {
        self.order.iter().filter_map(move |token| {
            self.urls.get(token).map(|url| Mapping {
                token: token.as_str(),
                url: url.as_str(),
            })
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn token_prefix(&self) -> &str {
        &self.token_prefix
    }

    fn insert(&mut self, token: &str, url: &str) {
        if self
            .urls
            .insert(token.to_string(), url.to_string())
            .is_none()
        {
            self.order.push(token.to_string());
        }
    }
}
