//! File I/O for the mappings file: whole-file read, single-line append, and
//! filtered rewrite via temp file + fsync + atomic rename.

use std::fs;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::StoreError;
use crate::record;

/// Read the whole mappings file. Returns `None` if it does not exist.
/// Invalid UTF-8 is replaced rather than failing the load.
pub fn read_all(path: &Path) -> Result<Option<String>, StoreError> {
    Ok(read_bytes(path)?.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
}

fn read_bytes(path: &Path) -> Result<Option<Vec<u8>>, StoreError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StoreError::persistence("read", path, e)),
    }
}

/// Append one already-formatted line, creating the file (and parent dir) if needed.
///
/// If the file does not end with a newline (hand-edited), one is written
/// first so the last existing record stays intact.
pub fn append_line(path: &Path, line: &str) -> Result<(), StoreError> {
    ensure_parent(path)?;
    let mut file = fs::OpenOptions::new()
        .read(true)
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| StoreError::persistence("open", path, e))?;
    let needs_newline =
        ends_without_newline(&mut file).map_err(|e| StoreError::persistence("read", path, e))?;
    if needs_newline {
        tracing::debug!(path = %path.display(), "mappings file lacked a trailing newline");
        file.write_all(b"\n")
            .map_err(|e| StoreError::persistence("append to", path, e))?;
    }
    file.write_all(line.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| StoreError::persistence("append to", path, e))
}

/// True if the file is non-empty and its last byte is not `\n`.
fn ends_without_newline(file: &mut fs::File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

/// Rewrite the file without the lines whose first field equals `token`.
///
/// Works on raw bytes: other lines, malformed or non-UTF-8 ones included,
/// are copied byte-for-byte with their original line endings. The new
/// contents go to a temp file in the same directory, are synced, then renamed
/// over the original, so a crash leaves either the old or the new file.
/// Returns the number of lines removed; a missing file removes nothing.
pub fn rewrite_without(path: &Path, token: &str) -> Result<usize, StoreError> {
    let Some(bytes) = read_bytes(path)? else {
        return Ok(0);
    };

    let mut kept = Vec::with_capacity(bytes.len());
    let mut removed = 0;
    for line in bytes.split_inclusive(|&b| b == b'\n') {
        let body = line.strip_suffix(b"\n").unwrap_or(line);
        if record::first_field(body) == token.as_bytes() {
            removed += 1;
        } else {
            kept.extend_from_slice(line);
        }
    }

    let dir = parent_dir(path);
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| StoreError::persistence("create temp file in", dir, e))?;
    tmp.write_all(&kept)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| StoreError::persistence("write temp file for", path, e))?;
    tmp.persist(path)
        .map_err(|e| StoreError::persistence("replace", path, e.error))?;

    Ok(removed)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

fn ensure_parent(path: &Path) -> Result<(), StoreError> {
    let dir = parent_dir(path);
    fs::create_dir_all(dir).map_err(|e| StoreError::persistence("create dir", dir, e))
}
