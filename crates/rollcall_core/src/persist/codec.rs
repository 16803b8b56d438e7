//! JSON document codec for the roster.
//!
//! # Responsibility
//! - Read the persisted document into a validated `RecordStore`.
//! - Write the full collection back, replacing the document atomically.
//!
//! # Invariants
//! - A missing document is the first-run case, not an error.
//! - The read path rejects invalid persisted state instead of masking it.
//! - The write path goes through a tempfile in the destination directory
//!   and renames into place.

use log::{error, info};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tempfile::NamedTempFile;

use super::{PersistError, PersistResult};
use crate::model::student::StudentRecord;
use crate::store::roster::RecordStore;

const DOCUMENT_INDENT: &[u8] = b"    ";

/// Loads the roster document at `path` into a validated store.
///
/// # Contract
/// - A nonexistent path yields an empty store.
/// - An unreadable, unparseable or invariant-violating document is an
///   error; the fall-back-to-empty policy belongs to the caller.
pub fn load(path: impl AsRef<Path>) -> PersistResult<RecordStore> {
    let path = path.as_ref();
    let started_at = Instant::now();

    if !path.exists() {
        info!(
            "event=data_load module=persist status=empty reason=no_document path={}",
            path.display()
        );
        return Ok(RecordStore::new());
    }

    let text = std::fs::read_to_string(path).map_err(|err| {
        error!(
            "event=data_load module=persist status=error error_code=read_failed path={} error={}",
            path.display(),
            err
        );
        PersistError::Read(err)
    })?;

    let records: Vec<StudentRecord> = serde_json::from_str(&text).map_err(|err| {
        error!(
            "event=data_load module=persist status=error error_code=parse_failed path={} error={}",
            path.display(),
            err
        );
        PersistError::Parse(err)
    })?;

    let store = RecordStore::from_records(records).map_err(|err| {
        error!(
            "event=data_load module=persist status=error error_code=invariant_violation path={} error={}",
            path.display(),
            err
        );
        PersistError::Store(err)
    })?;

    info!(
        "event=data_load module=persist status=ok records={} duration_ms={} path={}",
        store.len(),
        started_at.elapsed().as_millis(),
        path.display()
    );
    Ok(store)
}

/// Saves the full collection to `path`, replacing any existing document.
///
/// # Contract
/// - The document is pretty-printed UTF-8 JSON.
/// - The destination is replaced atomically via tempfile-then-rename; a
///   failure mid-write leaves the previous document intact.
pub fn save(store: &RecordStore, path: impl AsRef<Path>) -> PersistResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let document = encode_document(store.records())?;

    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let result = write_replacing(&document, dir, path);
    match &result {
        Ok(()) => info!(
            "event=data_save module=persist status=ok records={} duration_ms={} path={}",
            store.len(),
            started_at.elapsed().as_millis(),
            path.display()
        ),
        Err(err) => error!(
            "event=data_save module=persist status=error error_code=write_failed path={} error={}",
            path.display(),
            err
        ),
    }
    result
}

fn encode_document(records: &[StudentRecord]) -> PersistResult<Vec<u8>> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(DOCUMENT_INDENT);
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut serializer)
        .map_err(PersistError::Encode)?;
    Ok(buf)
}

fn write_replacing(document: &[u8], dir: &Path, path: &Path) -> PersistResult<()> {
    let mut tmp = NamedTempFile::new_in(dir).map_err(PersistError::Write)?;
    tmp.write_all(document).map_err(PersistError::Write)?;
    tmp.as_file().sync_all().map_err(PersistError::Write)?;
    tmp.persist(path)
        .map_err(|err| PersistError::Write(err.error))?;
    Ok(())
}
