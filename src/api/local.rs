//! Purpose: Load a JSON document from the local filesystem.
//! Exports: `read_document`, `load_from_file`.
//! Role: Local acquisition flow; resolves, opens, decodes, then hands off to the sorted sink.
//! Invariants: The whole file is decoded as exactly one JSON value.
//! Invariants: Failures are returned classified; this module never terminates the process.

use super::ApiResult;
use crate::core::emit::write_sorted;
use crate::core::error::{Error, ErrorKind};
use crate::core::paths::resolve_source;
use crate::json::parse::{self, ParseFailureCategory};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Resolve `src`, check it exists, and decode its contents.
pub fn read_document(src: impl AsRef<Path>) -> ApiResult<Value> {
    let path = resolve_source(src)?;
    let file = File::open(&path).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message(format!("failed to open '{}'", path.display()))
            .with_path(&path)
            .with_source(err)
    })?;
    parse::from_reader(BufReader::new(file)).map_err(|err| decode_error(&path, err))
}

pub fn load_from_file(src: impl AsRef<Path>, dst: Option<&Path>) -> ApiResult<()> {
    let value = read_document(src)?;
    write_sorted(dst, &value)
}

fn decode_error(path: &Path, err: serde_json::Error) -> Error {
    let hint = parse::hint_for_error(&err, &path.display().to_string());
    let (kind, message) = match parse::categorize_error(&err) {
        ParseFailureCategory::Io => (
            ErrorKind::Io,
            format!("failed to read '{}'", path.display()),
        ),
        _ => (
            ErrorKind::Decode,
            format!("failed to decode JSON from '{}'", path.display()),
        ),
    };
    Error::new(kind)
        .with_message(message)
        .with_hint(hint)
        .with_path(path)
        .with_source(err)
}
