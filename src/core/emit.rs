//! Purpose: Serialize JSON values with object keys sorted at every depth.
//! Exports: `sort_keys`, `to_sorted_string`, `write_sorted_to`, `write_sorted`.
//! Role: The only sink used by both load flows; file and stdout get identical bytes.
//! Invariants: Two-space indent, `,` item separator, `: ` key separator, no trailing newline.
//! Invariants: Non-ASCII text is written literally, never `\u` escaped.
//! Invariants: Key order does not depend on how the JSON map stores entries.
//! Invariants: Numbers keep the text they were decoded from; nesting depth is not capped.

use super::error::{Error, ErrorKind};
use super::paths::resolve_path;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

const INDENT: &[u8] = b"  ";
const RED_ZONE: usize = 64 * 1024;
const STACK_GROWTH: usize = 2 * 1024 * 1024;

/// Return a copy of `value` whose objects list their keys in ascending order.
pub fn sort_keys(value: &Value) -> Value {
    stacker::maybe_grow(RED_ZONE, STACK_GROWTH, || match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut sorted = Map::new();
            for (key, value) in entries {
                sorted.insert(key.clone(), sort_keys(value));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    })
}

pub fn write_sorted_to<W: Write>(writer: W, value: &Value) -> io::Result<()> {
    let mut serializer =
        serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    sort_keys(value)
        .serialize(serde_stacker::Serializer::new(&mut serializer))
        .map_err(io::Error::from)
}

pub fn to_sorted_string(value: &Value) -> io::Result<String> {
    let mut out = Vec::new();
    write_sorted_to(&mut out, value)?;
    String::from_utf8(out).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

/// Write `value` to `dst` (created or truncated) or to stdout when `dst` is `None`.
pub fn write_sorted(dst: Option<&Path>, value: &Value) -> Result<(), Error> {
    match dst {
        Some(dst) => {
            let dst = resolve_path(dst)?;
            debug!("Saving to: {}", dst.display());
            let file = File::create(&dst).map_err(|err| {
                Error::new(ErrorKind::Io)
                    .with_message(format!("failed to open '{}' for writing", dst.display()))
                    .with_path(&dst)
                    .with_source(err)
            })?;
            let mut writer = BufWriter::new(file);
            write_sorted_to(&mut writer, value)
                .and_then(|()| writer.flush())
                .map_err(|err| {
                    Error::new(ErrorKind::Io)
                        .with_message(format!("failed to write '{}'", dst.display()))
                        .with_path(&dst)
                        .with_source(err)
                })
        }
        None => {
            debug!("Current std will be used");
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_sorted_to(&mut writer, value)
                .and_then(|()| writer.flush())
                .map_err(|err| {
                    Error::new(ErrorKind::Io)
                        .with_message("failed to write to stdout")
                        .with_source(err)
                })
        }
    }
}
