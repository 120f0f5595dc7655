//! Purpose: Support the `json-sort-fromfile` / `json-sort-fromremote` alias binaries.
//! Exports: `forward_to_subcommand`, `resolve_json_sort_binary`.
//! Role: Each alias execs `json-sort <subcommand> <args...>` and propagates the child status.
//! Invariants: Prefers a `json-sort` next to the current executable, else uses PATH.
//! Invariants: Emits only a plain stderr message on exec failure.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

const BINARY_NAME: &str = "json-sort";

/// Run `json-sort <subcommand>` with `args` and return the exit code to use.
pub fn forward_to_subcommand<I>(alias: &str, subcommand: &str, args: I) -> i32
where
    I: IntoIterator<Item = OsString>,
{
    let target = resolve_json_sort_binary();
    let status = Command::new(&target).arg(subcommand).args(args).status();
    match status {
        Ok(status) => status.code().unwrap_or(1),
        Err(err) => {
            eprintln!("{alias}: failed to execute {}: {err}", target.display());
            1
        }
    }
}

pub fn resolve_json_sort_binary() -> PathBuf {
    let file_name = format!("{BINARY_NAME}{}", env::consts::EXE_SUFFIX);
    if let Ok(exe) = env::current_exe() {
        if let Some(parent) = exe.parent() {
            let candidate = parent.join(&file_name);
            if candidate.exists() {
                return candidate;
            }
        }
    }
    PathBuf::from(BINARY_NAME)
}
