//! Purpose: Library crate behind the `json-sort` CLI and its alias binaries.
//! Exports: `api` (load flows, sorted sink, errors), `logging`, `failure`, `alias`, `core`.
//! Role: Everything returns `Result`; only the binaries turn failures into exit codes.
//! Invariants: No module installs a process-global logger or calls `process::exit`.
pub mod alias;
pub mod api;
pub mod core;
pub mod failure;
mod json;
pub mod logging;
