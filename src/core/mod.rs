//! Purpose: Core building blocks for json-sort: failures, path resolution, sorted emission.
//! Exports: `error`, `paths`, `emit`.
//! Role: Filesystem- and format-level primitives; no HTTP and no logging setup.
//! Invariants: Functions return `Result<_, Error>`; nothing here terminates the process.

pub mod emit;
pub mod error;
pub mod paths;
