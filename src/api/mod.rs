//! Purpose: Define the public Rust API boundary for json-sort.
//! Exports: Load flows, the sorted sink, source/option types, and the error taxonomy.
//! Role: What the CLI and embedding callers use; failures come back as `Result`.
//! Invariants: Nothing reachable from here exits the process.
//! Invariants: Internal modules remain private and are re-exported selectively.

mod local;
mod remote;

pub use crate::core::emit::{sort_keys, to_sorted_string, write_sorted, write_sorted_to};
#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::paths::{resolve_path, resolve_source};
pub use local::{load_from_file, read_document};
pub use remote::{RemoteClient, load_from_url};

use std::path::PathBuf;

pub type ApiResult<T> = Result<T, Error>;

/// Where a document is read from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }
}

/// Per-invocation settings shared by both commands.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SortOptions {
    /// Destination file; `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// Raise log level from warnings to debug traces.
    pub verbose: bool,
}

impl SortOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Read `source` and write it sorted to the configured destination.
pub fn run(source: &Source, options: &SortOptions) -> ApiResult<()> {
    let dst = options.output.as_deref();
    match source {
        Source::File(path) => load_from_file(path, dst),
        Source::Url(url) => load_from_url(url, dst),
    }
}
