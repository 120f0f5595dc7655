//! Purpose: Classified failure type shared by the load flows and the CLI.
//! Exports: `Error`, `ErrorKind`, `to_exit_code`.
//! Role: Single failure taxonomy; kinds are decided where an error originates.
//! Invariants: Every classified failure maps to exit code 1.
//! Invariants: Structured context is additive; `extra()` never drops a set field.
use serde_json::{Map, Value};
use std::error::Error as StdError;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The resolved source path does not exist.
    NotFound,
    /// Input text is not a valid JSON value.
    Decode,
    /// Filesystem failure while reading the source or writing the destination.
    Io,
    /// Network or HTTP-layer failure, including non-success status codes.
    Remote,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    hint: Option<String>,
    path: Option<PathBuf>,
    url: Option<String>,
    status: Option<u16>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            hint: None,
            path: None,
            url: None,
            status: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Structured context attached to the failure, e.g. `{"filename": "/abs/in.json"}`.
    pub fn extra(&self) -> Map<String, Value> {
        let mut extra = Map::new();
        if let Some(path) = &self.path {
            extra.insert(
                "filename".to_string(),
                Value::from(path.to_string_lossy().into_owned()),
            );
        }
        if let Some(url) = &self.url {
            extra.insert("url".to_string(), Value::from(url.clone()));
        }
        if let Some(status) = self.status {
            extra.insert("status".to_string(), Value::from(status));
        }
        extra
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{message}")?,
            None => write!(f, "{:?}", self.kind)?,
        }
        // NotFound messages already name the resolved path.
        if self.kind != ErrorKind::NotFound {
            if let Some(source) = &self.source {
                write!(f, ": {source}")?;
            }
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

pub fn to_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::NotFound | ErrorKind::Decode | ErrorKind::Io | ErrorKind::Remote => 1,
    }
}
