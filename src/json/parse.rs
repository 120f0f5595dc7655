//! Purpose: Provide the runtime JSON decode entrypoints and failure categories.
//! Exports: `from_str`, `from_reader`, `ParseFailureCategory`, `categorize_error`, `hint_for_error`.
//! Role: Parser boundary so callsites avoid ad hoc decode logic.
//! Invariants: Whole-document decoding only; trailing non-whitespace is an error.
//! Invariants: No nesting limit; the stack grows on demand while decoding deep documents.
//! Notes: Error mapping is done by callsites so domain context stays explicit.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::de::Read as JsonRead;
use std::io::Read;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseFailureCategory {
    Syntax,
    Eof,
    Data,
    Io,
}

impl ParseFailureCategory {
    pub fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Eof => "eof",
            ParseFailureCategory::Data => "data",
            ParseFailureCategory::Io => "io",
        }
    }
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    decode(serde_json::Deserializer::from_str(input))
}

pub fn from_reader<R: Read, T: DeserializeOwned>(reader: R) -> Result<T, serde_json::Error> {
    decode(serde_json::Deserializer::from_reader(reader))
}

fn decode<'de, R, T>(mut de: serde_json::Deserializer<R>) -> Result<T, serde_json::Error>
where
    R: JsonRead<'de>,
    T: DeserializeOwned,
{
    de.disable_recursion_limit();
    let value: T = Deserialize::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

pub fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match err.classify() {
        serde_json::error::Category::Syntax => ParseFailureCategory::Syntax,
        serde_json::error::Category::Eof => ParseFailureCategory::Eof,
        serde_json::error::Category::Data => ParseFailureCategory::Data,
        serde_json::error::Category::Io => ParseFailureCategory::Io,
    }
}

pub fn hint_for_error(err: &serde_json::Error, context: &str) -> String {
    format!(
        "parse category: {}; line {} column {}; context: {context}",
        categorize_error(err).label(),
        err.line(),
        err.column()
    )
}
