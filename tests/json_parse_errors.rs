//! Purpose: Regression coverage for parse-failure category mapping.
//! Exports: Integration tests only.
//! Role: Verify stable category labels used by decode diagnostics.
//! Notes: Uses source include to exercise internal helper logic without widening API surface.

#[path = "../src/json/parse.rs"]
#[allow(dead_code)]
mod parse;

use parse::ParseFailureCategory;
use serde_json::Value;

#[test]
fn category_mapping_handles_syntax_and_eof() {
    let syntax_err = parse::from_str::<Value>(r#"{"a":}"#).unwrap_err();
    assert_eq!(
        parse::categorize_error(&syntax_err),
        ParseFailureCategory::Syntax
    );

    let eof_err = parse::from_str::<Value>(r#"{"a": [1, 2"#).unwrap_err();
    assert_eq!(parse::categorize_error(&eof_err), ParseFailureCategory::Eof);
}

#[test]
fn category_mapping_handles_data_errors() {
    let data_err = parse::from_str::<u8>("300").unwrap_err();
    assert_eq!(parse::categorize_error(&data_err), ParseFailureCategory::Data);
}

#[test]
fn reader_failures_are_io() {
    struct Broken;
    impl std::io::Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk went away"))
        }
    }

    let err = parse::from_reader::<_, Value>(Broken).unwrap_err();
    assert_eq!(parse::categorize_error(&err), ParseFailureCategory::Io);
}

#[test]
fn hint_contains_category_position_and_context() {
    let err = parse::from_str::<Value>("not json").unwrap_err();
    let hint = parse::hint_for_error(&err, "test.context");
    assert!(hint.contains("parse category: syntax"));
    assert!(hint.contains("line 1 column"));
    assert!(hint.contains("context: test.context"));
}

#[test]
fn nesting_past_serde_default_limit_decodes() {
    let depth = 500;
    let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));

    let from_text = parse::from_str::<Value>(&text).expect("from_str");
    let from_reader = parse::from_reader::<_, Value>(text.as_bytes()).expect("from_reader");
    assert_eq!(from_text, from_reader);
}

#[test]
fn trailing_content_is_still_rejected() {
    let err = parse::from_reader::<_, Value>(&b"[1] [2]"[..]).unwrap_err();
    assert_eq!(parse::categorize_error(&err), ParseFailureCategory::Syntax);
}
