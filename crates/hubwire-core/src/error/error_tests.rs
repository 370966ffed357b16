#![allow(non_snake_case)]

use super::*;

#[derive(Debug, serde::Deserialize)]
#[allow(dead_code)]
struct Record {
    id: u64,
}

#[test]
fn CodecError___from_serde_error___syntax_error_becomes_parse() {
    let err = serde_json::from_str::<Record>("{not json").unwrap_err();

    let codec_err: CodecError = err.into();

    assert!(matches!(codec_err, CodecError::Parse(_)));
}

#[test]
fn CodecError___from_serde_error___truncated_input_becomes_parse() {
    let err = serde_json::from_str::<Record>(r#"{"id": 4"#).unwrap_err();

    let codec_err: CodecError = err.into();

    assert!(matches!(codec_err, CodecError::Parse(_)));
}

#[test]
fn CodecError___from_serde_error___data_error_becomes_invalid_format() {
    let err = serde_json::from_str::<Record>(r#"{"id": "text"}"#).unwrap_err();

    let codec_err: CodecError = err.into();

    assert!(matches!(codec_err, CodecError::InvalidFormat(_)));
}

#[test]
fn CodecError___from_io_error___becomes_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");

    let codec_err: CodecError = io_err.into();

    assert!(matches!(codec_err, CodecError::Io(_)));
}

#[test]
fn CodecError___display___argument_count_mismatch_names_method() {
    let err = CodecError::ArgumentCountMismatch {
        method: "Add".into(),
        expected: 2,
        actual: 3,
    };

    let display = err.to_string();

    assert!(display.contains("'Add'"));
    assert!(display.contains("expected 2"));
    assert!(display.contains("got 3"));
}

#[test]
fn CodecError___display___conversion_names_type_and_position() {
    let err = CodecError::Conversion {
        index: 1,
        type_name: "i32".into(),
        message: "invalid type".into(),
    };

    let display = err.to_string();

    assert!(display.contains("position 1"));
    assert!(display.contains("i32"));
}

#[test]
fn CodecError___is_cancelled___true_only_for_cancelled() {
    assert!(CodecError::Cancelled.is_cancelled());
    assert!(!CodecError::Parse("eof".into()).is_cancelled());
    assert!(!CodecError::UnknownInvocation("7".into()).is_cancelled());
}
