//! Tests for core error types

use sketchroute::core::{Archetype, DiagramError, DiagramInput};
use std::path::PathBuf;

#[test]
fn test_build_error() {
    let error = DiagramError::build_error("flowchart", "dangling edge");
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Build error"));
    assert!(error_msg.contains("flowchart"));
    assert!(error_msg.contains("dangling edge"));
}

#[test]
fn test_invalid_model_error() {
    let error = DiagramError::invalid_model("duplicate node id 'a'");
    assert_eq!(error.to_string(), "Invalid model: duplicate node id 'a'");
}

#[test]
fn test_io_error_names_path() {
    let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = DiagramError::io_error(PathBuf::from("/tmp/out.excalidraw"), source);
    let error_msg = error.to_string();
    assert!(error_msg.contains("/tmp/out.excalidraw"));
    assert!(error_msg.contains("denied"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_unknown_archetype() {
    let error = "gantt".parse::<Archetype>().unwrap_err();
    assert!(matches!(error, DiagramError::UnknownArchetype { .. }));
    assert!(error.to_string().contains("gantt"));
}

#[test]
fn test_invalid_input_from_json() {
    let error = DiagramInput::from_json(r#"{"elements": "not a list"}"#).unwrap_err();
    assert!(matches!(error, DiagramError::InvalidInput { .. }));
}

#[test]
fn test_serialization_error_from_serde() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: DiagramError = source.into();
    assert!(error.to_string().starts_with("Serialization error"));
}
