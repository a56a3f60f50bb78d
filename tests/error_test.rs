use std::io;

use create_backend_project::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();

    assert!(matches!(err, Error::JsonError(_)));
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::ProjectExistsError { project_dir: "demo-api".to_string() };
    assert_eq!(
        err.to_string(),
        "Folder 'demo-api' already exists. Please choose a different name."
    );

    let err = Error::IncompleteError { failed: 2, total: 19 };
    assert_eq!(err.to_string(), "2 of 19 entries could not be created.");
}
