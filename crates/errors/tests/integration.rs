//! Integration tests for error types

#[cfg(test)]
mod tests {
    use elasi_errors::*;
    use std::path::Path;

    #[test]
    fn test_error_conversion() {
        let build_err = BuildError::ConverterFailed {
            program: "mz".into(),
            code: Some(2),
            stderr: String::new(),
        };
        let err: Error = build_err.into();
        assert!(matches!(err, Error::Build(_)));
        assert_eq!(err.user_code(), Some("build.converter_failed"));
    }

    #[test]
    fn test_converter_failure_display() {
        let err = BuildError::ConverterFailed {
            program: "node_modules/.bin/mz".into(),
            code: Some(2),
            stderr: "bad flag".into(),
        };
        assert_eq!(
            err.to_string(),
            "converter node_modules/.bin/mz exited with status 2: bad flag"
        );

        let killed = BuildError::ConverterFailed {
            program: "mz".into(),
            code: None,
            stderr: String::new(),
        };
        assert!(killed.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_missing_input_is_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ConfigError::from_read(&io_err, Path::new("/proj/package.json"));
        assert!(matches!(err, ConfigError::NotFound { ref path } if path == "/proj/package.json"));
        assert!(err.user_hint().is_some());
    }

    #[test]
    fn test_unreadable_input_keeps_message() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = ConfigError::from_read(&io_err, Path::new("/proj/src/copyright-header.txt"));
        assert!(matches!(err, ConfigError::ReadFailed { .. }));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_storage_error_from_io_with_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let err = StorageError::from_io_with_path(&io_err, Path::new("/proj/dist"));
        assert!(matches!(err, StorageError::PermissionDenied { .. }));
        assert_eq!(err.to_string(), "permission denied: /proj/dist");
    }

    #[test]
    fn test_error_clone() {
        let err = ConfigError::InvalidValue {
            field: "ELASI_BUILD_YEAR".into(),
            value: "soon".into(),
        };
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }

    #[test]
    fn test_json_error_is_internal() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Internal(_)));
        assert!(!err.is_retryable());
        assert_eq!(err.user_code(), Some("error.internal"));
    }

    #[test]
    fn test_unclassified_storage_error_is_retryable() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Interrupted, "try again");
        let err: Error = StorageError::from_io_with_path(&io_err, Path::new("/proj/dist")).into();
        assert!(err.is_retryable());
        assert_eq!(err.user_code(), Some("storage.io_error"));
    }
}
