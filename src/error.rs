use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid JSON syntax in manifest '{file}'")]
#[diagnostic(
    code(roundabout::manifest_parse_error),
    help("Check the JSON syntax near the highlighted position")
)]
pub struct ManifestParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum RoundaboutError {
    #[error("Failed to read manifest '{path}'")]
    #[diagnostic(
        code(roundabout::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    ManifestReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ManifestParseError(Box<ManifestParseError>),

    #[error("Invalid glob pattern '{pattern}'")]
    #[diagnostic(
        code(roundabout::pattern_error),
        help("Check the include/exclude pattern syntax")
    )]
    PatternError {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(roundabout::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(roundabout::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(roundabout::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(roundabout::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Cycle report callback failed: {message}")]
    #[diagnostic(
        code(roundabout::report_callback_error),
        help("The detection pass continues past a failing callback; see the recorded warnings")
    )]
    ReportCallback { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_manifest_parse_error_display() {
        let source_code = "{ not json }";
        let json_err = serde_json::from_str::<serde_json::Value>(source_code).unwrap_err();

        let error = ManifestParseError {
            file: "graph.json".to_string(),
            source_code: NamedSource::new("graph.json", source_code.to_string()),
            span: Some((2, 3).into()),
            source: json_err,
        };

        let error_str = error.to_string();
        assert_eq!(error_str, "Invalid JSON syntax in manifest 'graph.json'");
    }

    #[test]
    fn test_manifest_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = RoundaboutError::ManifestReadError {
            path: PathBuf::from("/tmp/missing.json"),
            source: io_err,
        };

        let error_str = error.to_string();
        assert_eq!(error_str, "Failed to read manifest '/tmp/missing.json'");
    }

    #[test]
    fn test_configuration_error() {
        let error = RoundaboutError::ConfigurationError {
            message: "Missing required field: manifest".to_string(),
        };

        let error_str = error.to_string();
        assert_eq!(
            error_str,
            "Configuration error: Missing required field: manifest"
        );
    }

    #[test]
    fn test_pattern_error() {
        let source = glob::Pattern::new("[").unwrap_err();
        let error = RoundaboutError::PatternError {
            pattern: "[".to_string(),
            source,
        };

        assert_eq!(error.to_string(), "Invalid glob pattern '['");
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let read_err = RoundaboutError::ManifestReadError {
            path: PathBuf::from("graph.json"),
            source: io_err,
        };

        assert!(read_err.code().is_some());
        assert!(read_err.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let err: RoundaboutError = io_err.into();

        match err {
            RoundaboutError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops}").unwrap_err();
        let err: RoundaboutError = json_err.into();

        match err {
            RoundaboutError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
