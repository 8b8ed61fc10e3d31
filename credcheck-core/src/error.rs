//! Error types for credcheck

use thiserror::Error;

/// Main error type for credential store operations
#[derive(Error, Debug)]
pub enum CredCheckError {
    /// Credentials file is not valid TOML or has the wrong shape
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Credentials file parsed but describes an unusable store
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for credcheck operations
pub type Result<T> = std::result::Result<T, CredCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = CredCheckError::ConfigError("no credentials defined".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: no credentials defined"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
        let err: CredCheckError = io_err.into();
        assert!(matches!(err, CredCheckError::IoError(_)));
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_parse_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("credentials = [").unwrap_err();
        let err: CredCheckError = toml_err.into();
        assert!(matches!(err, CredCheckError::ParseError(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }
}
