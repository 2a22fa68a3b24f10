//! Error types for building descriptors and units.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for jgencode operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("malformed type '{raw}': {reason}")]
    #[diagnostic(
        code(jgencode::malformed_type),
        help("generic types look like `Map<String, List<com.acme.Widget>>`")
    )]
    MalformedType { raw: String, reason: String },

    #[error("{what} name must not be blank")]
    #[diagnostic(code(jgencode::blank_name))]
    BlankName { what: &'static str },

    #[error("{descriptor} is missing its {field}")]
    #[diagnostic(
        code(jgencode::missing_state),
        help("set the {field} on the builder before calling build()")
    )]
    MissingState {
        descriptor: &'static str,
        field: &'static str,
    },

    #[error("invalid render configuration")]
    #[diagnostic(code(jgencode::config))]
    Config {
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(jgencode::io))]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn malformed(raw: &str, reason: impl Into<String>) -> Self {
        Self::MalformedType {
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn missing(descriptor: &'static str, field: &'static str) -> Self {
        Self::MissingState { descriptor, field }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::malformed("List<", "unclosed '<'").to_string(),
            "malformed type 'List<': unclosed '<'"
        );
        assert_eq!(
            Error::missing("field", "type").to_string(),
            "field is missing its type"
        );
        assert_eq!(
            Error::BlankName { what: "class" }.to_string(),
            "class name must not be blank"
        );
    }
}
