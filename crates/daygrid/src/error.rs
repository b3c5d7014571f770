//! Error types for daygrid operations.
//!
//! This module provides the main error type [`DaygridError`] which wraps
//! the error conditions that can occur while reading schedules, moving
//! entries and exporting layouts. The layout engine itself never fails.

use std::{fmt, io, ops::Range};

use thiserror::Error;

/// The main error type for daygrid operations.
///
/// # Diagnostic Variants
///
/// The `Input` variant carries the offending source text alongside an
/// [`InputError`] that may point at a byte range in it, so callers can
/// render a labelled snippet.
#[derive(Debug, Error)]
pub enum DaygridError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Input { err: InputError, src: String },

    #[error("Reschedule error: {0}")]
    Reschedule(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<toml::ser::Error> for DaygridError {
    fn from(error: toml::ser::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl DaygridError {
    /// Create a new `Input` error with the associated source text.
    pub fn new_input_error(err: InputError, src: impl Into<String>) -> Self {
        Self::Input {
            err,
            src: src.into(),
        }
    }
}

/// A problem found in schedule input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    message: String,
    span: Option<Range<usize>>,
    help: Option<String>,
}

impl InputError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: None,
            help: None,
        }
    }

    /// Attach the byte range of the offending input.
    pub fn with_span(mut self, span: Range<usize>) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> Option<Range<usize>> {
        self.span.clone()
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid schedule: {}", self.message)
    }
}

impl std::error::Error for InputError {}

impl From<toml::de::Error> for InputError {
    fn from(error: toml::de::Error) -> Self {
        let err = Self::new(error.message().trim());
        match error.span() {
            Some(span) => err.with_span(span),
            None => err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_display() {
        let err = InputError::new("duplicate entry id `svc-1`").with_span(10..17);
        assert_eq!(err.to_string(), "invalid schedule: duplicate entry id `svc-1`");
        assert_eq!(err.span(), Some(10..17));
        assert_eq!(err.help(), None);
    }

    #[test]
    fn test_input_error_from_toml_keeps_span() {
        let toml_err = toml::from_str::<toml::Table>("[[entry]\n").unwrap_err();
        let err = InputError::from(toml_err);
        assert!(err.span().is_some());
        assert!(!err.message().is_empty());
    }

    #[test]
    fn test_daygrid_error_wraps_input() {
        let err = DaygridError::new_input_error(InputError::new("bad"), "source");
        assert_eq!(err.to_string(), "invalid schedule: bad");
        match err {
            DaygridError::Input { src, .. } => assert_eq!(src, "source"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
