//! Error handling for feedlab.
//!
//! Demo input failures are reported as a [`FeedlabError`] tagged with an
//! [`ErrorCategory`]. The category picks the status code of the reply:
//! validation and parse failures are the caller's fault, anything else is
//! ours. Store and CLI failures stay `anyhow` chains.

use std::fmt;

/// Error category for feedlab errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Validation,
    Parse,
    Unknown,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Validation => write!(f, "validation"),
            ErrorCategory::Parse => write!(f, "parse"),
            ErrorCategory::Unknown => write!(f, "unknown"),
        }
    }
}

impl ErrorCategory {
    /// HTTP-style status code used when an error is reported as a payload.
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorCategory::Validation | ErrorCategory::Parse => 400,
            ErrorCategory::Unknown => 500,
        }
    }
}

/// Feedlab error with category and context
#[derive(Debug)]
pub struct FeedlabError {
    message: String,
    category: ErrorCategory,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
    context: Vec<(String, String)>,
}

impl FeedlabError {
    pub fn new(message: impl Into<String>, category: ErrorCategory) -> Self {
        Self {
            message: message.into(),
            category,
            source: None,
            context: Vec::new(),
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        category: ErrorCategory,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self {
            message: message.into(),
            category,
            source: Some(source),
            context: Vec::new(),
        }
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    pub fn is_validation_error(&self) -> bool {
        self.category == ErrorCategory::Validation
    }

    pub fn status_code(&self) -> u16 {
        self.category.status_code()
    }
}

impl fmt::Display for FeedlabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)?;

        if !self.context.is_empty() {
            write!(f, " (")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}={}", key, value)?;
            }
            write!(f, ")")?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {}", source)?;
        }

        Ok(())
    }
}

impl std::error::Error for FeedlabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as _)
    }
}

/// Convenience function to create validation errors
pub fn validation_error(message: impl Into<String>) -> FeedlabError {
    FeedlabError::new(message, ErrorCategory::Validation)
}

/// Convenience function to create parse errors
pub fn parse_error(message: impl Into<String>) -> FeedlabError {
    FeedlabError::new(message, ErrorCategory::Parse)
}
