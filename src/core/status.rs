//! Submission status shown above a form

use super::error::SubmitError;

/// Outcome of the last submission attempt.
///
/// A single tagged value, so "success and error at once" cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Message text, `None` when there is nothing to render.
    ///
    /// An empty message renders nothing as well.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Success(text) | Self::Error(text) => (!text.is_empty()).then_some(text.as_str()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Build the initial status from errors handed over by the server.
    ///
    /// Empty texts are skipped; the last remaining one wins.
    pub fn from_errors<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        errors
            .into_iter()
            .map(Into::<String>::into)
            .filter(|text| !text.is_empty())
            .last()
            .map(Self::Error)
            .unwrap_or_default()
    }
}

impl From<SubmitError> for SubmissionStatus {
    fn from(err: SubmitError) -> Self {
        Self::Error(err.to_string())
    }
}
