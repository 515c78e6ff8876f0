//! Submission error taxonomy
//!
//! Every variant's `Display` is exactly the text shown to the user, so the
//! component boundary can turn any error into a status message with
//! `to_string()`.

/// Errors that can end a form submission attempt
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    /// Client-side validation refused the form before a request was built
    #[error("{0}")]
    Validation(String),

    /// The backend answered with a non-success status
    #[error("{0}")]
    Rejected(String),

    /// The request could not be built or the network call failed
    #[error("{0}")]
    Transport(String),

    /// The response body was not the JSON we expected
    #[error("{0}")]
    Decode(String),
}

impl SubmitError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_user_message() {
        assert_eq!(
            SubmitError::Rejected("Invalid credentials".to_string()).to_string(),
            "Invalid credentials"
        );
        assert_eq!(
            SubmitError::transport("Failed to fetch").to_string(),
            "Failed to fetch"
        );
    }

    #[test]
    fn test_decode_from_serde_error() {
        let err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let submit = SubmitError::decode(&err);

        assert!(matches!(submit, SubmitError::Decode(_)));
        assert_eq!(submit.to_string(), err.to_string());
    }
}
