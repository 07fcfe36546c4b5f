use std::fmt::Display;

use miette::miette;

use crate::page::messages;

/// The URL typed by the user was refused before any retrieval started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyUrl,
    InvalidUrl,
}

impl ValidationError {
    /// The message shown in the error toast
    pub fn message(self) -> &'static str {
        match self {
            ValidationError::EmptyUrl => messages::EMPTY_URL,
            ValidationError::InvalidUrl => messages::INVALID_URL,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// The video source could not produce a result.
///
/// The details are for the logs only: the user is shown a single generic message.
#[derive(Debug)]
pub enum RetrievalError {
    /// The response body was not a valid envelope
    Decode(serde_json::Error),

    /// The backend answered with `status: false` or without a result
    Rejected,

    /// The backend itself failed
    Backend(String),

    /// The retrieval could not even be started
    Worker(String),
}

impl Display for RetrievalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RetrievalError::Decode(err) => write!(f, "Could not decode response: {err}"),
            RetrievalError::Rejected => f.write_str("Backend rejected the request"),
            RetrievalError::Backend(msg) => write!(f, "Backend failure: {msg}"),
            RetrievalError::Worker(msg) => write!(f, "Could not start retrieval: {msg}"),
        }
    }
}

impl std::error::Error for RetrievalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RetrievalError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RetrievalError {
    fn from(err: serde_json::Error) -> Self {
        RetrievalError::Decode(err)
    }
}

#[derive(Debug)]
pub enum Error {
    Validation(ValidationError),
    Retrieval(RetrievalError),
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<RetrievalError> for Error {
    fn from(err: RetrievalError) -> Self {
        Error::Retrieval(err)
    }
}

impl From<Error> for miette::Report {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(err) => miette!("Invalid URL: {err}"),
            Error::Retrieval(err) => miette!("{err}"),
        }
    }
}

impl Error {
    /// The text of the error toast for this error.
    ///
    /// Retrieval details never reach the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::Validation(err) => err.message(),
            Error::Retrieval(_) => messages::RETRIEVAL_FAILED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrieval_details_stay_out_of_the_toast() {
        let err = Error::from(RetrievalError::Backend("socket closed".to_string()));
        assert_eq!(
            err.user_message(),
            "Terjadi kesalahan saat mengambil data video"
        );

        let report = miette::Report::from(err);
        assert!(report.to_string().contains("socket closed"));
    }

    #[test]
    fn validation_messages() {
        assert_eq!(
            Error::from(ValidationError::EmptyUrl).user_message(),
            "Silakan masukkan URL TikTok"
        );
        assert_eq!(
            ValidationError::InvalidUrl.to_string(),
            "URL TikTok tidak valid"
        );
    }
}
