use derive_more::Display;

/// Failures surfaced to the user by the form controllers.
///
/// "Employee not found" is not an error: lookups return `Ok(None)`.
/// Scheduling conflicts are not errors either, they come back as a
/// [`SubmitReply::Conflict`](crate::model::booking::SubmitReply).
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Rejected before any request was sent.
    #[display(fmt = "{}", _0)]
    Validation(String),
    /// The request never produced a response (connection refused, reset, ...).
    #[display(fmt = "{}", _0)]
    Transport(String),
    /// A response arrived but its body was not the JSON we expected.
    #[display(fmt = "{}", _0)]
    Parse(String),
}

impl std::error::Error for ClientError {}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        ClientError::Validation(message.into())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Parse(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Parse(e.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
