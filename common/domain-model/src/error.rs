use thiserror::Error;

pub const STATUS_ERROR: &str = "error";
pub const STATUS_TIMEOUT: &str = "timeout";
pub const STATUS_PARSER_ERROR: &str = "parsererror";

/// Failure of one request/response cycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network failure or non-2xx status.
    #[error("{status}, {error}")]
    Transport { status: String, error: String },
    /// The body arrived but does not have the expected shape.
    #[error("{status}, {error}")]
    ResponseShape { status: String, error: String },
}

impl FetchError {
    pub fn transport(status: &str, error: impl ToString) -> Self {
        FetchError::Transport {
            status: status.to_string(),
            error: error.to_string(),
        }
    }

    pub fn response_shape(error: impl ToString) -> Self {
        FetchError::ResponseShape {
            status: STATUS_PARSER_ERROR.to_string(),
            error: error.to_string(),
        }
    }

    pub fn status(&self) -> &str {
        match self {
            FetchError::Transport { status, .. } | FetchError::ResponseShape { status, .. } => status,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport { .. })
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(value: serde_json::Error) -> Self {
        FetchError::response_shape(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_joins_status_and_error() {
        let error = FetchError::transport(STATUS_ERROR, "Not Found");
        assert_eq!(error.to_string(), "error, Not Found");
        assert!(error.is_transport());

        let error = FetchError::response_shape("expected value at line 1 column 1");
        assert_eq!(error.status(), STATUS_PARSER_ERROR);
        assert_eq!(error.to_string(), "parsererror, expected value at line 1 column 1");
        assert!(!error.is_transport());
    }
}
