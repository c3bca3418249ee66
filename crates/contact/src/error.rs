#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("{0}")]
    Delivery(#[from] DeliveryError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::MalformedRequest(value.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(value: validator::ValidationErrors) -> Self {
        Self::MalformedRequest(value.to_string())
    }
}

/// Failure reported by a delivery collaborator.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("invalid address `{0}`")]
    Address(String),

    #[error("provider rejected message with status {status}: {reason}")]
    Rejected { status: u16, reason: String },

    #[error("{0} is not supported by this transport")]
    Unsupported(&'static str),

    #[error("{0}")]
    Transport(#[from] anyhow::Error),
}
