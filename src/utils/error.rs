use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("API key has invalid format: must be at least {min_length} characters")]
    KeyFormatError { min_length: usize },

    #[error("API key rejected by the service: {reason}")]
    KeyRejectedError { reason: String },

    #[error("no API key configured")]
    NotConfiguredError,

    #[error("prompt too short: minimum {min_length} characters")]
    InputTooShortError { min_length: usize },

    #[error("request exceeded the {limit_ms} ms deadline")]
    TimeoutError { limit_ms: u64 },

    #[error("service returned HTTP {status}: {message}")]
    RemoteError { status: u16, message: String },

    #[error("unexpected response shape from the service")]
    MalformedResponseError,

    #[error("invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, EnhanceError>;
