use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The call never produced a usable response (network, timeout, platform
    /// fault).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server handled the call and rejected it (validation, field-level
    /// security, duplicate rules).
    #[error("rejected by server: {0}")]
    Rejected(String),

    /// The referenced record no longer exists.
    #[error("record not found")]
    NotFound,

    /// The serialized page document could not be decoded.
    #[error("document decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type GatewayResult<T> = Result<T, GatewayError>;
