/// Message shown when the backend rejects a request without a usable `detail`.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to convert equation";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("Network error: {0}")]
    Transport(String),
    #[error("{message}")]
    Backend { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    MalformedResponse(String),
    #[error("Failed to read image: {0}")]
    FileRead(String),
}

