use thiserror::Error;

/// Error type for friendgraph operations.
#[derive(Debug, Error)]
pub enum FriendGraphError {
    #[error("format error: {0}")]
    FormatError(String),
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("io error: {0}")]
    IoError(String),
}

impl FriendGraphError {
    pub fn format<T: Into<String>>(msg: T) -> Self {
        FriendGraphError::FormatError(msg.into())
    }

    pub fn invalid_endpoint<T: Into<String>>(msg: T) -> Self {
        FriendGraphError::InvalidEndpoint(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        FriendGraphError::IoError(msg.into())
    }
}
