use std::fmt;

#[derive(Debug)]
pub enum GridError {
    ConfigError(String),
    ClientError(String),
    RequestError(String),
    ResponseError(String),
    SerializationError(String),
    BackendError(String),
    UnknownStyle(String),
    InsufficientImages(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GridError::ClientError(msg) => write!(f, "Client error: {}", msg),
            GridError::RequestError(msg) => write!(f, "Request error: {}", msg),
            GridError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            GridError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            GridError::BackendError(msg) => write!(f, "Backend error: {}", msg),
            GridError::UnknownStyle(msg) => write!(f, "Unknown style: {}", msg),
            GridError::InsufficientImages(msg) => write!(f, "Insufficient images: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

pub type Result<T> = std::result::Result<T, GridError>;
