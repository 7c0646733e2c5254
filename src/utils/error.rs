use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Common result type for docpress operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for docpress operations
#[derive(Debug)]
pub enum PublishError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// The page template does not exist
    TemplateNotFound(PathBuf),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishError::Io(err) => write!(f, "IO error: {}", err),
            PublishError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PublishError::TemplateNotFound(path) => write!(f, "Template not found: {}", path.display()),
            PublishError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for PublishError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PublishError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PublishError {
    fn from(err: io::Error) -> Self {
        PublishError::Io(err)
    }
}

impl From<String> for PublishError {
    fn from(msg: String) -> Self {
        PublishError::Generic(msg)
    }
}

impl From<&str> for PublishError {
    fn from(msg: &str) -> Self {
        PublishError::Generic(msg.to_string())
    }
}
