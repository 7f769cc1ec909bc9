use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum CliGptError {
    ConfigError(String),
    TransportError {
        status: Option<u16>,
        message: String,
    },
    ProtocolError(String),
    FormatError {
        path: Option<PathBuf>,
        message: String,
    },
    SessionError(String),
    Interrupted,
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    YamlError(serde_yaml::Error),
    Other(String),
}

impl CliGptError {
    /// Attach the offending log path to a format error.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            CliGptError::FormatError { message, .. } => CliGptError::FormatError {
                path: Some(path.into()),
                message,
            },
            other => other,
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        CliGptError::FormatError {
            path: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliGptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliGptError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CliGptError::TransportError {
                status: Some(status),
                message,
            } => write!(f, "API error (status {}): {}", status, message),
            CliGptError::TransportError {
                status: None,
                message,
            } => write!(f, "Network error: {}", message),
            CliGptError::ProtocolError(msg) => write!(f, "Unexpected API response: {}", msg),
            CliGptError::FormatError {
                path: Some(path),
                message,
            } => write!(f, "Cannot resume from {}: {}", path.display(), message),
            CliGptError::FormatError {
                path: None,
                message,
            } => write!(f, "Malformed log: {}", message),
            CliGptError::SessionError(msg) => write!(f, "Session error: {}", msg),
            CliGptError::Interrupted => write!(f, "Interrupted"),
            CliGptError::IoError(e) => write!(f, "IO error: {}", e),
            CliGptError::JsonError(e) => write!(f, "JSON error: {}", e),
            CliGptError::YamlError(e) => write!(f, "YAML error: {}", e),
            CliGptError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CliGptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliGptError::IoError(e) => Some(e),
            CliGptError::JsonError(e) => Some(e),
            CliGptError::YamlError(e) => Some(e),
            _ => None,
        }
    }
}

// Every reqwest failure is a transport failure: DNS, refused connections,
// broken bodies and status errors alike.
impl From<reqwest::Error> for CliGptError {
    fn from(err: reqwest::Error) -> Self {
        CliGptError::TransportError {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for CliGptError {
    fn from(err: std::io::Error) -> Self {
        CliGptError::IoError(err)
    }
}

impl From<serde_json::Error> for CliGptError {
    fn from(err: serde_json::Error) -> Self {
        CliGptError::JsonError(err)
    }
}

impl From<serde_yaml::Error> for CliGptError {
    fn from(err: serde_yaml::Error) -> Self {
        CliGptError::YamlError(err)
    }
}

impl From<anyhow::Error> for CliGptError {
    fn from(err: anyhow::Error) -> Self {
        CliGptError::ConfigError(format!("{:#}", err))
    }
}

impl From<String> for CliGptError {
    fn from(msg: String) -> Self {
        CliGptError::Other(msg)
    }
}

impl From<&str> for CliGptError {
    fn from(msg: &str) -> Self {
        CliGptError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CliGptError>;
