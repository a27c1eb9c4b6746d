//! Error types for vb-console

use thiserror::Error;

/// Main error type for console operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} is not a valid option")]
    InvalidOption(String),

    #[error("invalid value {value:?} for option {option}")]
    InvalidValue { option: String, value: String },

    #[error("unknown color: {0}")]
    UnknownColor(String),

    #[error("Reflection error: {0}")]
    Reflection(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid option error
    pub fn invalid_option(name: impl Into<String>) -> Self {
        Error::InvalidOption(name.into())
    }

    /// Create an invalid value error
    pub fn invalid_value(option: impl Into<String>, value: impl Into<String>) -> Self {
        Error::InvalidValue {
            option: option.into(),
            value: value.into(),
        }
    }

    /// Create a reflection error
    pub fn reflection(msg: impl Into<String>) -> Self {
        Error::Reflection(msg.into())
    }

    /// Create a render error
    pub fn render(msg: impl Into<String>) -> Self {
        Error::Render(msg.into())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Error::Render(msg.to_string())
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Reflection(err.to_string())
    }
}
