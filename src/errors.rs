use std::io;

/// Shared error type for the explorer launcher and its configuration.
#[derive(thiserror::Error, Debug)]
pub enum GoodiesError {
    /// The file explorer binary could not be started.
    #[error("explorer unavailable: failed to launch {0}")]
    Spawn(String, #[source] io::Error),

    /// The bounded wait on a freshly launched explorer failed.
    #[error("wait on {0} was interrupted")]
    Interrupted(String, #[source] io::Error),

    /// A configuration value could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GoodiesError {
    pub fn spawn(program: impl Into<String>, error: io::Error) -> Self {
        Self::Spawn(program.into(), error)
    }

    pub fn interrupted(program: impl Into<String>, error: io::Error) -> Self {
        Self::Interrupted(program.into(), error)
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Shared result alias for the crate.
pub type Result<T> = std::result::Result<T, GoodiesError>;
