/// Convenience result type used across quizdash.
pub type QuizdashResult<T> = Result<T, QuizdashError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum QuizdashError {
    /// Invalid user-provided configuration data.
    #[error("config error: {0}")]
    Config(String),

    /// Malformed query-style external parameters.
    #[error("params error: {0}")]
    Params(String),

    /// Errors while ticking a running session.
    #[error("session error: {0}")]
    Session(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QuizdashError {
    /// Build a [`QuizdashError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`QuizdashError::Params`] value.
    pub fn params(msg: impl Into<String>) -> Self {
        Self::Params(msg.into())
    }

    /// Build a [`QuizdashError::Session`] value.
    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session(msg.into())
    }

    /// Build a [`QuizdashError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
