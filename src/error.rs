use thiserror::Error;

/// Text shown in place of a UI tree when a generation ends in error.
pub const USER_ERROR_MESSAGE: &str = "Sorry, I encountered an error generating the UI.";

/// Terminal failures of one generation. Transient parse failures never reach this type;
/// they are absorbed as `ParseOutcome::Incomplete`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The stream ended, the buffer is still unparseable after repair and no value was ever shown.
    #[error("model output is not valid JSON after repair ({len} bytes received)")]
    Malformed { len: usize },

    /// The token source failed. No further parse attempts are made for the message.
    #[error("token source failed: {0}")]
    Transport(String),
}

impl GenerationError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        GenerationError::Transport(err.to_string())
    }

    /// Substitute text for the user-visible layer.
    pub fn user_message(&self) -> &'static str {
        USER_ERROR_MESSAGE
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, GenerationError::Transport(_))
    }
}
