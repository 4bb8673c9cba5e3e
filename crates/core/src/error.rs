#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// One or more submission checks failed. Messages are in report order.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Messages to show the client, or `None` for errors whose detail must
    /// stay server-side.
    pub fn user_messages(&self) -> Option<Vec<String>> {
        match self {
            CoreError::Validation(msgs) => Some(msgs.clone()),
            CoreError::Conflict(msg) | CoreError::NotFound(msg) => Some(vec![msg.clone()]),
            CoreError::Internal(_) => None,
        }
    }
}
