//! Errors for message decoding and dispatch

use crate::actions::ActionName;

/// Errors raised outside the constructors, which never fail.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// The tag literal does not name any known action.
    #[error("unknown action type: {0:?}")]
    UnknownAction(String),

    /// The form data does not match the payload type of the action.
    #[error("invalid form data for {action}: {source}")]
    InvalidPayload {
        action: ActionName,
        #[source]
        source: serde_json::Error,
    },

    /// The message JSON could not be decoded.
    #[error("malformed action message: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode action message: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ActionError>;
