//! Quiz error types.
//!
//! Every failure in the domain model is raised synchronously at the point of
//! violation and propagated to the caller unchanged.

use thiserror::Error;

/// Errors raised while building or evaluating a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A required value was absent.
    #[error("missing argument `{name}`: {message}")]
    NullArgument { name: &'static str, message: String },

    /// A value was present but violated a precondition.
    #[error("invalid argument `{name}`: {message}")]
    InvalidArgument { name: &'static str, message: String },
}

impl QuizError {
    pub(crate) fn null_argument(name: &'static str, message: impl Into<String>) -> Self {
        QuizError::NullArgument {
            name,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        QuizError::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    /// Name of the offending argument.
    pub fn argument(&self) -> &'static str {
        match self {
            QuizError::NullArgument { name, .. } | QuizError::InvalidArgument { name, .. } => *name,
        }
    }

    /// Returns `true` for [`QuizError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, QuizError::InvalidArgument { .. })
    }

    /// Returns `true` for [`QuizError::NullArgument`].
    pub fn is_null_argument(&self) -> bool {
        matches!(self, QuizError::NullArgument { .. })
    }
}
