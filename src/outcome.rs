// Assertion outcome structures

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Message used when a failure is built from an empty description.
pub const DEFAULT_FAILURE_MESSAGE: &str = "assertion failed";

/// Outcome kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeKind {
    Succeeded,
    Failed,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pass/fail record returned by every assertion.
///
/// The message is empty exactly when the kind is [`OutcomeKind::Succeeded`].
/// On the wire the message is carried in the `error` field:
/// `{"kind": "Failed", "error": "x must hold"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawOutcome")]
pub struct AssertionOutcome {
    kind: OutcomeKind,
    #[serde(rename = "error")]
    message: String,
}

impl AssertionOutcome {
    /// Create a success outcome
    pub fn succeeded() -> Self {
        Self {
            kind: OutcomeKind::Succeeded,
            message: String::new(),
        }
    }

    /// Create a failure outcome.
    ///
    /// An empty message becomes [`DEFAULT_FAILURE_MESSAGE`] so that a failure
    /// never carries an empty message. As a result `assert_true(false, "")`
    /// does not echo its message back, and the record is not
    /// `{kind: "Failed", error: ""}`.
    pub fn failed(message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message.push_str(DEFAULT_FAILURE_MESSAGE);
        }
        Self {
            kind: OutcomeKind::Failed,
            message,
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_succeeded(&self) -> bool {
        self.kind == OutcomeKind::Succeeded
    }

    pub fn is_failed(&self) -> bool {
        self.kind == OutcomeKind::Failed
    }

    /// Convert into a `Result` so callers can propagate failures with `?`.
    pub fn into_result(self) -> Result<(), FailedAssertion> {
        match self.kind {
            OutcomeKind::Succeeded => Ok(()),
            OutcomeKind::Failed => Err(FailedAssertion {
                message: self.message,
            }),
        }
    }
}

impl fmt::Display for AssertionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            OutcomeKind::Succeeded => write!(f, "{}", self.kind),
            OutcomeKind::Failed => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

/// A failed outcome converted into an error value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FailedAssertion {
    pub message: String,
}

/// Rejected serialized outcome
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    #[error("failed outcome must carry a non-empty error message")]
    MissingMessage,
    #[error("succeeded outcome must not carry an error message, got '{0}'")]
    UnexpectedMessage(String),
}

#[derive(Deserialize)]
struct RawOutcome {
    kind: OutcomeKind,
    #[serde(default)]
    error: String,
}

impl TryFrom<RawOutcome> for AssertionOutcome {
    type Error = OutcomeError;

    fn try_from(raw: RawOutcome) -> Result<Self, Self::Error> {
        match raw.kind {
            OutcomeKind::Succeeded if raw.error.is_empty() => Ok(Self::succeeded()),
            OutcomeKind::Succeeded => Err(OutcomeError::UnexpectedMessage(raw.error)),
            OutcomeKind::Failed if raw.error.is_empty() => Err(OutcomeError::MissingMessage),
            OutcomeKind::Failed => Ok(Self {
                kind: OutcomeKind::Failed,
                message: raw.error,
            }),
        }
    }
}
