//! Effect descriptions returned by reducers.
//!
//! Effects are values, not execution. The HTTP shell interprets them after
//! the reducer has updated state: it stores flashes in the session, answers
//! with a redirect, re-renders a rejected form, or responds 404.

use serde::{Deserialize, Serialize};

/// Severity of a flash message, used as its CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    /// The requested change was applied
    Success,
    /// The request was rejected
    Error,
    /// Neutral information
    Info,
}

impl FlashKind {
    /// Returns the lowercase name of the kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// A one-shot message shown on the next rendered page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    /// Severity
    pub kind: FlashKind,
    /// Text shown to the user
    pub message: String,
}

impl Flash {
    /// Creates a success flash
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    /// Creates an error flash
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    /// Creates an info flash
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Info,
            message: message.into(),
        }
    }
}

/// Effect type - describes what the shell should do once state is updated
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Queue a flash message for the next page
    Flash(Flash),

    /// Send the client to another page
    Redirect(String),

    /// Input failed validation; show the form again with what was entered
    Rejected {
        /// Title as submitted, after trimming
        title: String,
    },

    /// The addressed list or todo does not exist
    NotFound {
        /// Kind of entity
        resource: &'static str,
        /// Id that was addressed
        id: u64,
    },
}
