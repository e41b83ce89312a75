use crate::api::error::ApiError;
use crate::forms::Form;
use crate::sync::{RefreshToken, Snapshot};
use crossterm::event::Event as CrosstermEvent;

/// A write the user asked the backend to perform.
///
/// Creations carry the draft they were built from. The form itself is
/// cleared at submit time, so the draft can be put back if the write fails.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    CreatePost { draft: Form },
    CreateEvent { draft: Form },
    MarkRead { id: String },
}

impl Mutation {
    pub fn describe(&self) -> String {
        match self {
            Mutation::CreatePost { .. } => "Publishing post".to_string(),
            Mutation::CreateEvent { .. } => "Creating event".to_string(),
            Mutation::MarkRead { id } => format!("Marking notification {} read", id),
        }
    }
}

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A full refresh finished, successfully or not
    SnapshotLoaded {
        token: RefreshToken,
        result: Result<Snapshot, ApiError>,
    },

    /// A create/mark-read request finished
    MutationFinished {
        mutation: Mutation,
        result: Result<(), ApiError>,
    },

    /// Tick for spinner and status expiry
    Tick,
}
