//! The display-surface contract: two opaque message shapes and the narrow
//! interface the session posts through. The surface itself (a sandboxed HTML
//! renderer) lives with the host; see [`crate::panel`] for the shipped shell.

use serde::{Deserialize, Serialize};

/// Surface -> session. Text is raw user input; the session trims and rejects
/// empty submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InboundMessage {
    Submit { text: String },
}

/// Session -> surface. One rendered entry to append to the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OutboundMessage {
    Answer { html: String },
}

/// What the session knows about its display collaborator.
pub trait PanelSurface: Send + Sync {
    fn post(&self, message: OutboundMessage);
}

impl<S: PanelSurface + ?Sized> PanelSurface for std::sync::Arc<S> {
    fn post(&self, message: OutboundMessage) {
        (**self).post(message)
    }
}
