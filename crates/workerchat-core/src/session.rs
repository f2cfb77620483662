//! The chat session controller: one outstanding exchange at a time, result
//! delivered to the display surface as a rendered entry.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::format::{escape_html, ResponseFormatter};
use crate::surface::{InboundMessage, OutboundMessage, PanelSurface};
use crate::transport::AnswerTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingResponse,
}

/// Per-panel session. Sessions are independent; two open panels share
/// nothing.
pub struct ChatSession<T: AnswerTransport, S: PanelSurface> {
    transport: T,
    surface: S,
    formatter: ResponseFormatter,
    // The pending flag IS the state machine: set with a compare-exchange
    // before the first await, cleared after the completion entry is posted,
    // so a second submission can never race in.
    busy: AtomicBool,
}

impl<T: AnswerTransport, S: PanelSurface> ChatSession<T, S> {
    pub fn new(transport: T, surface: S) -> Self {
        Self::with_formatter(transport, surface, ResponseFormatter::new())
    }

    pub fn with_formatter(transport: T, surface: S, formatter: ResponseFormatter) -> Self {
        Self {
            transport,
            surface,
            formatter,
            busy: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> SessionState {
        if self.busy.load(Ordering::SeqCst) {
            SessionState::AwaitingResponse
        } else {
            SessionState::Idle
        }
    }

    pub async fn handle_message(&self, message: InboundMessage) {
        match message {
            InboundMessage::Submit { text } => self.submit(&text).await,
        }
    }

    /// Run one exchange. Empty or whitespace-only text, and calls made while
    /// an exchange is already in flight, are ignored without creating an
    /// exchange — a caller-contract violation, not a fault.
    pub async fn submit(&self, text: &str) {
        let query = text.trim();
        if query.is_empty() {
            debug!("ignoring empty submission");
            return;
        }
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("ignoring submission while a request is in flight");
            return;
        }

        let html = match self.transport.fetch_answer(query).await {
            Ok(answer) => self.formatter.format(&answer),
            Err(err) => {
                warn!(error = %err, "inference request failed");
                error_entry(&err.to_string())
            }
        };
        self.surface.post(OutboundMessage::Answer { html });
        self.busy.store(false, Ordering::SeqCst);
    }
}

/// Inline error entry shown in place of the answer. Not routed through the
/// formatter; the message text is escaped here.
fn error_entry(message: &str) -> String {
    format!(
        "<p class=\"chat-error\">Error: {}</p>\n",
        escape_html(message)
    )
}
