pub mod config;
pub mod error;
pub mod format;
pub mod panel;
pub mod session;
pub mod surface;
pub mod transport;

// Re-export key types
pub use config::Settings;
pub use error::ChatError;
pub use format::{CodeHighlighter, HighlightedCode, ResponseFormatter, TextRenderer};
pub use session::{ChatSession, SessionState};
pub use surface::{InboundMessage, OutboundMessage, PanelSurface};
pub use transport::{AnswerTransport, WorkerClient};
