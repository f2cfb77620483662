use std::io::Read;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{bail, Context, Result};
use tracing::info;

use workerchat_core::panel::shell_html;
use workerchat_core::{
    AnswerTransport, ChatSession, OutboundMessage, PanelSurface, ResponseFormatter, Settings,
    WorkerClient,
};

/// Surface double for one-shot use: collects rendered entries so they can be
/// printed once the exchange completes.
#[derive(Clone, Default)]
struct CollectingSurface {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CollectingSurface {
    fn into_entries(self) -> Vec<String> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(_) => Vec::new(),
        }
    }
}

impl PanelSurface for CollectingSurface {
    fn post(&self, message: OutboundMessage) {
        let OutboundMessage::Answer { html } = message;
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(html);
        }
    }
}

/// One-shot question: raw answer text by default, the formatted fragment
/// with `--html` (driven through a real session).
pub async fn ask(settings: &Settings, question: &str, html: bool) -> Result<()> {
    let question = question.trim();
    if question.is_empty() {
        bail!("question is empty");
    }

    let client = WorkerClient::from_settings(settings)?;
    info!(endpoint = client.base_url(), "asking worker");

    if html {
        let surface = CollectingSurface::default();
        let session = ChatSession::with_formatter(
            client,
            surface.clone(),
            ResponseFormatter::from_settings(settings),
        );
        session.submit(question).await;
        for entry in surface.into_entries() {
            println!("{entry}");
        }
    } else {
        let answer = client.fetch_answer(question).await?;
        println!("{answer}");
    }
    Ok(())
}

/// Format a raw answer from a file (or stdin) to an HTML fragment.
pub fn render(settings: &Settings, file: Option<&Path>) -> Result<()> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            buffer
        }
    };
    println!("{}", ResponseFormatter::from_settings(settings).format(&raw));
    Ok(())
}

/// Emit the panel shell document.
pub fn panel(out: Option<&Path>) -> Result<()> {
    let html = shell_html();
    match out {
        Some(path) => std::fs::write(path, html)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{html}"),
    }
    Ok(())
}
