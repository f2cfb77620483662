use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "workerchat")]
#[command(about = "Workerchat - editor-panel AI chat client")]
#[command(version)]
struct Cli {
    /// Inference endpoint base URL (overrides config)
    #[arg(long)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask a single question and print the answer
    Ask {
        question: String,

        /// Print the formatted HTML fragment instead of the raw answer
        #[arg(long)]
        html: bool,
    },
    /// Format a raw answer (from a file, or stdin with no argument) to HTML
    Render {
        file: Option<std::path::PathBuf>,
    },
    /// Emit the panel shell document for host embedding
    Panel {
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut settings = workerchat_core::Settings::load();
    if let Some(endpoint) = cli.endpoint {
        settings.endpoint.base_url = endpoint;
    }

    match cli.command {
        Command::Ask { question, html } => commands::ask(&settings, &question, html).await,
        Command::Render { file } => commands::render(&settings, file.as_deref()),
        Command::Panel { out } => commands::panel(out.as_deref()),
    }
}
