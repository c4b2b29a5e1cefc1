use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "scene-viewer")]
#[command(about = "Scene viewer - drive the scene page against a live API", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Act as this signed-in user (email); anonymous when omitted
    #[arg(long = "as", global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a scene page and print what it renders
    Open {
        /// Encrypted scene identifier
        scene: String,
        /// Query string of the page URL (e.g. "sentBubble=true")
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Change the scene's theme (owner only)
    SetTheme {
        scene: String,
        /// Preset name (e.g. sunset, forest)
        preset: String,
    },
    /// Long-press and confirm deletion of a message
    DeleteMessage { scene: String, message_id: u64 },
    /// Run the primary action (share for owners, compose for guests)
    Primary { scene: String },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let page = commands::PageSetup::new(cli.config.as_deref(), cli.user)?;

    match cli.command {
        Commands::Open { scene, query } => commands::open(&page, &scene, &query).await?,
        Commands::SetTheme { scene, preset } => commands::set_theme(&page, &scene, &preset).await?,
        Commands::DeleteMessage { scene, message_id } => {
            commands::delete_message(&page, &scene, message_id).await?
        }
        Commands::Primary { scene } => commands::primary(&page, &scene).await?,
    }

    Ok(())
}
