//! CLI entry point for postboard

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use postboard::commands::post::PostInput;

#[derive(Parser)]
#[command(name = "postboard")]
#[command(author = "Yukang Chen")]
#[command(version)]
#[command(about = "A minimal blog front end: compose posts and browse the feed", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default postboard.yml
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Show all posts from the store
    #[command(alias = "ls")]
    Feed,

    /// Compose and submit a new post
    Post {
        /// Post title
        #[arg(short, long)]
        title: String,

        /// Author name
        #[arg(short, long)]
        author: String,

        /// Post body (HTML, or Markdown with --markdown)
        #[arg(short, long)]
        body: Option<String>,

        /// Read the body from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Convert a Markdown body to HTML
        #[arg(short, long)]
        markdown: bool,
    },

    /// Serve the board page and the post store API
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to
        #[arg(short, long)]
        ip: Option<String>,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postboard=debug,info"
    } else {
        "postboard=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing board in {:?}", target_dir);
            postboard::commands::init::init_board(&target_dir)?;
            println!("Initialized postboard in {:?}", target_dir);
        }

        Commands::Feed => {
            let board = postboard::Postboard::new(&base_dir)?;
            postboard::commands::feed::run(&board).await?;
        }

        Commands::Post {
            title,
            author,
            body,
            file,
            markdown,
        } => {
            let board = postboard::Postboard::new(&base_dir)?;
            let input = PostInput {
                title,
                author,
                body,
                file,
                markdown,
            };
            postboard::commands::post::run(&board, &input).await?;
        }

        Commands::Serve { port, ip, open } => {
            let board = postboard::Postboard::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| board.config.server.ip.clone());
            let port = port.unwrap_or(board.config.server.port);
            let store = board.server_store()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            postboard::server::start(&board, store, &ip, port, open).await?;
        }

        Commands::Version => {
            println!("postboard version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
