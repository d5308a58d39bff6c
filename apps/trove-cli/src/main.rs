//! trove: personal link curation from the command line.
//!
//! Appends bookmark records to a flat JSONL store, optionally enriching them
//! (page title, web-archive snapshot) and committing the change to git.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "trove", version, about = "Append, enrich, and reconcile bookmark records")]
struct Cli {
    /// Store file (overrides the configured path)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Add a single link
    Add {
        /// URL to add
        url: String,
        /// Tags for the link
        tags: Vec<String>,
        /// Title (skips the page-title fetch)
        #[arg(short, long)]
        title: Option<String>,
        /// Notes about the link
        #[arg(long)]
        notes: Option<String>,
        /// Skip the web-archive snapshot request
        #[arg(long)]
        no_archive: bool,
        /// Skip the git commit
        #[arg(long)]
        no_commit: bool,
    },
    /// Import links from markdown files in a directory
    Import {
        /// Directory of .md files (headers become tags)
        dir: PathBuf,
        /// Skip the git commit
        #[arg(long)]
        no_commit: bool,
    },
    /// Drain the open submission queue into the store
    ProcessSubmissions {
        /// Fill in missing titles for existing records instead
        #[arg(long)]
        fill_titles: bool,
        /// Skip the git commit
        #[arg(long)]
        no_commit: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let store = trove_core::Trove::new(
        cli.store.unwrap_or_else(|| config.store_path.clone()),
    );

    match cli.command {
        CliCommand::Add {
            url,
            tags,
            title,
            notes,
            no_archive,
            no_commit,
        } => {
            commands::add::run(
                &store,
                &config,
                commands::add::AddRequest {
                    url,
                    tags,
                    title,
                    notes,
                    archive: !no_archive,
                    commit: !no_commit,
                },
            )
            .await?
        }
        CliCommand::Import { dir, no_commit } => {
            commands::import::run(&store, &dir, !no_commit)?
        }
        CliCommand::ProcessSubmissions {
            fill_titles,
            no_commit,
        } => {
            if fill_titles {
                commands::submissions::fill_titles(&store, &config).await?
            } else {
                commands::submissions::run(&store, &config, !no_commit).await?
            }
        }
    }

    Ok(())
}
