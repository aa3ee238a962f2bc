//! CLI commands

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::api::{Backend, HttpBackend};
use crate::config::Config;
use crate::core::AppState;
use crate::ui;

#[derive(Parser)]
#[command(name = "dbpilot")]
#[command(about = "Terminal client for a natural-language SQL assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend server URL (default: from config, then http://localhost:8000)
    #[arg(long)]
    server: Option<String>,

    /// Database connection URI (e.g. sqlite:///demo/Chinook.db)
    #[arg(long)]
    database: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session
    Shell,

    /// Send a single chat message
    Ask {
        /// The question to ask about the database
        message: String,

        /// Approve and execute a proposed query without asking
        #[arg(long)]
        yes: bool,
    },

    /// Execute a SQL statement and print the result table
    Query {
        /// The statement to run
        sql: String,
    },

    /// Print the schema and dialect reported by the backend
    Schema,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(None)?;

    let server_url = cli.server.unwrap_or_else(|| config.server_url.clone());
    let database_uri = cli.database.or_else(|| config.database_uri.clone());

    let backend: Arc<dyn Backend> = Arc::new(HttpBackend::new(server_url));
    let mut state = AppState::new(backend);

    // Create a multi-threaded runtime for CLI operations
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    rt.block_on(async {
        match cli.command {
            Commands::Shell => super::shell::run(&mut state, database_uri).await,

            Commands::Ask { message, yes } => {
                connect(&mut state, database_uri.as_deref()).await?;

                state.send_message(&message).await?;
                if let Some(reply) = state.conversation.history().last() {
                    println!("{}", ui::render_message(reply));
                }

                if let Some(index) = state.conversation.latest_pending() {
                    if yes {
                        state.approve(index).await?;
                        println!("{}", ui::render_table(state.query.rows()));
                    } else {
                        println!("re-run with --yes to approve and execute");
                    }
                }
                Ok(())
            }

            Commands::Query { sql } => {
                connect(&mut state, database_uri.as_deref()).await?;

                state.run_query(&sql).await?;
                println!("{}", ui::render_table(state.query.rows()));
                Ok(())
            }

            Commands::Schema => {
                connect(&mut state, database_uri.as_deref()).await?;

                println!(
                    "{}",
                    ui::render_schema(state.connection.schema(), state.connection.dialect())
                );
                Ok(())
            }
        }
    })
}

async fn connect(state: &mut AppState, database_uri: Option<&str>) -> Result<()> {
    let uri = database_uri
        .context("no database URI; pass --database or set database_uri in the config")?;
    let info = state.connect(uri).await?;
    tracing::info!("{}", info.message);
    Ok(())
}
