//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

pub mod inventory;
pub mod schema;
pub mod serve;

/// Machine & Parts Management - inventory API backed by Neo4j
#[derive(Parser)]
#[command(name = "mpm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the inventory web API
    Serve(serve::ServeArgs),

    /// Create the graph lookup indexes
    Schema(GraphArgs),

    /// Query the inventory directly
    #[command(subcommand)]
    Inventory(inventory::InventoryCommands),
}

/// Neo4j connection settings. The first three are required.
#[derive(Args, Clone)]
pub struct GraphArgs {
    /// Neo4j bolt URI
    #[arg(long, env = "NEO4J_URI")]
    pub neo4j_uri: String,

    /// Neo4j user
    #[arg(long, env = "NEO4J_USER")]
    pub neo4j_user: String,

    /// Neo4j password
    #[arg(long, env = "NEO4J_PASSWORD", hide_env_values = true)]
    pub neo4j_password: String,

    /// Neo4j database name
    #[arg(long, env = "NEO4J_DATABASE", default_value = "neo4j")]
    pub neo4j_db: String,
}

impl GraphArgs {
    pub fn config(&self) -> mpm_graph::GraphConfig {
        mpm_graph::GraphConfig::new(&self.neo4j_uri, &self.neo4j_user, &self.neo4j_password)
            .with_database(&self.neo4j_db)
    }

    pub async fn connect(&self) -> Result<mpm_graph::GraphClient> {
        mpm_graph::GraphClient::connect(&self.config()).await
    }
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Schema(args) => schema::execute(args).await,
            Commands::Inventory(cmd) => inventory::execute(cmd).await,
        }
    }
}
