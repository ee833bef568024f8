//! Neo4j connection client.

use anyhow::{Context, Result};
use neo4rs::{ConfigBuilder, Graph, Query};
use serde::Deserialize;
use tracing::{debug, info};

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_database() -> String {
    "neo4j".to_string()
}

impl GraphConfig {
    pub fn new(uri: impl Into<String>, user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            user: user.into(),
            password: password.into(),
            database: default_database(),
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }
}

/// Client for Neo4j graph operations.
///
/// Cheap to clone; clones share the underlying connection pool. Each query
/// checks a connection out of the pool and returns it once the result
/// stream is drained or dropped.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Create a new GraphClient from config.
    ///
    /// Note: neo4rs uses a lazy deadpool. `Graph::connect` only creates the pool
    /// object and does NOT establish a real bolt connection yet, so we run a
    /// `RETURN 1` ping to fail fast when Neo4j is unreachable or the
    /// credentials are wrong.
    pub async fn connect(config: &GraphConfig) -> Result<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db(config.database.as_str())
            .max_connections(16)
            .fetch_size(200)
            .build()
            .context("Failed to build Neo4j config")?;

        let graph = Graph::connect(neo4j_config)
            .await
            .context("Failed to create Neo4j connection pool")?;

        graph.run(Query::new("RETURN 1".to_string())).await
            .context("Neo4j is not responding to queries")?;

        info!(uri = %config.uri, database = %config.database, "Connected to Neo4j");
        Ok(Self { graph })
    }

    /// Execute a Cypher query that returns no results.
    pub async fn execute(&self, query: Query) -> Result<()> {
        self.graph.run(query).await.context("Neo4j query execution failed")?;
        Ok(())
    }

    /// Execute a Cypher query and return results as rows.
    pub async fn query(&self, query: Query) -> Result<Vec<neo4rs::Row>> {
        let mut result = self.graph.execute(query).await
            .context("Neo4j query failed")?;

        let mut rows = Vec::new();
        while let Some(row) = result.next().await.context("Failed to read Neo4j result row")? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a Cypher query and return its first row, if any.
    pub async fn query_one(&self, query: Query) -> Result<Option<neo4rs::Row>> {
        Ok(self.query(query).await?.into_iter().next())
    }

    /// Release the connection pool.
    ///
    /// Outstanding clones keep the pool alive until they are dropped too.
    pub fn close(self) {
        debug!("Closing Neo4j client");
        drop(self.graph);
    }
}
