//! # MPM Graph
//!
//! Neo4j persistence for the machine & parts inventory.
//!
//! Provides the connection client, schema bootstrap, the Cypher
//! query/response mapping, and a Neo4j implementation of
//! [`mpm_core::InventoryStore`].

pub mod client;
pub mod queries;
pub mod schema;
pub mod store;

pub use client::{GraphClient, GraphConfig};
pub use schema::initialize_schema;
pub use store::Neo4jStore;
