//! MPM Core Library
//!
//! Domain records and use cases for the machine & parts inventory.

pub mod drawing;
pub mod error;
pub mod machine;
pub mod memory;
pub mod part;
pub mod stats;
pub mod store;

pub use drawing::DrawingStore;
pub use error::{ErrorKind, InventoryError, InventoryResult};
pub use stats::InventoryStats;
pub use store::InventoryStore;
