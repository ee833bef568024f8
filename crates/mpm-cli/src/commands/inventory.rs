//! Direct inventory queries against the graph.

use anyhow::Result;
use clap::Subcommand;

use super::GraphArgs;
use crate::output;

#[derive(Subcommand)]
pub enum InventoryCommands {
    /// Show machine, part, and unlinked part counts
    Stats {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Show a part by its number
    Part {
        /// Part number
        number: String,
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Show a machine and its linked parts
    Machine {
        /// Machine name
        name: String,
        /// Site the machine is located at
        site: String,
        #[command(flatten)]
        graph: GraphArgs,
    },
}

pub async fn execute(cmd: InventoryCommands) -> Result<()> {
    match cmd {
        InventoryCommands::Stats { graph } => {
            let client = graph.connect().await?;
            let store = mpm_graph::Neo4jStore::new(client.clone());
            let stats = mpm_core::stats::get_inventory_stats(&store).await?;
            output::print_stats(&stats);
            client.close();
        }
        InventoryCommands::Part { number, graph } => {
            let client = graph.connect().await?;
            let store = mpm_graph::Neo4jStore::new(client.clone());
            let part = mpm_core::part::get_part_by_number(&store, &number).await?;
            output::print_part(&part);
            client.close();
        }
        InventoryCommands::Machine { name, site, graph } => {
            let client = graph.connect().await?;
            let store = mpm_graph::Neo4jStore::new(client.clone());
            let machine = mpm_core::machine::get_machine_with_parts(&store, &name, &site).await?;
            output::print_machine_with_parts(&machine);
            client.close();
        }
    }

    Ok(())
}
