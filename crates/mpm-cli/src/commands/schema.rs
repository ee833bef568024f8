//! Schema bootstrap command.

use anyhow::Result;
use colored::Colorize;

use super::GraphArgs;

pub async fn execute(args: GraphArgs) -> Result<()> {
    let client = args.connect().await?;

    mpm_graph::initialize_schema(&client).await?;
    println!(
        "{} {} indexes ensured",
        "Schema ready:".green().bold(),
        mpm_graph::schema::SCHEMA_STATEMENTS.len()
    );

    client.close();
    Ok(())
}
