//! `wlc show` command implementation

use anyhow::Result;

use crate::api::Client;

use super::definition::{ShowCommands, TaskRefArgs};

pub async fn run(client: &Client, command: ShowCommands) -> Result<()> {
    match command {
        ShowCommands::Task(args) => run_task(client, args).await,
    }
}

async fn run_task(client: &Client, args: TaskRefArgs) -> Result<()> {
    let task = client.get_task(args.task_id).await?;
    println!("{}", serde_json::to_string_pretty(&task)?);
    Ok(())
}
