//! `wlc delete` command implementation

use anyhow::Result;

use crate::api::Client;

use super::definition::TaskRefArgs;

pub async fn run(client: &Client, args: TaskRefArgs) -> Result<()> {
    // The mutation needs the latest revision, so fetch first.
    let task = client.get_task(args.task_id).await?;
    client.delete_task(task.id, task.revision).await?;
    println!("Deleted task {} | {}", task.id, task.title);
    Ok(())
}
