//! `wlc done` command implementation

use anyhow::Result;

use crate::api::{Client, TaskChanges};

use super::definition::TaskRefArgs;

pub async fn run(client: &Client, args: TaskRefArgs) -> Result<()> {
    // The mutation needs the latest revision, so fetch first.
    let task = client.get_task(args.task_id).await?;
    let updated = client
        .update_task(
            task.id,
            task.revision,
            TaskChanges {
                completed: Some(true),
                ..TaskChanges::default()
            },
        )
        .await?;
    println!("Completed task {} | {}", updated.id, updated.title);
    Ok(())
}
