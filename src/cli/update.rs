//! `wlc update` command implementation

use anyhow::Result;

use crate::api::{Client, TaskChanges};
use crate::date;

use super::definition::UpdateArgs;

pub async fn run(client: &Client, args: UpdateArgs) -> Result<()> {
    let task = client.get_task(args.task_id).await?;

    if let Some(title) = args.title.as_deref() {
        client
            .update_task(
                task.id,
                task.revision,
                TaskChanges {
                    title: Some(title),
                    ..TaskChanges::default()
                },
            )
            .await?;
    }

    if let Some(raw) = &args.due_date {
        let due_date = date::normalize(raw)?;
        client
            .update_task(
                task.id,
                task.revision,
                TaskChanges {
                    due_date: Some(due_date.as_str()),
                    ..TaskChanges::default()
                },
            )
            .await?;
    }

    println!("Updated task {}", task.id);
    Ok(())
}
