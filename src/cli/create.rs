//! `wlc create` command implementation

use anyhow::Result;

use crate::api::Client;
use crate::date;

use super::definition::{CreateCommands, CreateListArgs, CreateTaskArgs};

pub async fn run(client: &Client, command: CreateCommands) -> Result<()> {
    match command {
        CreateCommands::List(args) => run_list(client, args).await,
        CreateCommands::Task(args) => run_task(client, args).await,
    }
}

async fn run_list(client: &Client, args: CreateListArgs) -> Result<()> {
    let list = client.create_list(&args.title).await?;
    println!("Created list {} | {}", list.id, list.title);
    Ok(())
}

async fn run_task(client: &Client, args: CreateTaskArgs) -> Result<()> {
    let list_id = super::resolve_list_id(client, &args.in_list).await?;

    // A malformed due date aborts before anything is created.
    let due_date = match &args.due_date {
        Some(raw) => Some(date::normalize(raw)?),
        None => None,
    };

    let task = client
        .create_task(list_id, &args.title, due_date.as_deref())
        .await?;
    println!("Created task {} | {}", task.id, task.title);
    Ok(())
}
