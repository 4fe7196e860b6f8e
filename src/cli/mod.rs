//! CLI command implementations

pub mod create;
pub mod definition;
pub mod delete;
pub mod done;
pub mod list;
pub mod show;
pub mod update;

pub use definition::{Cli, Commands};

use anyhow::{bail, Result};

use crate::api::{Client, List};

/// Resolves a list argument to an id. Numeric input is taken as the id
/// directly; anything else is matched case-insensitively against the
/// titles of all lists.
pub async fn resolve_list_id(client: &Client, in_list: &str) -> Result<u64> {
    if let Ok(id) = in_list.parse::<u64>() {
        return Ok(id);
    }

    let lists = client.get_lists().await?;
    match find_list_by_title(&lists, in_list) {
        Some(id) => Ok(id),
        None => bail!("List not found: {}", in_list),
    }
}

pub fn find_list_by_title(lists: &[List], title: &str) -> Option<u64> {
    let wanted = title.to_lowercase();
    lists
        .iter()
        .find(|list| list.title.to_lowercase() == wanted)
        .map(|list| list.id)
}
