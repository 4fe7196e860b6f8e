//! Wunderlist API records

use serde::{Deserialize, Serialize};

/// A named collection of tasks, owned by the remote service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List {
    pub id: u64,
    pub title: String,

    #[serde(default)]
    pub revision: u64,
}

/// A single to-do item.
///
/// `revision` is the optimistic-concurrency token; the remote rejects any
/// mutation that does not carry the latest value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub list_id: u64,

    #[serde(default)]
    pub revision: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Fields of a task mutation. Unset fields are left untouched remotely.
#[derive(Debug, Default, Serialize)]
pub struct TaskChanges<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
