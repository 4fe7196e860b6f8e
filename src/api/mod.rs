//! Typed client for the Wunderlist v1 REST API
//!
//! Every mutation carries the task's latest `revision`; callers fetch the
//! record first and thread the token through.

pub mod error;
pub mod model;

pub use error::ApiError;
pub use model::{List, Task, TaskChanges};

use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use error::Result;

const API_BASE_URL: &str = "https://a.wunderlist.com/api/v1";

#[derive(Serialize)]
struct NewList<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct NewTask<'a> {
    list_id: u64,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    due_date: Option<&'a str>,
}

#[derive(Serialize)]
struct TaskPatch<'a> {
    revision: u64,
    #[serde(flatten)]
    changes: TaskChanges<'a>,
}

pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, API_BASE_URL)
    }

    /// Builds a client aimed at an explicit base URL. Tests point this at
    /// a local fixture server.
    pub fn with_base_url(config: &Config, base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("X-Access-Token", header_value(&config.access_token)?);
        headers.insert("X-Client-ID", header_value(&config.client_id)?);

        let http = reqwest::Client::builder()
            .user_agent("wunderlist-cmd")
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn get_lists(&self) -> Result<Vec<List>> {
        self.get("lists", &[]).await
    }

    pub async fn get_tasks(&self, list_id: u64, completed: bool) -> Result<Vec<Task>> {
        self.get(
            "tasks",
            &[
                ("list_id", list_id.to_string()),
                ("completed", completed.to_string()),
            ],
        )
        .await
    }

    pub async fn get_task(&self, task_id: u64) -> Result<Task> {
        self.get(&format!("tasks/{}", task_id), &[]).await
    }

    pub async fn create_list(&self, title: &str) -> Result<List> {
        self.post("lists", &NewList { title }).await
    }

    pub async fn create_task(
        &self,
        list_id: u64,
        title: &str,
        due_date: Option<&str>,
    ) -> Result<Task> {
        self.post(
            "tasks",
            &NewTask {
                list_id,
                title,
                due_date,
            },
        )
        .await
    }

    pub async fn update_task(
        &self,
        task_id: u64,
        revision: u64,
        changes: TaskChanges<'_>,
    ) -> Result<Task> {
        let url = format!("{}/tasks/{}", self.base_url, task_id);
        debug!("PATCH {}", url);
        let response = self
            .http
            .patch(&url)
            .json(&TaskPatch { revision, changes })
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_task(&self, task_id: u64, revision: u64) -> Result<()> {
        let url = format!("{}/tasks/{}", self.base_url, task_id);
        debug!("DELETE {}", url);
        let response = self
            .http
            .delete(&url)
            .query(&[("revision", revision)])
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {}", url);
        let response = self.http.get(&url).query(query).send().await?;
        decode(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("POST {}", url);
        let response = self.http.post(&url).json(body).send().await?;
        decode(response).await
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| ApiError::InvalidCredentials(value.to_string()))
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let response = check(response).await?;
    Ok(response.json().await?)
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}
