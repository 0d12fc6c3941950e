//! HTTP client for the ltodo REST API.
//!
//! The terminal front end never touches the database; every command goes
//! through [`ApiClient`] against a running `ltodo serve`.

use crate::db::categories::Category;
use crate::libs::config::AppConfig;
use crate::libs::messages::Message;
use crate::libs::todo::Todo;
use crate::server::dto::{CategoryPayload, HealthResponse, MessageResponse, TodoPayload};
use crate::server::error::ApiError;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status.
    #[error("{}", Message::ApiRequestFailed(.status.as_u16(), .message.clone()))]
    Api { status: StatusCode, message: String },

    /// No usable response: connection refused, timeout, undecodable body.
    #[error("{}", Message::ApiUnreachable(.0.to_string()))]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
        }
    }

    /// Server-provided error text, if any.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } => Some(message),
            ClientError::Transport(_) => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_url())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let res = request.send().await?;
        let status = res.status();

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or_default().to_string());
            tracing::debug!(status = status.as_u16(), %message, "api request failed");
            return Err(ClientError::Api { status, message });
        }

        Ok(res.json::<T>().await?)
    }

    pub async fn health(&self) -> ClientResult<HealthResponse> {
        self.send(self.client.get(self.url("health"))).await
    }

    pub async fn list_todos(&self) -> ClientResult<Vec<Todo>> {
        self.send(self.client.get(self.url("todos"))).await
    }

    pub async fn get_todo(&self, id: i64) -> ClientResult<Todo> {
        self.send(self.client.get(self.url(&format!("todos/{}", id)))).await
    }

    pub async fn create_todo(&self, payload: &TodoPayload) -> ClientResult<Todo> {
        self.send(self.client.post(self.url("todos")).json(payload)).await
    }

    pub async fn update_todo(&self, id: i64, payload: &TodoPayload) -> ClientResult<Todo> {
        self.send(self.client.put(self.url(&format!("todos/{}", id))).json(payload)).await
    }

    pub async fn delete_todo(&self, id: i64) -> ClientResult<MessageResponse> {
        self.send(self.client.delete(self.url(&format!("todos/{}", id)))).await
    }

    pub async fn toggle_todo(&self, id: i64) -> ClientResult<Todo> {
        self.send(self.client.patch(self.url(&format!("todos/{}/toggle", id)))).await
    }

    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.send(self.client.get(self.url("categories"))).await
    }

    pub async fn get_category(&self, id: i64) -> ClientResult<Category> {
        self.send(self.client.get(self.url(&format!("categories/{}", id)))).await
    }

    pub async fn create_category(&self, payload: &CategoryPayload) -> ClientResult<Category> {
        self.send(self.client.post(self.url("categories")).json(payload)).await
    }

    pub async fn update_category(&self, id: i64, payload: &CategoryPayload) -> ClientResult<Category> {
        self.send(self.client.put(self.url(&format!("categories/{}", id))).json(payload))
            .await
    }

    pub async fn delete_category(&self, id: i64) -> ClientResult<MessageResponse> {
        self.send(self.client.delete(self.url(&format!("categories/{}", id)))).await
    }

    pub async fn list_category_todos(&self, id: i64) -> ClientResult<Vec<Todo>> {
        self.send(self.client.get(self.url(&format!("categories/{}/todos", id)))).await
    }
}
