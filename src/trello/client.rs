use std::error::Error as _;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

use super::TrelloApi;
use crate::config::HttpConfig;
use crate::error::{Result, TrudError};
use crate::model::board::{Board, BoardList};
use crate::model::card::{Card, FieldValue};

const BACKOFF_MULTIPLIER: u32 = 2;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_token: String,
}

pub struct TrelloClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    max_retries: u32,
    retry_delay: Duration,
}

impl TrelloClient {
    pub fn new(credentials: Credentials, http: &HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(http.timeout())
            .user_agent(concat!("trud/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TrudError::ApiRequest {
                path: http.base_url.clone(),
                cause: describe(e),
            })?;

        Ok(Self {
            client,
            base_url: http.base_url.trim_end_matches('/').to_string(),
            credentials,
            max_retries: http.max_retries,
            retry_delay: http.retry_delay(),
        })
    }

    fn auth_params(&self) -> [(&str, &str); 2] {
        [
            ("key", &self.credentials.api_key),
            ("token", &self.credentials.api_token),
        ]
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` relative to the API root and decode the body as JSON.
    #[instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Value> {
        let response = self.send_with_retry(path).await?;
        let body = response.text().await.map_err(|e| TrudError::ApiRequest {
            path: path.to_string(),
            cause: describe(e),
        })?;
        serde_json::from_str(&body).map_err(|e| TrudError::MalformedResponse {
            path: path.to_string(),
            cause: e.to_string(),
        })
    }

    pub async fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self.get(path).await?;
        serde_json::from_value(value).map_err(|e| TrudError::MalformedResponse {
            path: path.to_string(),
            cause: e.to_string(),
        })
    }

    async fn send_with_retry(&self, path: &str) -> Result<Response> {
        let url = self.url(path);
        let mut attempt = 0;

        loop {
            debug!(attempt, "sending request");
            let cause = match self.client.get(&url).query(&self.auth_params()).send().await {
                Ok(response) if response.status().is_success() => return Ok(response),
                Ok(response) => {
                    let status = response.status();
                    if !is_retryable(status) {
                        return Err(TrudError::ApiRequest {
                            path: path.to_string(),
                            cause: format!("HTTP {status}"),
                        });
                    }
                    format!("HTTP {status}")
                }
                Err(e) => describe(e),
            };

            if attempt >= self.max_retries {
                return Err(TrudError::ApiRequest {
                    path: path.to_string(),
                    cause: format!("{cause} after {} attempts", attempt + 1),
                });
            }

            let delay = self.retry_delay * BACKOFF_MULTIPLIER.pow(attempt);
            warn!(path, attempt, ?delay, %cause, "retrying Trello request");
            sleep(delay).await;
            attempt += 1;
        }
    }
}

fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Render a reqwest error with its source chain, minus the URL (which
/// carries the credentials in its query string).
fn describe(error: reqwest::Error) -> String {
    let error = error.without_url();
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[async_trait]
impl TrelloApi for TrelloClient {
    async fn boards(&self) -> Result<Vec<Board>> {
        self.get_as("member/me/boards").await
    }

    async fn lists(&self, board_id: &str) -> Result<Vec<BoardList>> {
        self.get_as(&format!("boards/{board_id}/lists")).await
    }

    async fn list_cards(&self, list_id: &str) -> Result<Vec<Card>> {
        self.get_as(&format!("lists/{list_id}/cards")).await
    }

    async fn board_cards(&self, board_id: &str) -> Result<Vec<Card>> {
        self.get_as(&format!("boards/{board_id}/cards")).await
    }

    async fn member_full_name(&self, member_id: &str) -> Result<String> {
        let field: FieldValue = self
            .get_as(&format!("members/{member_id}/fullName"))
            .await?;
        Ok(field.value)
    }
}
