use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use url::Url;

use crate::client::retry::{is_retryable_http_error, is_retryable_network_error, retry_async, RetryConfig};
use crate::client::CatalogSource;
use crate::config::Config;
use crate::logging::{log_exchange, ProfileScope};
use crate::model::ModelRecord;

const VIEW_MODEL_PATH: &str = "services/details/view_model";
const BODY_SNIPPET_CHARS: usize = 200;

/// Non-2xx answer from the catalog API.
#[derive(Debug, Clone)]
pub struct HttpStatusError {
    pub status: u16,
    pub body: String,
}

impl fmt::Display for HttpStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "catalog returned HTTP {}: {}", self.status, self.body)
    }
}

impl std::error::Error for HttpStatusError {}

fn is_retryable(err: &anyhow::Error) -> bool {
    if let Some(e) = err.downcast_ref::<HttpStatusError>() {
        return is_retryable_http_error(e.status);
    }
    if let Some(e) = err.downcast_ref::<reqwest::Error>() {
        return is_retryable_network_error(e);
    }
    false
}

pub struct HttpCatalog {
    client: Client,
    base: Url,
    retry: RetryConfig,
}

impl HttpCatalog {
    pub fn new(cfg: &Config) -> Result<Self> {
        let mut base = cfg.api_base.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base).with_context(|| format!("invalid API base {:?}", cfg.api_base))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            client,
            base,
            retry: cfg.retry.clone(),
        })
    }

    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .with_context(|| format!("joining {:?} onto {}", path, self.base))
    }

    async fn view_model_once(&self, url: &Url, model_id: &str, attempt: u32) -> Result<ModelRecord> {
        let scope = ProfileScope::new("catalog.http");
        let resp = self
            .client
            .post(url.clone())
            .json(&json!({ "modelId": model_id }))
            .send()
            .await?;
        let status = resp.status();
        log_exchange(url.path(), model_id, status.as_u16(), scope.elapsed_ms(), attempt);

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(HttpStatusError {
                status: status.as_u16(),
                body: body.chars().take(BODY_SNIPPET_CHARS).collect(),
            }
            .into());
        }
        let model = resp
            .json::<ModelRecord>()
            .await
            .with_context(|| format!("decoding model {:?}", model_id))?;
        Ok(model)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn view_model(&self, model_id: &str) -> Result<ModelRecord> {
        let url = self.endpoint(VIEW_MODEL_PATH)?;
        retry_async(&self.retry, "view_model", is_retryable, |attempt| {
            self.view_model_once(&url, model_id, attempt)
        })
        .await
    }
}
