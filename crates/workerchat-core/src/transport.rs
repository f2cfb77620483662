use std::time::Duration;

use crate::config::Settings;
use crate::error::{ChatError, Result};

/// The remote inference call, behind a trait so sessions can be driven
/// against a double in tests.
#[async_trait::async_trait]
pub trait AnswerTransport: Send + Sync {
    /// Fetch the full answer for one trimmed, non-empty query.
    async fn fetch_answer(&self, query: &str) -> Result<String>;
}

/// HTTP client for the worker endpoint: a single GET with the query in `q`,
/// whole body used verbatim as the answer.
pub struct WorkerClient {
    http: reqwest::Client,
    base_url: String,
}

impl WorkerClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::build(base_url.into(), "Workerchat/0.1", None)
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::build(
            settings.endpoint.base_url.clone(),
            &settings.endpoint.user_agent,
            settings.endpoint.timeout_secs,
        )
    }

    fn build(base_url: String, user_agent: &str, timeout_secs: Option<u64>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn query_url(&self, query: &str) -> String {
        format!("{}?q={}", self.base_url, urlencoding::encode(query))
    }
}

#[async_trait::async_trait]
impl<T: AnswerTransport + ?Sized> AnswerTransport for std::sync::Arc<T> {
    async fn fetch_answer(&self, query: &str) -> Result<String> {
        (**self).fetch_answer(query).await
    }
}

#[async_trait::async_trait]
impl AnswerTransport for WorkerClient {
    async fn fetch_answer(&self, query: &str) -> Result<String> {
        let response = self.http.get(self.query_url(query)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Endpoint {
                status: status.as_u16(),
            });
        }
        // Content-type is irrelevant; the body is the answer.
        Ok(response.text().await?)
    }
}
