use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::Quiz,
    services::http_helpers::{authorize, endpoint, error_for_status},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn set_published(&self, id: &str, published: bool) -> AppResult<()>;
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PublishQuizRequest {
    pub published: bool,
}

/// Quiz repository backed by the course server's REST API.
pub struct HttpQuizRepository {
    client: Client,
    base_url: Url,
    config: Arc<Config>,
}

impl HttpQuizRepository {
    pub fn new(config: Arc<Config>) -> AppResult<Self> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            AppError::ConfigError(format!("invalid API base URL '{}': {}", config.api_base_url, e))
        })?;

        Ok(Self {
            client: Client::new(),
            base_url,
            config,
        })
    }

    pub fn quiz_url(&self, id: &str) -> AppResult<Url> {
        endpoint(&self.base_url, &["quizzes", id])
    }

    pub fn publish_url(&self, id: &str) -> AppResult<Url> {
        endpoint(&self.base_url, &["quizzes", id, "publish"])
    }
}

#[async_trait]
impl QuizRepository for HttpQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let url = self.quiz_url(id)?;
        log::debug!("GET {}", url);

        let response = authorize(self.client.get(url), self.config.api_token.as_ref())
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let quiz = error_for_status(response).await?.json::<Quiz>().await?;
        Ok(Some(quiz))
    }

    async fn set_published(&self, id: &str, published: bool) -> AppResult<()> {
        let url = self.publish_url(id)?;
        log::debug!("PUT {} published={}", url, published);

        let response = authorize(self.client.put(url), self.config.api_token.as_ref())
            .json(&PublishQuizRequest { published })
            .send()
            .await?;

        error_for_status(response).await?;
        Ok(())
    }
}
