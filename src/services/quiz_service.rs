use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Quiz,
    repositories::QuizRepository,
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn find_quiz_by_id(&self, id: &str) -> AppResult<Quiz> {
        let quiz = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        Ok(quiz)
    }

    pub async fn publish_quiz(&self, id: &str, published: bool) -> AppResult<()> {
        self.repository.set_published(id, published).await?;
        log::info!(
            "Quiz '{}' {}",
            id,
            if published { "published" } else { "unpublished" }
        );
        Ok(())
    }
}
