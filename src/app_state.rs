use std::sync::Arc;

use validator::Validate;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{HttpQuizRepository, QuizRepository},
    routing::{HistoryNavigator, RouteParams},
    services::quiz_service::QuizService,
    store::AppStore,
    views::QuizDetailsView,
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub store: AppStore,
    pub navigator: Arc<HistoryNavigator>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;
        let config = Arc::new(config);

        let quiz_repository = Arc::new(HttpQuizRepository::new(config.clone())?);
        Ok(Self::with_repository(config, quiz_repository))
    }

    pub fn with_repository(config: Arc<Config>, quiz_repository: Arc<dyn QuizRepository>) -> Self {
        Self {
            quiz_service: Arc::new(QuizService::new(quiz_repository)),
            store: AppStore::default(),
            navigator: Arc::new(HistoryNavigator::new()),
            config,
        }
    }

    /// Builds the quiz details page for `route`, sharing this state's store
    /// and navigator.
    pub fn quiz_details_view(&self, route: RouteParams) -> AppResult<QuizDetailsView> {
        route.validate()?;
        Ok(QuizDetailsView::new(
            route,
            self.quiz_service.clone(),
            self.store.clone(),
            self.navigator.clone(),
            self.config.sanitize_descriptions,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = Config::test_config();
        config.api_base_url = "localhost".to_string();

        assert!(matches!(
            AppState::new(config),
            Err(AppError::ConfigError(_))
        ));
    }

    #[test]
    fn test_view_requires_valid_route() {
        let state = AppState::new(Config::test_config()).unwrap();

        let route = RouteParams {
            course_id: String::new(),
            quiz_id: Some("Q1".to_string()),
        };
        assert!(matches!(
            state.quiz_details_view(route),
            Err(AppError::ValidationError(_))
        ));

        let view = state
            .quiz_details_view(RouteParams::new("RS101", "Q1"))
            .unwrap();
        assert_eq!(view.route(), RouteParams::new("RS101", "Q1"));
    }
}
