use std::sync::{Mutex, PoisonError};

use crate::routing::Route;

/// Route transitions requested by views.
pub trait Navigator: Send + Sync {
    fn push(&self, route: &Route);
}

/// In-memory browser history: every pushed route is appended.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn current(&self) -> Option<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for HistoryNavigator {
    fn push(&self, route: &Route) {
        let path = route.to_string();
        log::debug!("Navigating to {}", path);
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{QuizPage, RouteParams};

    #[test]
    fn test_history_records_pushes_in_order() {
        let navigator = HistoryNavigator::new();
        let params = RouteParams::new("RS101", "Q1");

        assert_eq!(navigator.current(), None);

        navigator.push(&params.route(QuizPage::Preview));
        navigator.push(&params.quiz_list());

        assert_eq!(
            navigator.history(),
            vec![
                "/Courses/RS101/Quizzes/Q1/Preview".to_string(),
                "/Courses/RS101/Quizzes".to_string(),
            ]
        );
        assert_eq!(navigator.current().as_deref(), Some("/Courses/RS101/Quizzes"));
    }
}
