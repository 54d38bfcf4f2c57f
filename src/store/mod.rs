use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::domain::{Quiz, User};

/// Shared client state read by views: the signed-in account and the
/// course's cached quiz list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoreState {
    pub current_user: Option<User>,
    pub quizzes: Vec<Quiz>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StoreAction {
    SetCurrentUser(Option<User>),
    SetQuizzes(Vec<Quiz>),
    AddQuiz(Quiz),
    UpdateQuiz(Quiz),
    DeleteQuiz { quiz_id: String },
    PublishQuiz { quiz_id: String, published: bool },
}

/// Cloneable handle to the shared state. Every clone sees the same state.
#[derive(Clone, Debug, Default)]
pub struct AppStore {
    state: Arc<RwLock<StoreState>>,
}

impl AppStore {
    pub fn new(initial: StoreState) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.read().current_user.clone()
    }

    pub fn quizzes(&self) -> Vec<Quiz> {
        self.read().quizzes.clone()
    }

    pub fn quiz(&self, quiz_id: &str) -> Option<Quiz> {
        self.read().quizzes.iter().find(|q| q.id == quiz_id).cloned()
    }

    pub fn snapshot(&self) -> StoreState {
        self.read().clone()
    }

    pub fn dispatch(&self, action: StoreAction) {
        log::debug!("Store action: {:?}", action);
        let mut state = self.write();
        reduce(&mut state, action);
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn reduce(state: &mut StoreState, action: StoreAction) {
    match action {
        StoreAction::SetCurrentUser(user) => state.current_user = user,
        StoreAction::SetQuizzes(quizzes) => state.quizzes = quizzes,
        StoreAction::AddQuiz(quiz) => state.quizzes.push(quiz),
        StoreAction::UpdateQuiz(quiz) => {
            if let Some(existing) = state.quizzes.iter_mut().find(|q| q.id == quiz.id) {
                *existing = quiz;
            }
        }
        StoreAction::DeleteQuiz { quiz_id } => state.quizzes.retain(|q| q.id != quiz_id),
        StoreAction::PublishQuiz { quiz_id, published } => {
            // Unknown ids are ignored; the list may not be loaded yet.
            if let Some(existing) = state.quizzes.iter_mut().find(|q| q.id == quiz_id) {
                existing.published = published;
            }
        }
    }
}
