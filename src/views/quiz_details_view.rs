use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    models::{
        domain::{Quiz, UserRole},
        view::QuizDetails,
    },
    routing::{Navigator, QuizPage, Route, RouteParams},
    services::quiz_service::QuizService,
    store::{AppStore, StoreAction},
    views::{
        html::sanitize_html,
        render::{Button, ButtonVariant, EditorView, RenderedView, StudentView, ViewAction},
    },
};

/// Result of a publish toggle request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublishOutcome {
    /// No quiz loaded, or the current user may not publish.
    Skipped,
    /// Another toggle for this view has not resolved yet.
    Busy,
    /// The server accepted the change; holds the new published flag.
    Updated(bool),
    /// The server call failed; nothing changed.
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Navigated(String),
    Publish(PublishOutcome),
}

#[derive(Debug)]
struct ViewState {
    route: RouteParams,
    loading: bool,
    quiz: Option<Quiz>,
    generation: u64,
    /// Generation whose publish toggle has not resolved yet.
    publish_in_flight: Option<u64>,
}

/// View model for `/Courses/{cid}/Quizzes/{qid}`.
///
/// Local state sits behind a mutex that is released before every await, so
/// handlers may be driven concurrently from one task or several.
pub struct QuizDetailsView {
    quiz_service: Arc<QuizService>,
    store: AppStore,
    navigator: Arc<dyn Navigator>,
    sanitize_descriptions: bool,
    state: Mutex<ViewState>,
}

impl QuizDetailsView {
    pub fn new(
        route: RouteParams,
        quiz_service: Arc<QuizService>,
        store: AppStore,
        navigator: Arc<dyn Navigator>,
        sanitize_descriptions: bool,
    ) -> Self {
        Self {
            quiz_service,
            store,
            navigator,
            sanitize_descriptions,
            state: Mutex::new(ViewState {
                route,
                loading: true,
                quiz: None,
                generation: 0,
                publish_in_flight: None,
            }),
        }
    }

    pub fn route(&self) -> RouteParams {
        self.state().route.clone()
    }

    /// Points the view at another route. Returns true when the course or
    /// quiz id changed, in which case the old quiz is dropped and [`load`]
    /// must run.
    ///
    /// A toggle still pending for the previous route keeps its own marker and
    /// does not block toggles on the new one.
    ///
    /// [`load`]: QuizDetailsView::load
    pub fn set_route(&self, route: RouteParams) -> bool {
        let mut state = self.state();
        if state.route == route {
            return false;
        }

        state.route = route;
        state.generation += 1;
        state.loading = true;
        state.quiz = None;
        true
    }

    /// Fetches the quiz for the current route.
    ///
    /// A failed fetch is logged and sends the user back to the course's quiz
    /// list. A response that arrives after the route changed is dropped.
    pub async fn load(&self) {
        let (generation, route) = {
            let mut state = self.state();
            state.loading = true;
            (state.generation, state.route.clone())
        };

        if let Some(quiz_id) = route.quiz_id.as_deref() {
            let result = self.quiz_service.find_quiz_by_id(quiz_id).await;

            let mut state = self.state();
            if state.generation != generation {
                log::debug!("Discarding stale response for quiz '{}'", quiz_id);
                return;
            }

            match result {
                Ok(quiz) => state.quiz = Some(quiz),
                Err(e) => {
                    log::error!("Error fetching quiz '{}': {}", quiz_id, e);
                    state.loading = false;
                    drop(state);
                    self.navigator.push(&route.quiz_list());
                    return;
                }
            }
            state.loading = false;
        } else {
            let mut state = self.state();
            if state.generation == generation {
                state.loading = false;
            }
        }
    }

    /// Flips the quiz's published flag on the server, then mirrors it into
    /// the shared store and the local copy.
    pub async fn toggle_publish(&self) -> PublishOutcome {
        if !self.current_role().is_some_and(UserRole::can_edit) {
            return PublishOutcome::Skipped;
        }

        let (quiz_id, published, generation) = {
            let mut state = self.state();
            let Some(quiz) = state.quiz.as_ref() else {
                return PublishOutcome::Skipped;
            };
            let (quiz_id, published) = (quiz.id.clone(), !quiz.published);
            let generation = state.generation;
            if state.publish_in_flight == Some(generation) {
                log::debug!("Publish toggle for quiz '{}' already in flight", quiz_id);
                return PublishOutcome::Busy;
            }
            state.publish_in_flight = Some(generation);
            (quiz_id, published, generation)
        };

        let result = self.quiz_service.publish_quiz(&quiz_id, published).await;

        let mut state = self.state();
        if state.publish_in_flight == Some(generation) {
            state.publish_in_flight = None;
        }

        match result {
            Ok(()) => {
                self.store.dispatch(StoreAction::PublishQuiz {
                    quiz_id: quiz_id.clone(),
                    published,
                });
                // The route may have moved on to another quiz meanwhile.
                let updated = state
                    .quiz
                    .as_ref()
                    .filter(|q| q.id == quiz_id)
                    .map(|q| q.with_published(published));
                if updated.is_some() {
                    state.quiz = updated;
                }
                PublishOutcome::Updated(published)
            }
            Err(e) => {
                log::error!("Error publishing quiz '{}': {}", quiz_id, e);
                PublishOutcome::Failed
            }
        }
    }

    /// Runs the handler behind a rendered button.
    pub async fn perform(&self, action: ViewAction) -> ActionOutcome {
        let page = match action {
            ViewAction::TogglePublish => return ActionOutcome::Publish(self.toggle_publish().await),
            ViewAction::Preview => QuizPage::Preview,
            ViewAction::Edit => QuizPage::Edit,
            ViewAction::StartQuiz => QuizPage::Take,
        };
        let route = self.navigate(page);
        ActionOutcome::Navigated(route.to_string())
    }

    fn navigate(&self, page: QuizPage) -> Route {
        let route = self.state().route.route(page);
        self.navigator.push(&route);
        route
    }

    pub fn render(&self) -> RenderedView {
        let state = self.state();
        if state.loading {
            return RenderedView::Loading;
        }
        let Some(quiz) = state.quiz.as_ref() else {
            return RenderedView::NotFound;
        };

        let details = QuizDetails::from(quiz);
        let description_html = details.description.as_deref().map(|html| {
            if self.sanitize_descriptions {
                sanitize_html(html)
            } else {
                html.to_string()
            }
        });

        let role = self.current_role();
        if role.is_some_and(UserRole::is_student) {
            return RenderedView::Student(StudentView {
                title: details.title.clone(),
                total_points: details.total_points,
                question_count: details.question_count,
                description_html,
                start: Button {
                    label: "Start Quiz",
                    variant: ButtonVariant::Primary,
                    action: ViewAction::StartQuiz,
                },
            });
        }

        // Absent and unrecognised roles land here as well; only the publish
        // handler checks the role.
        RenderedView::Editor(EditorView {
            title: details.title.clone(),
            can_edit: role.is_some_and(UserRole::can_edit),
            buttons: vec![
                Button::publish_toggle(details.published),
                Button {
                    label: "Preview",
                    variant: ButtonVariant::Secondary,
                    action: ViewAction::Preview,
                },
                Button {
                    label: "Edit",
                    variant: ButtonVariant::Primary,
                    action: ViewAction::Edit,
                },
            ],
            rows: details.attribute_rows(),
            description_html,
        })
    }

    /// The quiz currently held by the view, if any.
    pub fn quiz(&self) -> Option<Quiz> {
        self.state().quiz.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    fn current_role(&self) -> Option<UserRole> {
        self.store.current_user().map(|user| user.role)
    }

    fn state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
