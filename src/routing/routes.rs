use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{AppError, AppResult};

/// Path parameters of the quiz details page: `/Courses/{cid}/Quizzes/{qid}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct RouteParams {
    #[validate(length(min = 1, message = "course id must not be empty"))]
    pub course_id: String,
    #[validate(length(min = 1, message = "quiz id must not be empty"))]
    pub quiz_id: Option<String>,
}

impl RouteParams {
    pub fn new(course_id: &str, quiz_id: &str) -> Self {
        Self {
            course_id: course_id.to_string(),
            quiz_id: Some(quiz_id.to_string()),
        }
    }

    /// Resolves the course and quiz ids from a location such as
    /// `/Courses/RS101/Quizzes/Q1`. Trailing sub-pages are ignored.
    pub fn from_path(path: &str) -> AppResult<Self> {
        let segments: Vec<&str> = path
            .split('?')
            .next()
            .unwrap_or_default()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        let params = match segments.as_slice() {
            ["Courses", cid, "Quizzes", qid, ..] => RouteParams::new(cid, qid),
            ["Courses", cid, "Quizzes"] => RouteParams {
                course_id: cid.to_string(),
                quiz_id: None,
            },
            _ => {
                return Err(AppError::ValidationError(format!(
                    "'{}' is not a quiz route",
                    path
                )))
            }
        };

        params.validate()?;
        Ok(params)
    }

    pub fn route(&self, page: QuizPage) -> Route {
        match (&self.quiz_id, page) {
            (Some(quiz_id), page) => Route::Quiz {
                course_id: self.course_id.clone(),
                quiz_id: quiz_id.clone(),
                page,
            },
            (None, _) => self.quiz_list(),
        }
    }

    pub fn quiz_list(&self) -> Route {
        Route::QuizList {
            course_id: self.course_id.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPage {
    Details,
    Take,
    Preview,
    Edit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    QuizList {
        course_id: String,
    },
    Quiz {
        course_id: String,
        quiz_id: String,
        page: QuizPage,
    },
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::QuizList { course_id } => write!(f, "/Courses/{}/Quizzes", course_id),
            Route::Quiz {
                course_id,
                quiz_id,
                page,
            } => {
                write!(f, "/Courses/{}/Quizzes/{}", course_id, quiz_id)?;
                match page {
                    QuizPage::Details => Ok(()),
                    QuizPage::Take => write!(f, "/Take"),
                    QuizPage::Preview => write!(f, "/Preview"),
                    QuizPage::Edit => write!(f, "/Edit"),
                }
            }
        }
    }
}
