use serde::{Deserialize, Serialize};

use crate::models::domain::{lenient, quiz_question::QuizQuestion};

/// Quiz record as served by the quiz API.
///
/// Configuration fields are all optional on the wire; the defaults shown on the
/// details page are applied by [`QuizDetails`](crate::models::view::QuizDetails),
/// never here.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>, // HTML from the rich text editor
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuffle_answers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_time_limit: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::count",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_limit: Option<u32>, // minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_attempts: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::count",
        skip_serializing_if = "Option::is_none"
    )]
    pub attempts_allowed: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_correct_answers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_question_at_a_time: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webcam_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_questions_after_answering: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date_input: Option<String>, // raw value of the editor's date input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_date_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until_date_input: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<QuizQuestion>>,
}

impl Quiz {
    pub fn new(id: &str, title: &str) -> Self {
        Quiz {
            id: id.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Sum of question points when the quiz has questions, otherwise its own
    /// points field. Missing values count as zero.
    pub fn total_points(&self) -> f64 {
        match self.questions.as_deref() {
            Some(questions) if !questions.is_empty() => {
                questions.iter().map(QuizQuestion::points_or_zero).sum()
            }
            _ => self.points.unwrap_or(0.0),
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.as_ref().map_or(0, Vec::len)
    }

    /// Copy of this quiz with a different published flag.
    pub fn with_published(&self, published: bool) -> Self {
        Quiz {
            published,
            ..self.clone()
        }
    }
}
