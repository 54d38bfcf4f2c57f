use std::fmt;

use crate::models::domain::Quiz;

pub const DEFAULT_QUIZ_TYPE: &str = "Graded Quiz";
pub const DEFAULT_ASSIGNMENT_GROUP: &str = "Quizzes";
pub const DEFAULT_SHOW_CORRECT_ANSWERS: &str = "After submission";
pub const DEFAULT_TIME_LIMIT_MINUTES: u32 = 20;
pub const DEFAULT_ATTEMPTS_ALLOWED: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeLimit {
    Unlimited,
    Minutes(u32),
}

impl fmt::Display for TimeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeLimit::Unlimited => write!(f, "No Time Limit"),
            TimeLimit::Minutes(minutes) => write!(f, "{} Minutes", minutes),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attempts {
    Single,
    Multiple(u32),
}

/// A quiz with every display default applied.
///
/// This is the only place where missing quiz settings are filled in. Empty
/// strings and zero counts are treated the same as missing values; a string of
/// only whitespace counts as set and is shown as is.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizDetails {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub published: bool,
    pub quiz_type: String,
    pub total_points: f64,
    pub assignment_group: String,
    pub shuffle_answers: bool,
    pub time_limit: TimeLimit,
    pub attempts: Attempts,
    pub show_correct_answers: String,
    pub access_code: Option<String>,
    pub one_question_at_a_time: bool,
    pub webcam_required: bool,
    pub lock_questions_after_answering: bool,
    pub due_date: Option<String>,
    pub available_date: Option<String>,
    pub until_date: Option<String>,
    pub question_count: usize,
}

impl From<&Quiz> for QuizDetails {
    fn from(quiz: &Quiz) -> Self {
        let time_limit = if quiz.has_time_limit == Some(false) {
            TimeLimit::Unlimited
        } else {
            TimeLimit::Minutes(non_zero(quiz.time_limit).unwrap_or(DEFAULT_TIME_LIMIT_MINUTES))
        };

        let attempts = if quiz.multiple_attempts.unwrap_or(false) {
            Attempts::Multiple(non_zero(quiz.attempts_allowed).unwrap_or(DEFAULT_ATTEMPTS_ALLOWED))
        } else {
            Attempts::Single
        };

        QuizDetails {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            description: non_empty(&quiz.description),
            published: quiz.published,
            quiz_type: non_empty(&quiz.quiz_type).unwrap_or_else(|| DEFAULT_QUIZ_TYPE.to_string()),
            total_points: quiz.total_points(),
            assignment_group: non_empty(&quiz.assignment_group)
                .unwrap_or_else(|| DEFAULT_ASSIGNMENT_GROUP.to_string()),
            shuffle_answers: quiz.shuffle_answers.unwrap_or(false),
            time_limit,
            attempts,
            show_correct_answers: non_empty(&quiz.show_correct_answers)
                .unwrap_or_else(|| DEFAULT_SHOW_CORRECT_ANSWERS.to_string()),
            access_code: non_empty(&quiz.access_code),
            one_question_at_a_time: quiz.one_question_at_a_time != Some(false),
            webcam_required: quiz.webcam_required.unwrap_or(false),
            lock_questions_after_answering: quiz.lock_questions_after_answering.unwrap_or(false),
            due_date: non_empty(&quiz.due_date).or_else(|| non_empty(&quiz.due_date_input)),
            available_date: non_empty(&quiz.available_date)
                .or_else(|| non_empty(&quiz.available_date_input)),
            until_date: non_empty(&quiz.until_date).or_else(|| non_empty(&quiz.until_date_input)),
            question_count: quiz.question_count(),
        }
    }
}

impl QuizDetails {
    /// Label/value pairs for the settings table, in display order.
    pub fn attribute_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Quiz Type", self.quiz_type.clone()),
            ("Points", format_points(self.total_points)),
            ("Assignment Group", self.assignment_group.clone()),
            ("Shuffle Answers", yes_no(self.shuffle_answers)),
            ("Time Limit", self.time_limit.to_string()),
            (
                "Multiple Attempts",
                yes_no(matches!(self.attempts, Attempts::Multiple(_))),
            ),
        ];

        if let Attempts::Multiple(allowed) = self.attempts {
            rows.push(("How Many Attempts", allowed.to_string()));
        }

        rows.extend([
            ("Show Correct Answers", self.show_correct_answers.clone()),
            (
                "Access Code",
                self.access_code.clone().unwrap_or_else(|| "None".to_string()),
            ),
            ("One Question at a Time", yes_no(self.one_question_at_a_time)),
            ("Webcam Required", yes_no(self.webcam_required)),
            (
                "Lock Questions After Answering",
                yes_no(self.lock_questions_after_answering),
            ),
            ("Due Date", date_or_not_set(&self.due_date)),
            ("Available Date", date_or_not_set(&self.available_date)),
            ("Until Date", date_or_not_set(&self.until_date)),
            ("Number of Questions", self.question_count.to_string()),
            ("Published", yes_no(self.published)),
        ]);

        rows
    }
}

/// Whole numbers print without a fractional part, so `10.0` shows as `10`.
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 && points.abs() < 1e15 {
        format!("{:.0}", points)
    } else {
        points.to_string()
    }
}

fn yes_no(flag: bool) -> String {
    let label = if flag { "Yes" } else { "No" };
    label.to_string()
}

fn date_or_not_set(date: &Option<String>) -> String {
    date.clone().unwrap_or_else(|| "Not set".to_string())
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

fn non_zero(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::QuizQuestion;

    fn row<'a>(rows: &'a [(&'static str, String)], label: &str) -> Option<&'a str> {
        rows.iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn defaults_for_a_bare_quiz() {
        let details = QuizDetails::from(&Quiz::new("q1", "Bare"));

        assert_eq!(details.quiz_type, "Graded Quiz");
        assert_eq!(details.assignment_group, "Quizzes");
        assert_eq!(details.show_correct_answers, "After submission");
        assert_eq!(details.time_limit, TimeLimit::Minutes(20));
        assert_eq!(details.attempts, Attempts::Single);
        assert!(details.one_question_at_a_time);
        assert!(!details.shuffle_answers);
        assert_eq!(details.access_code, None);
        assert_eq!(details.total_points, 0.0);
    }

    #[test]
    fn time_limit_display() {
        let unlimited = Quiz {
            has_time_limit: Some(false),
            time_limit: Some(45),
            ..Quiz::new("q1", "A")
        };
        assert_eq!(
            QuizDetails::from(&unlimited).time_limit.to_string(),
            "No Time Limit"
        );

        let limited = Quiz {
            has_time_limit: Some(true),
            time_limit: Some(45),
            ..Quiz::new("q2", "B")
        };
        assert_eq!(
            QuizDetails::from(&limited).time_limit.to_string(),
            "45 Minutes"
        );

        let absent = Quiz::new("q3", "C");
        assert_eq!(
            QuizDetails::from(&absent).time_limit.to_string(),
            "20 Minutes"
        );

        let zero = Quiz {
            time_limit: Some(0),
            ..Quiz::new("q4", "D")
        };
        assert_eq!(QuizDetails::from(&zero).time_limit, TimeLimit::Minutes(20));
    }

    #[test]
    fn one_question_at_a_time_only_off_when_explicitly_false() {
        let off = Quiz {
            one_question_at_a_time: Some(false),
            ..Quiz::new("q1", "A")
        };
        assert!(!QuizDetails::from(&off).one_question_at_a_time);

        let on = Quiz {
            one_question_at_a_time: Some(true),
            ..Quiz::new("q2", "B")
        };
        assert!(QuizDetails::from(&on).one_question_at_a_time);
    }

    #[test]
    fn empty_strings_fall_back_to_defaults() {
        let quiz = Quiz {
            quiz_type: Some(String::new()),
            assignment_group: Some(String::new()),
            access_code: Some(String::new()),
            description: Some(String::new()),
            ..Quiz::new("q1", "A")
        };

        let details = QuizDetails::from(&quiz);

        assert_eq!(details.quiz_type, "Graded Quiz");
        assert_eq!(details.assignment_group, "Quizzes");
        assert_eq!(details.access_code, None);
        assert_eq!(details.description, None);
    }

    #[test]
    fn whitespace_strings_count_as_set() {
        let quiz = Quiz {
            assignment_group: Some("  ".to_string()),
            access_code: Some(" ".to_string()),
            ..Quiz::new("q1", "A")
        };

        let details = QuizDetails::from(&quiz);

        assert_eq!(details.assignment_group, "  ");
        assert_eq!(details.access_code.as_deref(), Some(" "));
    }

    #[test]
    fn date_inputs_back_fill_missing_dates() {
        let quiz = Quiz {
            due_date: Some("2024-05-13T23:59".to_string()),
            due_date_input: Some("ignored".to_string()),
            available_date_input: Some("2024-05-06".to_string()),
            ..Quiz::new("q1", "A")
        };

        let rows = QuizDetails::from(&quiz).attribute_rows();

        assert_eq!(row(&rows, "Due Date"), Some("2024-05-13T23:59"));
        assert_eq!(row(&rows, "Available Date"), Some("2024-05-06"));
        assert_eq!(row(&rows, "Until Date"), Some("Not set"));
    }

    #[test]
    fn attempts_row_only_with_multiple_attempts() {
        let single = QuizDetails::from(&Quiz::new("q1", "A")).attribute_rows();
        assert_eq!(row(&single, "Multiple Attempts"), Some("No"));
        assert_eq!(row(&single, "How Many Attempts"), None);
        assert_eq!(single.len(), 16);

        let multiple = Quiz {
            multiple_attempts: Some(true),
            attempts_allowed: Some(3),
            ..Quiz::new("q2", "B")
        };
        let rows = QuizDetails::from(&multiple).attribute_rows();
        assert_eq!(row(&rows, "Multiple Attempts"), Some("Yes"));
        assert_eq!(row(&rows, "How Many Attempts"), Some("3"));
        assert_eq!(rows.len(), 17);
    }

    #[test]
    fn rows_use_question_totals() {
        let quiz = Quiz {
            points: Some(50.0),
            published: true,
            questions: Some(vec![
                QuizQuestion {
                    points: Some(10.0),
                    ..Default::default()
                },
                QuizQuestion {
                    points: Some(2.5),
                    ..Default::default()
                },
            ]),
            ..Quiz::new("q1", "A")
        };

        let rows = QuizDetails::from(&quiz).attribute_rows();

        assert_eq!(rows[0], ("Quiz Type", "Graded Quiz".to_string()));
        assert_eq!(row(&rows, "Points"), Some("12.5"));
        assert_eq!(row(&rows, "Number of Questions"), Some("2"));
        assert_eq!(row(&rows, "Published"), Some("Yes"));
        assert_eq!(rows.last().map(|(l, _)| *l), Some("Published"));
    }

    #[test]
    fn format_points_drops_trailing_zero() {
        assert_eq!(format_points(10.0), "10");
        assert_eq!(format_points(0.0), "0");
        assert_eq!(format_points(7.25), "7.25");
    }
}
