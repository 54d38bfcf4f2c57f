use std::fmt;

use serde::Serialize;

use crate::models::view::quiz_details::format_points;
use crate::views::html::html_to_text;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Success,
    Warning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewAction {
    TogglePublish,
    Preview,
    Edit,
    StartQuiz,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Button {
    pub label: &'static str,
    pub variant: ButtonVariant,
    pub action: ViewAction,
}

impl Button {
    pub fn publish_toggle(published: bool) -> Self {
        if published {
            Button {
                label: "Unpublish",
                variant: ButtonVariant::Warning,
                action: ViewAction::TogglePublish,
            }
        } else {
            Button {
                label: "Publish",
                variant: ButtonVariant::Success,
                action: ViewAction::TogglePublish,
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StudentView {
    pub title: String,
    pub total_points: f64,
    pub question_count: usize,
    pub description_html: Option<String>,
    pub start: Button,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EditorView {
    pub title: String,
    /// False when the viewer fell into this branch without an editing role;
    /// the buttons are still shown but publishing is refused.
    pub can_edit: bool,
    pub buttons: Vec<Button>,
    pub rows: Vec<(&'static str, String)>,
    pub description_html: Option<String>,
}

/// What the quiz details page shows for the current state.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RenderedView {
    Loading,
    NotFound,
    Student(StudentView),
    Editor(EditorView),
}

impl RenderedView {
    /// Every action the rendered page offers.
    pub fn actions(&self) -> Vec<ViewAction> {
        match self {
            RenderedView::Loading | RenderedView::NotFound => Vec::new(),
            RenderedView::Student(view) => vec![view.start.action],
            RenderedView::Editor(view) => view.buttons.iter().map(|b| b.action).collect(),
        }
    }
}

impl fmt::Display for RenderedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedView::Loading => writeln!(f, "Loading..."),
            RenderedView::NotFound => writeln!(f, "Quiz not found"),
            RenderedView::Student(view) => {
                writeln!(f, "{}", view.title)?;
                writeln!(f, "Points: {}", format_points(view.total_points))?;
                writeln!(f, "Questions: {}", view.question_count)?;
                if let Some(description) = &view.description_html {
                    writeln!(f, "Description:")?;
                    writeln!(f, "{}", html_to_text(description))?;
                }
                writeln!(f, "[{}]", view.start.label)
            }
            RenderedView::Editor(view) => {
                let buttons: Vec<String> =
                    view.buttons.iter().map(|b| format!("[{}]", b.label)).collect();
                writeln!(f, "{}    {}", view.title, buttons.join(" "))?;

                let width = view.rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
                for (label, value) in &view.rows {
                    writeln!(f, "  {:<width$}  {}", label, value, width = width)?;
                }

                if let Some(description) = &view.description_html {
                    writeln!(f, "Description")?;
                    writeln!(f, "{}", html_to_text(description))?;
                }
                Ok(())
            }
        }
    }
}
