pub mod html;
pub mod quiz_details_view;
pub mod render;

pub use quiz_details_view::{ActionOutcome, PublishOutcome, QuizDetailsView};
pub use render::{Button, ButtonVariant, EditorView, RenderedView, StudentView, ViewAction};
