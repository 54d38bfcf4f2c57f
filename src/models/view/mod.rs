pub mod quiz_details;
pub use quiz_details::{Attempts, QuizDetails, TimeLimit};
