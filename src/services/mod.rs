pub mod http_helpers;
pub mod quiz_service;

pub use quiz_service::QuizService;
