pub mod navigator;
pub mod routes;

pub use navigator::{HistoryNavigator, Navigator};
pub use routes::{QuizPage, Route, RouteParams};
