use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A question attached to a quiz. Only `points` is interpreted here; every
/// other field is carried through untouched.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct QuizQuestion {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::models::domain::lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub points: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QuizQuestion {
    pub fn points_or_zero(&self) -> f64 {
        self.points.filter(|p| p.is_finite()).unwrap_or(0.0)
    }
}
