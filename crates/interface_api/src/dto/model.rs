//! Model DTOs

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ModelResponse {
    pub feature_names: Vec<String>,
    pub categorical_columns: Vec<String>,
    pub approval_threshold: f64,
    pub source: String,
}
