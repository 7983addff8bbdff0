use crate::utils::{round_float, round_optional_float};
use serde::{Deserialize, Serialize};

/// Descriptive statistics of one variable for one `(protocol, size)` group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub protocol: String,
    pub size: u64,
    pub variable: String,
    #[serde(serialize_with = "round_float")]
    pub mean: f64,
    /// Sample standard deviation, undefined below two observations.
    #[serde(serialize_with = "round_optional_float")]
    pub std: Option<f64>,
    #[serde(rename = "IQR", serialize_with = "round_float")]
    pub iqr: f64,
    #[serde(serialize_with = "round_float")]
    pub min: f64,
    #[serde(serialize_with = "round_float")]
    pub max: f64,
    pub count: usize,
}
