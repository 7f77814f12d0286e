//! Used-vehicle price prediction returned by the pricing model service.

use serde::{Deserialize, Serialize};

/// Field names follow the upstream pricing payload verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PredictionResponse {
    pub prediction_price: i64,
    pub average_price: f64,
    pub median_price: i64,
    pub max_price: i64,
    pub min_price: i64,
}
