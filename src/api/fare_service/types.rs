use serde::{Deserialize, Serialize};

use crate::model::FareResult;

#[derive(Serialize, Deserialize, Debug)]
pub struct PredictResponse {
    #[serde(default)]
    pub fare: f64,
}

impl From<PredictResponse> for FareResult {
    fn from(r: PredictResponse) -> Self {
        FareResult { fare: r.fare }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("API error (code: {status})")]
    Api { status: u16 },

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("unreadable prediction: {0}")]
    Decode(#[from] serde_json::Error),
}
