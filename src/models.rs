use serde::{Deserialize, Serialize};

pub const STATUS_RECEIVED: &str = "received";

/// Acknowledgement returned for every accepted payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub status: String,
}

impl EvaluateResponse {
    pub fn received() -> Self {
        Self {
            status: STATUS_RECEIVED.to_string(),
        }
    }
}
