use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use super::{PayloadSink, payload_kind};

/// Emits each payload as a single `info` event.
pub struct TracingSink;

#[async_trait]
impl PayloadSink for TracingSink {
    async fn record(&self, payload: &Value) -> anyhow::Result<()> {
        info!(
            msg = "Received payload",
            kind = payload_kind(payload),
            payload = %payload
        );

        Ok(())
    }
}
