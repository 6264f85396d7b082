use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;

use crate::config::SinkKind;

pub mod trace;
pub mod writer;

pub use trace::TracingSink;
pub use writer::WriterSink;

/// Diagnostic output for received payloads.
///
/// Nothing downstream depends on what a sink produces; it only has to make the
/// payload observable to whoever runs the server.
#[async_trait]
#[automock]
pub trait PayloadSink: Send + Sync {
    /// Record a received payload
    async fn record(&self, payload: &Value) -> anyhow::Result<()>;
}

pub type PayloadSinkRef = std::sync::Arc<dyn PayloadSink + Send + Sync>;

pub fn from_kind(kind: SinkKind) -> PayloadSinkRef {
    match kind {
        SinkKind::Console => std::sync::Arc::new(WriterSink::stdout()),
        SinkKind::Tracing => std::sync::Arc::new(TracingSink),
    }
}

pub fn payload_kind(payload: &Value) -> &'static str {
    match payload {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
