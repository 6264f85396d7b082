use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

use super::{PayloadSink, payload_kind};

const HEADER: &str = "=== RECEIVED JSON ===";
const FOOTER: &str = "=====================";

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Writes a banner-framed, pretty-printed rendering of each payload.
///
/// The whole block is written under one lock so that concurrent requests
/// never interleave their output.
#[derive(Clone)]
pub struct WriterSink(SharedWriter);

impl WriterSink {
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self(Arc::new(Mutex::new(Box::new(writer))))
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

pub fn render(payload: &Value) -> anyhow::Result<String> {
    let body = serde_json::to_string_pretty(payload)?;
    Ok(format!("{HEADER}\n{body}\n{FOOTER}\n"))
}

#[async_trait]
impl PayloadSink for WriterSink {
    #[instrument(name = "writer_sink.record", skip_all, fields(kind = payload_kind(payload)))]
    async fn record(&self, payload: &Value) -> anyhow::Result<()> {
        let rendered = render(payload)?;

        let mut writer = self
            .0
            .lock()
            .map_err(|_| anyhow::anyhow!("diagnostic writer lock poisoned"))?;
        writer.write_all(rendered.as_bytes())?;
        writer.flush()?;

        Ok(())
    }
}
