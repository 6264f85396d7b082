use axum::{Extension, middleware::AddExtension};
use tower::Layer;

use crate::{
    config::SinkKind,
    sinks::{self, PayloadSinkRef},
};

#[derive(Clone)]
pub struct PayloadSinkLayer(pub PayloadSinkRef);

impl PayloadSinkLayer {
    pub fn from_kind(kind: SinkKind) -> Self {
        Self(sinks::from_kind(kind))
    }
}

impl<S> Layer<S> for PayloadSinkLayer {
    type Service = AddExtension<S, PayloadSinkRef>;

    fn layer(&self, inner: S) -> Self::Service {
        Extension(self.0.clone()).layer(inner)
    }
}
