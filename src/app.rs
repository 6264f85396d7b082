use axum::{Router, extract::DefaultBodyLimit, routing::post};

use crate::handlers::evaluate_handler;

pub struct App {
    body_limit: Option<usize>,
}

impl App {
    pub fn new() -> Self {
        Self { body_limit: None }
    }

    /// Caps request bodies at `bytes`; `None` accepts any size.
    pub fn with_body_limit(mut self, bytes: Option<usize>) -> Self {
        self.body_limit = bytes;
        self
    }

    /// Routes only. The payload sink and HTTP middleware are attached by the
    /// caller as layers.
    pub fn router(self) -> Router {
        Router::new()
            .route("/evaluate", post(evaluate_handler))
            .layer(match self.body_limit {
                Some(bytes) => DefaultBodyLimit::max(bytes),
                None => DefaultBodyLimit::disable(),
            })
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
