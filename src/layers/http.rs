use std::time::Duration;

use axum::{
    Router,
    body::Body,
    extract::Request,
    http::{HeaderValue, Method, Response, header},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    sensitive_headers::SetSensitiveRequestHeadersLayer,
    trace::TraceLayer,
};
use tracing::{Span, info};

use crate::{
    config::CorsSettings,
    headers::{HEADER_REQUEST_ID, SENSITIVE_HEADERS},
    utils::{format_headers, get_header, get_request_id},
};

pub fn cors_layer(settings: &CorsSettings) -> anyhow::Result<CorsLayer> {
    let origins = if settings.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let values = settings
            .allowed_origins
            .iter()
            .map(|o| HeaderValue::from_str(o))
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(values)
    };

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Wraps a router with request ids, request/response logging, header
/// redaction and CORS.
pub fn with_http_layers(router: Router, cors: &CorsSettings) -> anyhow::Result<Router> {
    let router = router
        .layer(cors_layer(cors)?)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .on_request(|req: &Request<Body>, _span: &Span| {
                    info!(
                        msg = "Request initiated",
                        req_id = %get_request_id(req.extensions()),
                        method = %req.method(),
                        uri = %req.uri(),
                        headers = %format_headers(req.headers())
                    )
                })
                .on_response(|res: &Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        msg = "Request processed",
                        req_id = %get_header(res.headers(), &HEADER_REQUEST_ID),
                        status = %res.status().as_u16(),
                        latency = ?latency
                    )
                }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid::default()))
        .layer(SetSensitiveRequestHeadersLayer::new(SENSITIVE_HEADERS));

    Ok(router)
}
