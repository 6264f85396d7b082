use axum::http::{HeaderName, header};

pub const HEADER_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Request headers whose values are replaced by `******` in request logs.
pub const SENSITIVE_HEADERS: [HeaderName; 3] = [
    header::AUTHORIZATION,
    header::COOKIE,
    header::PROXY_AUTHORIZATION,
];
