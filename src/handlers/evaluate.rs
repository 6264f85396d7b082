use axum::{
    Extension, Json,
    http::{Extensions, StatusCode},
};
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::{
    models::EvaluateResponse,
    sinks::{PayloadSinkRef, payload_kind},
    utils::get_request_id,
};

#[instrument(name = "handlers.evaluate", skip_all)]
pub async fn evaluate_handler(
    Extension(sink): Extension<PayloadSinkRef>,
    extensions: Extensions,
    Json(payload): Json<Value>,
) -> Result<Json<EvaluateResponse>, (StatusCode, &'static str)> {
    let req_id = get_request_id(&extensions);

    sink.record(&payload).await.map_err(|e| {
        error!(
            msg = "Failed to record payload",
            %req_id,
            error = %e
        );
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to record payload")
    })?;

    info!(
        msg = "Payload received",
        %req_id,
        kind = payload_kind(&payload)
    );

    Ok(Json(EvaluateResponse::received()))
}
