use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

use crate::error::BfhlError;
use crate::models::{Envelope, Operation, OperationOutput};
use crate::services;
use crate::startup::AppState;

/// `POST /bfhl`: validate the single-key body, run the operation, wrap the
/// outcome in an envelope.
#[tracing::instrument(skip(state, body))]
pub async fn bfhl(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let email = &state.config.identity.official_email;

    match process(&state, body).await {
        Ok(data) => (StatusCode::OK, Json(Envelope::success(email, data))).into_response(),
        Err(err) => {
            let status = err.status_code();
            if status.is_server_error() {
                tracing::error!(error = %err, "bfhl request failed");
            } else {
                tracing::warn!(error = %err, "bfhl request rejected");
            }
            (status, Json(Envelope::<()>::failure(email, err.to_string()))).into_response()
        }
    }
}

async fn process(
    state: &AppState,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<OperationOutput, BfhlError> {
    // Without a JSON content type no body is read at all, so the request
    // carries zero keys.
    let body = match body {
        Ok(Json(body)) => body,
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Object(Map::new()),
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
            return Err(BfhlError::MalformedBody);
        }
    };

    let operation = Operation::from_body(body)?;
    tracing::info!(key = operation.key(), "Dispatching operation");

    services::execute(operation, state.text_provider.as_ref()).await
}
