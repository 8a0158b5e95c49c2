use super::types::{ErrorResponse, PromptRequest};
use crate::{Error, bedrock::ConverseResponse, invoker::Invoker};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub invoker: Arc<Invoker>,
}

pub async fn converse(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ConverseResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request = match PromptRequest::parse(&body) {
        Ok(request) => request,
        Err(e) => {
            info!("Rejected request body: {}", e);
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid JSON".to_string(),
                }),
            ));
        }
    };

    info!("Received prompt for session: {}", request.session_id);

    match state
        .invoker
        .invoke(&request.input_text, &request.session_id)
        .await
    {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!(
                "Failed to process prompt for session {}: {}",
                request.session_id, e
            );
            Err((
                status_for(&e),
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::CredentialUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        Error::InferenceFailure(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
