use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::upstream::PredictionService;

/// Static payload for the health/greeting route.
pub const GREETING_MESSAGE: &str = "Hello from Hieu!";

/// Plain-text body returned when the upstream call fails. The detail stays
/// in the server log.
pub const FAILURE_MESSAGE: &str = "Something went wrong!";

type SharedService = Arc<dyn PredictionService>;

#[derive(Debug, Deserialize)]
struct PromptRequest {
    prompt: Option<String>,
}

/// Both operations live on `/`: GET greets, POST relays. The widget is
/// served from another origin, so CORS stays permissive.
pub fn router(service: SharedService) -> Router {
    Router::new()
        .route("/", get(greeting).post(relay))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

async fn greeting() -> Json<serde_json::Value> {
    Json(json!({ "message": GREETING_MESSAGE }))
}

async fn relay(
    State(service): State<SharedService>,
    body: Option<Json<PromptRequest>>,
) -> Response {
    // No request validation: an unreadable body or missing field is
    // forwarded as an absent prompt.
    let prompt = body.and_then(|Json(request)| request.prompt);

    match service.predict(prompt.as_deref()).await {
        Ok(bot) => (StatusCode::OK, Json(json!({ "bot": bot }))).into_response(),
        Err(err) => {
            log::error!("upstream prediction failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, FAILURE_MESSAGE).into_response()
        }
    }
}
