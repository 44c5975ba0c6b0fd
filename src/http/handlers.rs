//! Bid request handlers.

use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

use crate::http::request::X_REQUEST_ID;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Request schema for `/add`.
///
/// The handler does not consume the body; this type documents the wire
/// schema for clients and is exercised by the integration tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddRequest {
    /// Placement the caller wants a bid for.
    #[serde(rename = "addPlacementID")]
    pub add_placement_id: Uuid,
}

/// Response schema for `/add`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddResponse {
    /// Identifier of the generated bid.
    #[serde(rename = "addID")]
    pub add_id: Uuid,

    /// Offered price for the placement.
    #[serde(rename = "bidPrice")]
    pub bid_price: f64,
}

/// Handle a bid request.
///
/// A fresh placement id is generated here rather than read from the
/// request body; the body is ignored entirely, so any payload (including
/// none) is accepted.
pub async fn add_bid(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
) -> Response {
    let start = Instant::now();
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let placement = Uuid::new_v4();

    tracing::debug!(
        request_id = %request_id,
        placement = %placement,
        "Handling bid request"
    );

    match state.service.bid(placement) {
        Ok(bid) => {
            metrics::record_request(method.as_str(), StatusCode::OK.as_u16(), start);
            (
                StatusCode::OK,
                Json(AddResponse {
                    add_id: bid.id,
                    bid_price: bid.price,
                }),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(
                request_id = %request_id,
                error = %err,
                "Bid service returned an error"
            );
            metrics::record_request(method.as_str(), StatusCode::NO_CONTENT.as_u16(), start);
            StatusCode::NO_CONTENT.into_response()
        }
    }
}

/// Liveness probe.
pub async fn health() -> Response {
    (StatusCode::OK, "OK").into_response()
}
