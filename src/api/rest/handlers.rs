//! # REST Handlers
//!
//! Thin adapters between HTTP and the [`QuoteService`].
//!
//! Handlers own no state beyond the shared, read-only service. They decode
//! the body, call one facade operation, and map the outcome:
//!
//! | Outcome                          | Status |
//! |----------------------------------|--------|
//! | success                          | 200    |
//! | malformed JSON / validation      | 400    |
//! | configuration / internal failure | 500    |

use crate::api::rest::dto::{
    CalculateResponse, ErrorResponse, HealthResponse, LabelResponse, PromotionResponse,
    ServiceTypeEntry, ServiceTypesResponse, ShipmentRequest,
};
use crate::application::{ApplicationError, QuoteService, ShipmentInput};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

/// Message returned for failures the caller cannot fix.
const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Shared state for all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The quote facade, built once at startup.
    pub quote_service: QuoteService,
}

impl AppState {
    /// Wraps a quote service for sharing across handlers.
    #[must_use]
    pub fn new(quote_service: QuoteService) -> Arc<Self> {
        Arc::new(Self { quote_service })
    }
}

/// Error returned by handlers, rendered as `{ "error": ... }`.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be decoded.
    BadRequest(String),
    /// The facade rejected or failed the request.
    Application(ApplicationError),
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        Self::Application(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Application(ApplicationError::Validation(message)) => {
                (StatusCode::BAD_REQUEST, message)
            }
            Self::Application(err) => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

fn decode(payload: Result<Json<ShipmentRequest>, JsonRejection>) -> Result<ShipmentInput, ApiError> {
    let Json(request) = payload?;
    Ok(request.into())
}

/// `POST /api/calcular-frete`
///
/// # Errors
///
/// Returns 400 for malformed or invalid input.
pub async fn calculate_freight(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ShipmentRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let input = decode(payload)?;
    let quote = state.quote_service.calculate(&input)?;
    Ok(Json(CalculateResponse::from(&quote)))
}

/// `POST /api/gerar-etiqueta`
///
/// # Errors
///
/// Returns 400 for malformed or invalid input.
pub async fn generate_label(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ShipmentRequest>, JsonRejection>,
) -> Result<Json<LabelResponse>, ApiError> {
    let input = decode(payload)?;
    let labeled = state.quote_service.label(&input)?;
    Ok(Json(LabelResponse::from(labeled)))
}

/// `POST /api/aplicar-promocoes`
///
/// # Errors
///
/// Returns 400 for malformed or invalid input.
pub async fn compare_promotions(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ShipmentRequest>, JsonRejection>,
) -> Result<Json<PromotionResponse>, ApiError> {
    let input = decode(payload)?;
    let comparison = state.quote_service.compare_promotions(&input)?;
    Ok(Json(PromotionResponse::from(&comparison)))
}

/// `GET /api/tipos-frete`
pub async fn list_service_types(State(state): State<Arc<AppState>>) -> Json<ServiceTypesResponse> {
    let tipos = state
        .quote_service
        .service_catalog()
        .iter()
        .map(ServiceTypeEntry::from)
        .collect();
    Json(ServiceTypesResponse { tipos })
}

/// `GET /api/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "freight quote service running".to_string(),
    })
}
