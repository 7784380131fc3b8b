//! # REST API
//!
//! axum adapter exposing the quote operations to the browser client.
//!
//! # Endpoints
//!
//! - `POST /api/calcular-frete` - Price a shipment
//! - `POST /api/gerar-etiqueta` - Price a shipment and render its label
//! - `POST /api/aplicar-promocoes` - Compare regular and promotional prices
//! - `GET /api/tipos-frete` - List service tiers and their formulas
//! - `GET /api/health` - Health check
//!
//! # Usage
//!
//! ```ignore
//! use freight_quote::api::rest::{create_router, AppState};
//! use freight_quote::infrastructure::AppConfig;
//!
//! let service = AppConfig::default().build_quote_service()?;
//! let router = create_router(AppState::new(service));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{
    CalculateResponse, ErrorResponse, HealthResponse, LabelResponse, PricedShipment,
    PromotionResponse, ServiceTypeEntry, ServiceTypesResponse, ShipmentData, ShipmentRequest,
};
pub use handlers::{ApiError, AppState};
pub use routes::create_router;
