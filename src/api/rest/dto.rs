//! # Wire Types
//!
//! JSON request and response bodies, using the field names the browser
//! client already speaks.
//!
//! Monetary amounts and weights are emitted as JSON numbers.

use crate::application::{LabeledShipment, ServiceOffering, ShipmentInput};
use crate::domain::entities::{LabelSubject, PromotionComparison, Quote, Shipment};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Weight as sent by the client: usually a number, sometimes a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WeightField {
    /// JSON number.
    Number(serde_json::Number),
    /// Numeric text, e.g. from a form field sent verbatim.
    Text(String),
}

impl WeightField {
    fn into_text(self) -> String {
        match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text,
        }
    }
}

/// Request body shared by the calculate, label and promotion endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ShipmentRequest {
    /// Consignee name.
    pub destinatario: Option<String>,
    /// Delivery address.
    pub endereco: Option<String>,
    /// Weight in kilograms.
    pub peso: Option<WeightField>,
    /// Service type code.
    pub tipo_frete: Option<String>,
}

impl From<ShipmentRequest> for ShipmentInput {
    fn from(request: ShipmentRequest) -> Self {
        Self {
            recipient: request.destinatario,
            address: request.endereco,
            weight: request.peso.map(WeightField::into_text),
            service_type: request.tipo_frete,
        }
    }
}

/// A validated shipment echoed back to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentData {
    /// Consignee name.
    pub destinatario: String,
    /// Delivery address.
    pub endereco: String,
    /// Weight in kilograms.
    #[serde(with = "rust_decimal::serde::float")]
    pub peso: Decimal,
    /// Service type code.
    pub tipo_frete: String,
}

impl From<&Shipment> for ShipmentData {
    fn from(shipment: &Shipment) -> Self {
        Self {
            destinatario: shipment.recipient().to_string(),
            endereco: shipment.address().to_string(),
            peso: shipment.weight().kg(),
            tipo_frete: shipment.service_type().code().to_string(),
        }
    }
}

impl From<&LabelSubject> for ShipmentData {
    fn from(subject: &LabelSubject) -> Self {
        Self {
            destinatario: subject.recipient().to_string(),
            endereco: subject.address().to_string(),
            peso: subject.weight().kg(),
            tipo_frete: subject.service_code().to_string(),
        }
    }
}

/// Response of `POST /api/calcular-frete`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculateResponse {
    /// The validated shipment.
    pub entrega: ShipmentData,
    /// Freight price.
    #[serde(with = "rust_decimal::serde::float")]
    pub valor_frete: Decimal,
}

impl From<&Quote> for CalculateResponse {
    fn from(quote: &Quote) -> Self {
        Self {
            entrega: quote.shipment().into(),
            valor_frete: quote.price().get(),
        }
    }
}

/// Response of `POST /api/gerar-etiqueta`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelResponse {
    /// The validated shipment; `tipo_frete` echoes an unknown code as given.
    pub entrega: ShipmentData,
    /// Multi-line label text.
    pub etiqueta: String,
    /// One-line order summary.
    pub resumo: String,
}

impl From<LabeledShipment> for LabelResponse {
    fn from(labeled: LabeledShipment) -> Self {
        Self {
            entrega: (&labeled.subject).into(),
            etiqueta: labeled.label.label_text,
            resumo: labeled.label.summary_text,
        }
    }
}

/// A shipment with its price, as nested in the promotion response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedShipment {
    /// The shipment as priced.
    pub dados: ShipmentData,
    /// Freight price.
    #[serde(with = "rust_decimal::serde::float")]
    pub valor_frete: Decimal,
}

impl From<&Quote> for PricedShipment {
    fn from(quote: &Quote) -> Self {
        Self {
            dados: quote.shipment().into(),
            valor_frete: quote.price().get(),
        }
    }
}

/// Response of `POST /api/aplicar-promocoes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromotionResponse {
    /// Whether a promotion applied.
    pub promocao_aplicada: bool,
    /// The regular quote.
    pub entrega_original: PricedShipment,
    /// The promotional quote; omitted when no promotion applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrega_promocional: Option<PricedShipment>,
    /// Savings; zero when no promotion applied.
    #[serde(with = "rust_decimal::serde::float")]
    pub economia: Decimal,
}

impl From<&PromotionComparison> for PromotionResponse {
    fn from(comparison: &PromotionComparison) -> Self {
        Self {
            promocao_aplicada: comparison.applied(),
            entrega_original: comparison.original().into(),
            entrega_promocional: comparison.promotional().map(PricedShipment::from),
            economia: comparison.savings().get(),
        }
    }
}

/// One service tier in `GET /api/tipos-frete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceTypeEntry {
    /// Wire code.
    pub codigo: String,
    /// Display name.
    pub nome: String,
    /// Pricing formula.
    pub descricao: String,
}

impl From<&ServiceOffering> for ServiceTypeEntry {
    fn from(offering: &ServiceOffering) -> Self {
        Self {
            codigo: offering.service_type.code().to_string(),
            nome: offering.service_type.display_name().to_string(),
            descricao: offering.description.clone(),
        }
    }
}

/// Response of `GET /api/tipos-frete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceTypesResponse {
    /// Every service tier.
    pub tipos: Vec<ServiceTypeEntry>,
}

/// Response of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// Always `OK` while the process serves requests.
    pub status: String,
    /// Human-readable status line.
    pub message: String,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// What went wrong.
    pub error: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Money, ServiceType, Weight};
    use serde_json::json;

    fn quote(kg: i64, price: i64) -> Quote {
        let shipment = Shipment::new(
            "Ana",
            "Rua A, 123",
            Weight::new(Decimal::new(kg, 0)).unwrap(),
            ServiceType::Standard,
        )
        .unwrap();
        Quote::new(shipment, Money::from_decimal(Decimal::new(price, 0)).unwrap())
    }

    #[test]
    fn request_accepts_numeric_and_text_weight() {
        let numeric: ShipmentRequest = serde_json::from_value(json!({
            "destinatario": "Ana",
            "endereco": "Rua A",
            "peso": 12.5,
            "tipo_frete": "PAD"
        }))
        .unwrap();
        let input: ShipmentInput = numeric.into();
        assert_eq!(input.weight.as_deref(), Some("12.5"));

        let text: ShipmentRequest = serde_json::from_value(json!({ "peso": "7" })).unwrap();
        let input: ShipmentInput = text.into();
        assert_eq!(input.weight.as_deref(), Some("7"));
        assert!(input.recipient.is_none());
    }

    #[test]
    fn null_weight_is_missing() {
        let request: ShipmentRequest = serde_json::from_value(json!({ "peso": null })).unwrap();
        assert!(request.peso.is_none());
    }

    #[test]
    fn calculate_response_shape() {
        let body = serde_json::to_value(CalculateResponse::from(&quote(12, 34))).unwrap();
        assert_eq!(body["entrega"]["destinatario"], "Ana");
        assert_eq!(body["entrega"]["tipo_frete"], "PAD");
        assert_eq!(body["entrega"]["peso"].as_f64(), Some(12.0));
        assert_eq!(body["valor_frete"].as_f64(), Some(34.0));
    }

    #[test]
    fn promotion_response_omits_absent_promotional_quote() {
        let comparison = PromotionComparison::not_applied(quote(5, 20));
        let body = serde_json::to_value(PromotionResponse::from(&comparison)).unwrap();
        assert_eq!(body["promocao_aplicada"], false);
        assert!(body.get("entrega_promocional").is_none());
        assert_eq!(body["economia"].as_f64(), Some(0.0));
        assert_eq!(body["entrega_original"]["valor_frete"].as_f64(), Some(20.0));
    }

    #[test]
    fn promotion_response_with_promotional_quote() {
        let comparison = PromotionComparison::applied_with(quote(12, 34), quote(11, 32)).unwrap();
        let body = serde_json::to_value(PromotionResponse::from(&comparison)).unwrap();
        assert_eq!(body["promocao_aplicada"], true);
        assert_eq!(body["entrega_promocional"]["dados"]["peso"].as_f64(), Some(11.0));
        assert_eq!(body["economia"].as_f64(), Some(2.0));
    }
}
