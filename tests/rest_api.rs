//! End-to-end tests driving the axum router in-process.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use freight_quote::api::rest::{AppState, create_router};
use freight_quote::infrastructure::AppConfig;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Tariff fixture: Standard is 10 + 2/kg, promotion halves the tariff above 10 kg.
const FIXTURE: &str = r#"
[tariff.express]
base_fee = 20
per_kg_rate = 3

[tariff.standard]
base_fee = 10
per_kg_rate = 2

[tariff.economy]
base_fee = 5
per_kg_rate = 1

[promotion.discount]
kind = "percentage"
percent = 50
"#;

fn app() -> Router {
    let service = AppConfig::from_toml_str(FIXTURE)
        .unwrap()
        .build_quote_service()
        .unwrap();
    create_router(AppState::new(service))
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn shipment(peso: Value, tipo_frete: &str) -> Value {
    json!({
        "destinatario": "Ana",
        "endereco": "Rua A, 123",
        "peso": peso,
        "tipo_frete": tipo_frete,
    })
}

mod calculate {
    use super::*;

    #[tokio::test]
    async fn prices_shipment() {
        let (status, body) = post(app(), "/api/calcular-frete", shipment(json!(12), "PAD")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valor_frete"].as_f64(), Some(34.0));
        assert_eq!(body["entrega"]["destinatario"], "Ana");
        assert_eq!(body["entrega"]["endereco"], "Rua A, 123");
        assert_eq!(body["entrega"]["peso"].as_f64(), Some(12.0));
        assert_eq!(body["entrega"]["tipo_frete"], "PAD");
    }

    #[tokio::test]
    async fn zero_weight_rejected() {
        let (status, body) = post(app(), "/api/calcular-frete", shipment(json!(0), "PAD")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("weight"));
    }

    #[tokio::test]
    async fn unknown_service_type_rejected() {
        let (status, body) = post(app(), "/api/calcular-frete", shipment(json!(3), "XYZ")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("XYZ"));
    }

    #[tokio::test]
    async fn missing_field_rejected() {
        let body = json!({ "destinatario": "Ana", "peso": 1, "tipo_frete": "ECO" });
        let (status, body) = post(app(), "/api/calcular-frete", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("address"));
    }

    #[tokio::test]
    async fn malformed_json_rejected_with_error_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/calcular-frete")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn overweight_rejected_before_pricing() {
        let body = shipment(json!("60000000000000000000000000000"), "EXP");
        let (status, body) = post(app(), "/api/calcular-frete", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("must not exceed"));
    }

    #[tokio::test]
    async fn identical_requests_identical_bodies() {
        let (_, first) = post(app(), "/api/calcular-frete", shipment(json!(7.25), "EXP")).await;
        let (_, second) = post(app(), "/api/calcular-frete", shipment(json!(7.25), "EXP")).await;
        assert_eq!(first.to_string(), second.to_string());
    }
}

mod label {
    use super::*;

    #[tokio::test]
    async fn renders_label() {
        let (status, body) = post(app(), "/api/gerar-etiqueta", shipment(json!(12), "PAD")).await;
        assert_eq!(status, StatusCode::OK);
        let etiqueta = body["etiqueta"].as_str().unwrap();
        assert!(etiqueta.contains("Destinatário: Ana"));
        assert!(etiqueta.contains("Endereço: Rua A, 123"));
        assert!(etiqueta.contains("Serviço: Padrão"));
        assert!(etiqueta.contains("R$34.00"));
        assert!(body["resumo"].as_str().unwrap().starts_with("Pedido para Ana"));
        assert_eq!(body["entrega"]["tipo_frete"], "PAD");
    }

    #[tokio::test]
    async fn unknown_service_type_shows_raw_code() {
        let (status, body) = post(app(), "/api/gerar-etiqueta", shipment(json!(2), "XYZ")).await;
        assert_eq!(status, StatusCode::OK);
        let etiqueta = body["etiqueta"].as_str().unwrap();
        assert!(etiqueta.contains("Serviço: XYZ"));
        assert!(etiqueta.contains("Valor do Frete: a consultar"));
        assert!(body["resumo"].as_str().unwrap().contains("XYZ"));
        assert_eq!(body["entrega"]["tipo_frete"], "XYZ");
    }

    #[tokio::test]
    async fn identical_requests_identical_bodies() {
        let (_, first) = post(app(), "/api/gerar-etiqueta", shipment(json!(3.5), "ECO")).await;
        let (_, second) = post(app(), "/api/gerar-etiqueta", shipment(json!(3.5), "ECO")).await;
        assert_eq!(first.to_string(), second.to_string());
    }

    #[tokio::test]
    async fn negative_weight_rejected() {
        let (status, _) = post(app(), "/api/gerar-etiqueta", shipment(json!(-1), "ECO")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

mod promotions {
    use super::*;

    #[tokio::test]
    async fn applies_above_threshold() {
        let (status, body) =
            post(app(), "/api/aplicar-promocoes", shipment(json!(12), "PAD")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["promocao_aplicada"], true);
        assert_eq!(body["entrega_original"]["valor_frete"].as_f64(), Some(34.0));
        assert_eq!(body["entrega_promocional"]["valor_frete"].as_f64(), Some(17.0));
        assert_eq!(body["economia"].as_f64(), Some(17.0));
    }

    #[tokio::test]
    async fn not_applied_below_threshold() {
        let (status, body) = post(app(), "/api/aplicar-promocoes", shipment(json!(5), "PAD")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["promocao_aplicada"], false);
        assert!(body.get("entrega_promocional").is_none());
        assert_eq!(body["economia"].as_f64(), Some(0.0));
        assert_eq!(body["entrega_original"]["dados"]["peso"].as_f64(), Some(5.0));
    }

    #[tokio::test]
    async fn exactly_ten_kg_not_applied() {
        let (_, body) = post(app(), "/api/aplicar-promocoes", shipment(json!(10), "ECO")).await;
        assert_eq!(body["promocao_aplicada"], false);
    }

    #[tokio::test]
    async fn zero_weight_rejected() {
        let (status, body) = post(app(), "/api/aplicar-promocoes", shipment(json!(0), "PAD")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("weight"));
    }

    #[tokio::test]
    async fn identical_requests_identical_bodies() {
        let (_, first) = post(app(), "/api/aplicar-promocoes", shipment(json!(15), "EXP")).await;
        let (_, second) = post(app(), "/api/aplicar-promocoes", shipment(json!(15), "EXP")).await;
        assert_eq!(first["promocao_aplicada"], true);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[tokio::test]
    async fn textual_weight_accepted() {
        let (status, body) =
            post(app(), "/api/aplicar-promocoes", shipment(json!("12"), "pad")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["promocao_aplicada"], true);
    }
}

#[tokio::test]
async fn lists_service_types() {
    let (status, body) = get(app(), "/api/tipos-frete").await;
    assert_eq!(status, StatusCode::OK);
    let tipos = body["tipos"].as_array().unwrap();
    assert_eq!(tipos.len(), 3);
    assert_eq!(tipos[0]["codigo"], "EXP");
    assert_eq!(tipos[0]["nome"], "Expresso");
    assert_eq!(tipos[1]["nome"], "Padrão");
    assert_eq!(tipos[1]["descricao"], "peso * 2 + R$10");
    assert_eq!(tipos[2]["nome"], "Econômico");
}

#[tokio::test]
async fn health_check() {
    let (status, body) = get(app(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
}
