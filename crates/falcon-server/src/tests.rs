//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use falcon_core::{SequenceSource, Session};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn setup_test_app_with(settings: SessionSettings) -> Router {
    let session = Session::with_source(
        settings,
        Box::new(SequenceSource::new(vec![61, 72, 83, 94])),
    );
    let config = ServerConfig {
        allowed_origins: vec![],
        session: settings,
    };
    create_router_with_session(session, None, config)
}

fn setup_test_app() -> Router {
    setup_test_app_with(SessionSettings::default())
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// ========== Catalog / Health ==========

#[tokio::test]
async fn test_health() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["ask_mode"], "insights");
    assert_eq!(json["validation"], "permissive");
}

#[tokio::test]
async fn test_list_catalog() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/catalog")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items[0]["id"], "steel");
    assert_eq!(items[2]["label"], "Iron ore");
}

#[tokio::test]
async fn test_security_headers() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/health")).await.unwrap();
    let headers = response.headers();
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert!(headers.get("content-security-policy").is_some());
}

// ========== State Updates ==========

#[tokio::test]
async fn test_initial_state() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/state")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["selections"], serde_json::json!([]));
    assert_eq!(json["insight_text"], "");
    assert_eq!(json["question"], "");
    assert!(json["result"].is_null());
}

#[tokio::test]
async fn test_toggle_round_trip() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(post_json("/api/toggle", serde_json::json!({ "id": "steel" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["selections"], serde_json::json!(["steel"]));

    let response = app
        .clone()
        .oneshot(post_json("/api/toggle", serde_json::json!({ "id": "steel" })))
        .await
        .unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["selections"], serde_json::json!([]));
}

#[tokio::test]
async fn test_toggle_empty_id_permissive() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(post_json("/api/toggle", serde_json::json!({ "id": "" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["selections"], serde_json::json!([""]));

    // A blank id counts as a selection, so insights mode asks succeed
    let response = app.oneshot(post_empty("/api/ask")).await.unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["outcome"], "shown");
}

#[tokio::test]
async fn test_toggle_empty_id_strict() {
    let app = setup_test_app_with(SessionSettings {
        validation: CatalogValidation::Strict,
        ..Default::default()
    });

    let response = app
        .oneshot(post_json("/api/toggle", serde_json::json!({ "id": "  " })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_toggle_unknown_permissive() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json("/api/toggle", serde_json::json!({ "id": "silver" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["selections"], serde_json::json!(["silver"]));
}

#[tokio::test]
async fn test_toggle_unknown_strict() {
    let app = setup_test_app_with(SessionSettings {
        validation: CatalogValidation::Strict,
        ..Default::default()
    });

    let response = app
        .clone()
        .oneshot(post_json("/api/toggle", serde_json::json!({ "id": "silver" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Unknown commodity: silver");

    let response = app.oneshot(get("/api/state")).await.unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["selections"], serde_json::json!([]));
}

#[tokio::test]
async fn test_set_text_and_question() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/text",
            serde_json::json!({ "text": "Coal inventories rising" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["insight_text"], "Coal inventories rising");

    let response = app
        .oneshot(post_json(
            "/api/question",
            serde_json::json!({ "text": "Where is gold heading?" }),
        ))
        .await
        .unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["question"], "Where is gold heading?");
    assert_eq!(json["insight_text"], "Coal inventories rising");
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json("/api/text", serde_json::json!({ "body": "x" })))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

// ========== Ask ==========

#[tokio::test]
async fn test_ask_skipped_when_empty() {
    let app = setup_test_app();

    let response = app.clone().oneshot(post_empty("/api/ask")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["outcome"], "validation_skipped");
    assert!(json["state"]["result"].is_null());

    let response = app.oneshot(get("/api/card")).await.unwrap();
    let json = get_body_json(response).await;
    assert!(json.is_null());
}

#[tokio::test]
async fn test_ask_with_selections_and_blank_text() {
    let app = setup_test_app();

    for id in ["steel", "gold"] {
        app.clone()
            .oneshot(post_json("/api/toggle", serde_json::json!({ "id": id })))
            .await
            .unwrap();
    }
    app.clone()
        .oneshot(post_json("/api/text", serde_json::json!({ "text": "  " })))
        .await
        .unwrap();

    let response = app.oneshot(post_empty("/api/ask")).await.unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["outcome"], "shown");

    let result = &json["state"]["result"];
    assert_eq!(result["visible"], true);
    assert_eq!(result["selections"], serde_json::json!(["steel", "gold"]));

    let series = result["series"].as_array().unwrap();
    assert_eq!(series.len(), 12);
    assert_eq!(series[0]["month"], "Jan");
    assert_eq!(series[0]["value"], 61);
    assert_eq!(series[11]["month"], "Dec");
    for point in series {
        let v = point["value"].as_u64().unwrap();
        assert!((60..100).contains(&v));
    }
}

#[tokio::test]
async fn test_ask_question_mode() {
    let app = setup_test_app_with(SessionSettings {
        ask_mode: AskMode::Question,
        ..Default::default()
    });

    app.clone()
        .oneshot(post_json("/api/toggle", serde_json::json!({ "id": "coal" })))
        .await
        .unwrap();
    let response = app.clone().oneshot(post_empty("/api/ask")).await.unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["outcome"], "validation_skipped");

    app.clone()
        .oneshot(post_json(
            "/api/question",
            serde_json::json!({ "text": "Coal outlook?" }),
        ))
        .await
        .unwrap();
    let response = app.oneshot(post_empty("/api/ask")).await.unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["outcome"], "shown");
}

// ========== Rendered Views ==========

#[tokio::test]
async fn test_card_after_ask() {
    let app = setup_test_app();

    for id in ["gold", "steel"] {
        app.clone()
            .oneshot(post_json("/api/toggle", serde_json::json!({ "id": id })))
            .await
            .unwrap();
    }
    app.clone().oneshot(post_empty("/api/ask")).await.unwrap();

    let response = app.oneshot(get("/api/card")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["headline"], "AI Analysis Complete!");
    assert_eq!(json["chips"][0]["label"], "Gold");
    assert_eq!(json["chips"][1]["label"], "Steel");
    assert!(json["placeholder"].is_null());
    assert_eq!(
        json["data_sources"],
        serde_json::json!(["S&P Global", "Bloomberg", "Thomson Reuters"])
    );
}

#[tokio::test]
async fn test_card_placeholder_without_selection() {
    let app = setup_test_app();

    app.clone()
        .oneshot(post_json("/api/text", serde_json::json!({ "text": "freight" })))
        .await
        .unwrap();
    app.clone().oneshot(post_empty("/api/ask")).await.unwrap();

    let response = app.oneshot(get("/api/card")).await.unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["chips"], serde_json::json!([]));
    assert_eq!(json["placeholder"], "No commodities selected");
}

#[tokio::test]
async fn test_full_view() {
    let app = setup_test_app();

    app.clone()
        .oneshot(post_json("/api/toggle", serde_json::json!({ "id": "freight" })))
        .await
        .unwrap();

    let response = app.oneshot(get("/api/view")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["title"], "Falcon AI");
    assert_eq!(json["market_updates"].as_array().unwrap().len(), 3);
    assert!(json["result"].is_null());

    let catalog = json["catalog"].as_array().unwrap();
    let checked: Vec<&str> = catalog
        .iter()
        .filter(|e| e["checked"] == true)
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(checked, vec!["freight"]);

    // ISO date, e.g. 2024-03-09
    let date = json["date"].as_str().unwrap();
    assert_eq!(date.len(), 10);
    assert_eq!(&date[4..5], "-");
}
