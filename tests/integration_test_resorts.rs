mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::TestApp;
use serde_json::Value;
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_list_returns_full_catalog_by_default() {
    let app = TestApp::new();
    let res = app.router.clone().oneshot(
        Request::builder().uri("/api/v1/resorts").body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    let resorts = body.as_array().unwrap();
    assert_eq!(resorts.len(), 24);
    // Default sort is rating descending.
    assert_eq!(resorts[0]["rating"], 5);
}

#[tokio::test]
async fn test_filter_matches_name_and_location() {
    let app = TestApp::new();
    let res = app.router.clone().oneshot(
        Request::builder().uri("/api/v1/resorts?q=peak").body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    let names: Vec<&str> = body.as_array().unwrap().iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Coronet Peak"));

    let res = app.router.clone().oneshot(
        Request::builder().uri("/api/v1/resorts?q=zzz").body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(parse_body(res).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_price_sort_puts_club_fields_last() {
    let app = TestApp::new();
    let res = app.router.clone().oneshot(
        Request::builder().uri("/api/v1/resorts?sort=price").body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    let resorts = body.as_array().unwrap();

    assert_eq!(resorts[0]["price"], 35.0);
    let last = resorts.last().unwrap();
    assert!(last["price"].is_string());

    // Once a non-numeric price appears, no numeric price follows.
    let mut seen_access_marker = false;
    for r in resorts {
        if r["price"].is_string() {
            seen_access_marker = true;
        } else {
            assert!(!seen_access_marker, "numeric price after a club field");
        }
    }
}

#[tokio::test]
async fn test_unknown_sort_key_is_rejected() {
    let app = TestApp::new();
    let res = app.router.clone().oneshot(
        Request::builder().uri("/api/v1/resorts?sort=vertical").body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(parse_body(res).await["error"].as_str().unwrap().contains("sort"));
}

#[tokio::test]
async fn test_get_resort_by_id() {
    let app = TestApp::new();
    let res = app.router.clone().oneshot(
        Request::builder().uri("/api/v1/resorts/cardrona").body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["name"], "Cardrona Alpine Resort");
    assert_eq!(body["lifts"], 11);
    assert_eq!(body["pricing"]["child"], 90);

    let missing = app.router.clone().oneshot(
        Request::builder().uri("/api/v1/resorts/chamonix").body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_selection_summary_shape() {
    let app = TestApp::new();
    let res = app.router.clone().oneshot(
        Request::builder().uri("/api/v1/resorts/coronetpeak/summary").body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["id"], "coronetpeak");
    assert_eq!(body["name"], "Coronet Peak");
    assert_eq!(body["location"], "Queenstown, South Island");
    assert_eq!(body["isOpen"], true);
    assert_eq!(body["temperature"], -6.4);
    assert_eq!(body["weatherCondition"], "Packed Powder");
    assert!(body.get("amenities").is_none());
}
