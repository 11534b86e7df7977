use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use item_catalog::infrastructure::AppState;
use item_catalog::models::Item;
use item_catalog::server;
use item_catalog::soap::SOAP_ENV_NS;
use item_catalog::soap::envelope::{XmlElement, parse_document};
use tower::util::ServiceExt; // for `oneshot`

fn setup_app() -> (Router, AppState) {
    let state = AppState::in_memory();
    (server::build_router(state.clone(), &[]), state)
}

fn soap_request(operation: &str) -> Request<Body> {
    raw_request(format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soap:Envelope xmlns:soap="{}">
  <soap:Body>
    {}
  </soap:Body>
</soap:Envelope>"#,
        SOAP_ENV_NS, operation
    ))
}

fn raw_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .uri("/soap")
        .method("POST")
        .header(header::CONTENT_TYPE, "text/xml")
        .body(body.into())
        .unwrap()
}

// Sends the request, checks the transport-level invariants and returns the
// single element inside soap:Body
async fn send(app: &Router, req: Request<Body>) -> XmlElement {
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/xml; charset=utf-8"
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let root = parse_document(std::str::from_utf8(&body).unwrap()).unwrap();
    assert_eq!(root.local_name, "Envelope");

    let soap_body = root.find_descendant(SOAP_ENV_NS, "Body").unwrap();
    assert_eq!(soap_body.children.len(), 1);
    soap_body.children[0].clone()
}

#[tokio::test]
async fn test_create_item_then_duplicate() {
    let (app, state) = setup_app();
    let create = "<CreateItem><id>1</id><name>X</name><description>Y</description></CreateItem>";

    let response = send(&app, soap_request(create)).await;
    assert_eq!(response.local_name, "CreateItemResponse");
    let item = response.child("item").unwrap();
    assert_eq!(item.child("id").unwrap().text, "1");
    assert_eq!(item.child("name").unwrap().text, "X");
    assert_eq!(item.child("description").unwrap().text, "Y");

    let response = send(&app, soap_request(create)).await;
    assert_eq!(response.local_name, "CreateItemResponse");
    assert_eq!(
        response.child("error").unwrap().text,
        "Item with this ID already exists"
    );

    assert_eq!(
        state.item_repo.find_all().await.unwrap(),
        vec![Item::new(1, "X", Some("Y"))]
    );
}

#[tokio::test]
async fn test_unknown_operation() {
    let (app, state) = setup_app();

    let response = send(&app, soap_request("<FooBar/>")).await;
    assert_eq!(response.local_name, "ErrorResponse");
    assert_eq!(response.text, "Unknown operation");
    assert!(state.item_repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_xml_is_not_a_transport_failure() {
    let (app, _) = setup_app();

    let response = send(&app, raw_request("<soap:Envelope><soap:Body>")).await;
    assert_eq!(response.local_name, "ErrorResponse");

    let response = send(&app, raw_request(vec![0xffu8, 0xfe, 0x00])).await;
    assert_eq!(response.local_name, "ErrorResponse");
}

#[tokio::test]
async fn test_deeply_nested_body_gets_error_response() {
    let (app, _) = setup_app();

    let nested = format!(
        r#"<soap:Envelope xmlns:soap="{}"><soap:Body><GetItems/></soap:Body>{}"#,
        SOAP_ENV_NS,
        "<a>".repeat(100_000)
    );
    let response = send(&app, raw_request(nested)).await;
    assert_eq!(response.local_name, "ErrorResponse");
    assert_eq!(response.text, "Elements are nested deeper than 256 levels");
}

#[tokio::test]
async fn test_get_items_empty_store() {
    let (app, _) = setup_app();

    let response = send(&app, soap_request("<GetItems/>")).await;
    assert_eq!(response.local_name, "GetItemsResponse");
    assert!(response.children.is_empty());
}

#[tokio::test]
async fn test_both_front_ends_share_the_store() {
    let (app, _) = setup_app();

    let req = Request::builder()
        .uri("/rest/items")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"id": 7, "name": "Tablet"}"#))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, soap_request("<GetItem><id>7</id></GetItem>")).await;
    let item = response.child("item").unwrap();
    assert_eq!(item.child("name").unwrap().text, "Tablet");
    assert_eq!(item.child("description").unwrap().text, "");

    let response = send(&app, soap_request("<DeleteItem><id>7</id></DeleteItem>")).await;
    assert_eq!(response.child("message").unwrap().text, "Item deleted");

    let req = Request::builder()
        .uri("/rest/items/7")
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_special_characters_are_escaped() {
    let (app, _) = setup_app();

    let create = "<CreateItem><id>3</id><name>Salt &amp; Pepper</name>\
                  <description>&lt;b&gt;bold&lt;/b&gt;</description></CreateItem>";
    send(&app, soap_request(create)).await;

    let response = send(&app, soap_request("<GetItems/>")).await;
    let item = response.child("item").unwrap();
    assert!(item.child("description").unwrap().children.is_empty());
    assert_eq!(item.child("name").unwrap().text, "Salt & Pepper");
    assert_eq!(item.child("description").unwrap().text, "<b>bold</b>");
}

#[tokio::test]
async fn test_missing_field_is_reported_as_error_response() {
    let (app, _) = setup_app();

    let response = send(&app, soap_request("<GetItem></GetItem>")).await;
    assert_eq!(response.local_name, "ErrorResponse");
    assert_eq!(response.text, "GetItem requires a <id> element");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (app, _) = setup_app();

    let req = Request::builder()
        .uri("/openapi.json")
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["paths"]["/rest/items/{id}"].is_object());
}
