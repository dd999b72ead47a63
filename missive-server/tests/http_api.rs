use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use missive_server::{routes::router, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app(graphiql: bool) -> (Arc<AppState>, Router) {
    let state = Arc::new(AppState::new(graphiql));
    (state.clone(), router(state))
}

async fn post_graphql(app: &Router, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    let resp = app.clone().oneshot(req).await.expect("response");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("body");
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).expect("request");
    let resp = app.clone().oneshot(req).await.expect("response");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

/*
    Obiettivo test: i tre scenari di esempio end to end via HTTP:
    create -> get -> update con author omesso -> get.
*/
#[tokio::test]
async fn create_get_update_over_http() {
    let (state, app) = app(true);

    let (status, v) = post_graphql(
        &app,
        json!({"query": r#"mutation { createMessage(input: {content: "hello", author: "ann"}) { id content author } }"#}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(v.get("errors").is_none(), "{}", v);
    let id = v["data"]["createMessage"]["id"].as_str().expect("id").to_string();
    assert_eq!(id.len(), 20);
    assert_eq!(v["data"]["createMessage"]["content"], "hello");

    let get_body = json!({
        "query": "query Get($id: ID!) { getMessage(id: $id) { id content author } }",
        "operationName": "Get",
        "variables": {"id": id},
    });
    let (_, v) = post_graphql(&app, get_body.clone()).await;
    assert_eq!(v["data"]["getMessage"], json!({"id": id, "content": "hello", "author": "ann"}));

    let (_, v) = post_graphql(
        &app,
        json!({
            "query": "mutation Up($id: ID!, $input: MessageInput) { updateMessage(id: $id, input: $input) { id content author } }",
            "variables": {"id": id, "input": {"content": "bye"}},
        }),
    )
    .await;
    assert_eq!(v["data"]["updateMessage"], json!({"id": id, "content": "bye", "author": null}));

    let (_, v) = post_graphql(&app, get_body).await;
    assert_eq!(v["data"]["getMessage"]["author"], Value::Null);
    assert_eq!(state.store.len(), 1);
}

/*
    Obiettivo test: NotFound arriva come errore nel payload (status 200)
    con il codice stabile in extensions.
*/
#[tokio::test]
async fn not_found_is_reported_in_errors() {
    let (_, app) = app(true);

    let (status, v) = post_graphql(&app, json!({"query": r#"{ getMessage(id: "unknown") { id } }"#})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["getMessage"], Value::Null);
    assert_eq!(v["errors"][0]["message"], "no message exists with id unknown");
    assert_eq!(v["errors"][0]["extensions"]["code"], "NOT_FOUND");
    assert_eq!(v["errors"][0]["path"], json!(["getMessage"]));
}

/*
    Obiettivo test: in un batch l'operazione che fallisce non influenza le altre.
*/
#[tokio::test]
async fn batch_failure_is_isolated() {
    let (state, app) = app(true);

    let (status, v) = post_graphql(
        &app,
        json!([
            {"query": r#"mutation { createMessage(input: {content: "a"}) { content } }"#},
            {"query": r#"{ getMessage(id: "missing") { id } }"#},
        ]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let arr = v.as_array().expect("batch response");
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["data"]["createMessage"]["content"], "a");
    assert!(arr[0].get("errors").is_none());
    assert_eq!(arr[1]["errors"][0]["extensions"]["code"], "NOT_FOUND");
    assert_eq!(state.store.len(), 1);
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let (_, app) = app(true);
    let req = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("request");
    let resp = app.oneshot(req).await.expect("response");
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn graphiql_is_served_when_enabled() {
    let (_, app) = app(true);
    let (status, body) = get(&app, "/graphql").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.to_lowercase().contains("graphiql"));
}

#[tokio::test]
async fn graphiql_disabled_returns_404() {
    let (_, app) = app(false);
    let (status, _) = get(&app, "/graphql").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/*
    Obiettivo test: GET /graphql con query string esegue le query in sola lettura.
*/
#[tokio::test]
async fn get_with_query_string_executes_query() {
    let (state, app) = app(false);
    let m = state.store.create(missive_core::MessageInput::new(Some("hi"), None));

    let uri = format!("/graphql?query=%7BgetMessage(id%3A%22{}%22)%7Bcontent%7D%7D", m.id);
    let (status, body) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(v["data"]["getMessage"]["content"], "hi");
}

/*
    Obiettivo test: una mutation via GET viene rifiutata con 405 e non tocca lo store.
*/
#[tokio::test]
async fn get_with_mutation_is_rejected() {
    let (state, app) = app(true);

    let (status, body) = get(&app, "/graphql?query=mutation%7BcreateMessage%7Bid%7D%7D").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    let v: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(v["errors"][0]["message"], "Can only perform a mutation operation from a POST request.");
    assert!(state.store.is_empty());
}

// Test che verifica che /health riporti il numero di messaggi
#[tokio::test]
async fn health_reports_message_count() {
    let (state, app) = app(true);
    state.store.create(Default::default());

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(v, json!({"status": "ok", "messages": 1}));
}
