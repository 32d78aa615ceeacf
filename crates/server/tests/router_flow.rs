use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use server::state::AppState;
use tower::Service;

fn app() -> Router {
    server::build_app(AppState::in_memory())
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&v)?)
        }
        None => Body::empty(),
    };
    let res = app.clone().call(req.body(body)?).await?;
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

#[tokio::test]
async fn resources_are_isolated() -> anyhow::Result<()> {
    let app = app();
    let person = json!({"firstName": "Ann", "lastName": "Lee", "email": "ann@example.com"});

    let (status, _) = call(&app, Method::POST, "/api/employees", Some(person.clone())).await?;
    assert_eq!(status, StatusCode::CREATED);
    // same email is free in another resource
    let (status, _) = call(&app, Method::POST, "/api/students", Some(person)).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (_, employees) = call(&app, Method::GET, "/api/employees", None).await?;
    let (_, customers) = call(&app, Method::GET, "/api/v1/customer", None).await?;
    assert_eq!(employees.as_array().map(Vec::len), Some(1));
    assert_eq!(customers.as_array().map(Vec::len), Some(0));
    Ok(())
}

#[tokio::test]
async fn client_id_is_ignored_on_create() -> anyhow::Result<()> {
    let app = app();
    let body = json!({"id": 77, "firstName": "Ann", "lastName": "Lee", "email": "ann@example.com"});
    let (status, created) = call(&app, Method::POST, "/api/students", Some(body)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);

    let (status, _) = call(&app, Method::GET, "/api/students/77", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn update_stores_fields_as_given() -> anyhow::Result<()> {
    let app = app();
    let body = json!({"firstName": "Ann", "lastName": "Lee", "email": "ann@example.com"});
    let (_, created) = call(&app, Method::POST, "/api/employees", Some(body)).await?;
    let uri = format!("/api/employees/{}", created["id"]);

    let blank = json!({"firstName": " ", "lastName": "Lee", "email": "ann"});
    let (status, updated) = call(&app, Method::PUT, &uri, Some(blank)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["firstName"], " ");

    let (_, current) = call(&app, Method::GET, &uri, None).await?;
    assert_eq!(current["email"], "ann");
    Ok(())
}

#[tokio::test]
async fn broken_json_body_gets_json_error() -> anyhow::Result<()> {
    let app = app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/customer")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))?;
    let res = app.clone().call(req).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["error"], "Bad Request");

    let (status, body) = call(&app, Method::GET, "/api/v1/customer", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(0));
    Ok(())
}
