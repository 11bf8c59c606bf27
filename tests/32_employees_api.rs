mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

fn new_hire() -> Value {
    json!({
        "name": "Dana",
        "age": 23,
        "className": "Class C",
        "subjects": ["Art", "Music"],
        "attendance": 81
    })
}

#[tokio::test]
async fn get_employee_by_id() -> Result<()> {
    let server = common::spawn_server().await?;

    let payload = server.client.get(server.url("/api/employees/2")).send().await?.json::<Value>().await?;
    assert_eq!(payload["data"]["name"], "Bob");
    assert_eq!(payload["data"]["className"], "Class B");
    assert_eq!(payload["data"]["flagged"], false);
    assert!(payload["data"]["createdAt"].as_str().map_or(false, |s| s.ends_with('Z')));
    Ok(())
}

#[tokio::test]
async fn missing_employee_is_null_not_error() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.client.get(server.url("/api/employees/999")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let payload = res.json::<Value>().await?;
    assert_eq!(payload["success"], true);
    assert!(payload["data"].is_null());
    Ok(())
}

#[tokio::test]
async fn admin_creates_employee() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.admin_token().await?;

    let res = server
        .client
        .post(server.url("/api/employees"))
        .bearer_auth(&token)
        .json(&new_hire())
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let payload = res.json::<Value>().await?;
    assert_eq!(payload["data"]["id"], "4");
    assert_eq!(payload["data"]["flagged"], false);
    assert_eq!(payload["data"]["subjects"], json!(["Art", "Music"]));

    let listing = server.client.get(server.url("/api/employees")).send().await?.json::<Value>().await?;
    assert_eq!(listing["data"]["totalCount"], 4);
    assert_eq!(common::names(&listing).last().map(String::as_str), Some("Dana"));
    Ok(())
}

#[tokio::test]
async fn create_without_required_field_is_validation_error() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.admin_token().await?;

    let res = server
        .client
        .post(server.url("/api/employees"))
        .bearer_auth(&token)
        .json(&json!({ "name": "Dana", "age": 23 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let payload = res.json::<Value>().await?;
    assert_eq!(payload["code"], "VALIDATION_ERROR");
    assert!(payload["field_errors"]["className"].is_string());
    Ok(())
}

#[tokio::test]
async fn writes_without_token_are_unauthenticated() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.client.post(server.url("/api/employees")).json(&new_hire()).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res.json::<Value>().await?["code"], "UNAUTHORIZED");

    let res = server
        .client
        .patch(server.url("/api/employees/1"))
        .json(&json!({ "flagged": true }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // An unverifiable token is no better than none
    let res = server
        .client
        .post(server.url("/api/employees"))
        .bearer_auth("forged.token.value")
        .json(&new_hire())
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn employee_role_is_forbidden_to_write() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.employee_token().await?;

    let res = server
        .client
        .post(server.url("/api/employees"))
        .bearer_auth(&token)
        .json(&new_hire())
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert_eq!(res.json::<Value>().await?["code"], "FORBIDDEN");

    let res = server
        .client
        .put(server.url("/api/employees/1"))
        .bearer_auth(&token)
        .json(&json!({ "attendance": 10 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let alice = server.client.get(server.url("/api/employees/1")).send().await?.json::<Value>().await?;
    assert_eq!(alice["data"]["attendance"], 96);
    Ok(())
}

#[tokio::test]
async fn admin_updates_only_supplied_fields() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.admin_token().await?;

    let before = server.client.get(server.url("/api/employees/3")).send().await?.json::<Value>().await?;

    let res = server
        .client
        .patch(server.url("/api/employees/3"))
        .bearer_auth(&token)
        .json(&json!({ "flagged": true, "subjects": [], "id": "77", "createdAt": "2000-01-01T00:00:00.000Z" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let after = res.json::<Value>().await?;
    assert_eq!(after["data"]["flagged"], true);
    assert_eq!(after["data"]["subjects"], json!([]));
    assert_eq!(after["data"]["id"], "3");
    assert_eq!(after["data"]["name"], "Clara");
    assert_eq!(after["data"]["attendance"], 92);
    assert_eq!(after["data"]["createdAt"], before["data"]["createdAt"]);
    Ok(())
}

#[tokio::test]
async fn update_unknown_id_is_not_found() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.admin_token().await?;

    let res = server
        .client
        .put(server.url("/api/employees/404"))
        .bearer_auth(&token)
        .json(&json!({ "name": "Nobody" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?["code"], "NOT_FOUND");

    let listing = server.client.get(server.url("/api/employees")).send().await?.json::<Value>().await?;
    assert_eq!(common::names(&listing), ["Alice", "Bob", "Clara"]);
    Ok(())
}
