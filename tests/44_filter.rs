mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

// Listing surface over the seeded directory:
// Alice (96, Class A), Bob (89, Class B), Clara (92, Class A)

#[tokio::test]
async fn unfiltered_listing_keeps_insertion_order() -> Result<()> {
    let server = common::spawn_server().await?;

    let payload = server.client.get(server.url("/api/employees")).send().await?.json::<Value>().await?;
    assert_eq!(common::names(&payload), ["Alice", "Bob", "Clara"]);
    assert_eq!(payload["data"]["totalCount"], 3);
    assert_eq!(payload["data"]["page"], 1);
    assert_eq!(payload["data"]["pageSize"], 10);
    Ok(())
}

#[tokio::test]
async fn class_filter_sorted_by_attendance_desc() -> Result<()> {
    let server = common::spawn_server().await?;

    let payload = server
        .client
        .get(server.url("/api/employees?className=Class%20A&sortField=ATTENDANCE&sortOrder=DESC"))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(common::names(&payload), ["Clara", "Alice"]);
    assert_eq!(payload["data"]["totalCount"], 2);
    Ok(())
}

#[tokio::test]
async fn find_body_matches_query_string() -> Result<()> {
    let server = common::spawn_server().await?;

    let body = json!({
        "filter": { "className": "Class A" },
        "sort": { "field": "ATTENDANCE", "order": "DESC" }
    });
    let res = server.client.post(server.url("/api/find/employees")).json(&body).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let payload = res.json::<Value>().await?;
    assert_eq!(common::names(&payload), ["Clara", "Alice"]);
    assert_eq!(payload["data"]["totalCount"], 2);
    Ok(())
}

#[tokio::test]
async fn second_page_of_two_sorted_by_name() -> Result<()> {
    let server = common::spawn_server().await?;

    let payload = server
        .client
        .get(server.url("/api/employees?sortField=NAME&page=2&pageSize=2"))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(common::names(&payload), ["Clara"]);
    assert_eq!(payload["data"]["totalCount"], 3);
    assert_eq!(payload["data"]["page"], 2);
    assert_eq!(payload["data"]["pageSize"], 2);
    Ok(())
}

#[tokio::test]
async fn name_and_attendance_filters_combine() -> Result<()> {
    let server = common::spawn_server().await?;

    let payload = server
        .client
        .get(server.url("/api/employees?name=B&minAttendance=89"))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(common::names(&payload), ["Bob"]);

    let payload = server
        .client
        .get(server.url("/api/employees?name=b&minAttendance=90"))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert!(common::names(&payload).is_empty());
    assert_eq!(payload["data"]["totalCount"], 0);
    Ok(())
}

#[tokio::test]
async fn page_beyond_the_end_is_empty() -> Result<()> {
    let server = common::spawn_server().await?;

    let payload = server
        .client
        .get(server.url("/api/employees?page=9&pageSize=5"))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert!(common::names(&payload).is_empty());
    assert_eq!(payload["data"]["totalCount"], 3);
    Ok(())
}

#[tokio::test]
async fn non_positive_paging_is_rejected() -> Result<()> {
    let server = common::spawn_server().await?;

    for query in ["page=0", "pageSize=0", "page=-1&pageSize=5"] {
        let res = server.client.get(server.url(&format!("/api/employees?{}", query))).send().await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "query: {}", query);
        let payload = res.json::<Value>().await?;
        assert_eq!(payload["code"], "VALIDATION_ERROR", "query: {}", query);
    }
    Ok(())
}

#[tokio::test]
async fn stable_sort_keeps_seed_order_for_ties() -> Result<()> {
    let server = common::spawn_server().await?;

    // Alice and Clara are both 20; Alice was inserted first
    let payload = server
        .client
        .get(server.url("/api/employees?sortField=AGE&sortOrder=DESC"))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(common::names(&payload), ["Bob", "Alice", "Clara"]);
    Ok(())
}
