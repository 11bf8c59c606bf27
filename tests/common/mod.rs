#![allow(dead_code)]

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

use employee_directory::config::AppConfig;
use employee_directory::{app, AppState};

pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
}

/// Start a fresh, seeded server on an ephemeral port inside the test runtime
pub async fn spawn_server() -> Result<TestServer> {
    spawn_server_with(AppConfig::development()).await
}

pub async fn spawn_server_with(config: AppConfig) -> Result<TestServer> {
    let state = AppState::demo(config).context("failed to build app state")?;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("failed to bind test listener")?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, app(state)).await;
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
        client: reqwest::Client::new(),
    })
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Log in and return the bearer token
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let res = self
            .client
            .post(self.url("/auth/login"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;
        anyhow::ensure!(res.status() == StatusCode::OK, "login failed: {}", res.status());

        let payload = res.json::<Value>().await?;
        payload["data"]["token"]
            .as_str()
            .map(str::to_string)
            .context("login response missing token")
    }

    pub async fn admin_token(&self) -> Result<String> {
        self.login("admin", "admin123").await
    }

    pub async fn employee_token(&self) -> Result<String> {
        self.login("employee", "employee123").await
    }
}

pub fn names(payload: &Value) -> Vec<String> {
    payload["data"]["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|e| e["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
