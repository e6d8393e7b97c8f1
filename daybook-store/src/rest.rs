//! JSON REST client for the record backend.
//!
//! Endpoints follow `{base_url}/{resource}` and `{base_url}/{resource}/{id}`.

use anyhow::{bail, Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::record::Record;

/// Header the backend reads to decide whether the session is signed in.
pub const AUTH_HEADER: &str = "X-Authenticated";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Send `X-Authenticated: true` with every request.
    #[serde(default)]
    pub authenticated: bool,
    /// Skip the backend entirely and serve the local collection.
    #[serde(default)]
    pub offline: bool,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            timeout_secs: default_timeout_secs(),
            authenticated: false,
            offline: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if settings.authenticated {
            headers.insert(AUTH_HEADER, HeaderValue::from_static("true"));
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("build http client")?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url<R: Record>(&self) -> String {
        format!("{}/{}", self.base_url, R::RESOURCE)
    }

    pub fn item_url<R: Record>(&self, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, R::RESOURCE, id)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!(%method, url, "backend request");
        self.http.request(method, url)
    }

    pub async fn list<R: Record>(&self) -> Result<Vec<R>> {
        let url = self.collection_url::<R>();
        let resp = send(self.request(Method::GET, &url), &url).await?;
        resp.json().await.with_context(|| format!("parse {url}"))
    }

    pub async fn get<R: Record>(&self, id: &str) -> Result<R> {
        let url = self.item_url::<R>(id);
        let resp = send(self.request(Method::GET, &url), &url).await?;
        resp.json().await.with_context(|| format!("parse {url}"))
    }

    pub async fn create<R: Record>(&self, record: &R) -> Result<R> {
        let url = self.collection_url::<R>();
        let resp = send(self.request(Method::POST, &url).json(record), &url).await?;
        resp.json().await.with_context(|| format!("parse {url}"))
    }

    pub async fn update<R: Record>(&self, id: &str, record: &R) -> Result<R> {
        let url = self.item_url::<R>(id);
        let resp = send(self.request(Method::PUT, &url).json(record), &url).await?;
        resp.json().await.with_context(|| format!("parse {url}"))
    }

    pub async fn delete<R: Record>(&self, id: &str) -> Result<()> {
        let url = self.item_url::<R>(id);
        send(self.request(Method::DELETE, &url), &url).await?;
        Ok(())
    }
}

async fn send(req: RequestBuilder, url: &str) -> Result<Response> {
    let resp = req.send().await.with_context(|| format!("request {url}"))?;
    let status = resp.status();
    if !status.is_success() {
        let txt = resp.text().await.unwrap_or_default();
        bail!("backend error: {status} {txt}");
    }
    Ok(resp)
}
