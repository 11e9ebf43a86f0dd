//! Catalog API port and its reqwest adapter.

use std::time::Duration;

use aicatch_types::{DeleteAllRequest, DeleteAllResponse, MessageResponse, Tool, ToolFields, ToolId};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Response, StatusCode, Url};

use crate::error::ConsoleError;

/// Operations the view models need from the catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Every tool in the catalog.
    async fn list(&self) -> Result<Vec<Tool>, ConsoleError>;

    /// One tool by id.
    async fn get(&self, id: &ToolId) -> Result<Tool, ConsoleError>;

    /// Creates a tool; returns the stored record.
    async fn create(&self, fields: &ToolFields) -> Result<Tool, ConsoleError>;

    /// Replaces all four fields of a tool; returns the stored record.
    async fn update(&self, id: &ToolId, fields: &ToolFields) -> Result<Tool, ConsoleError>;

    /// Deletes one tool.
    async fn delete(&self, id: &ToolId) -> Result<(), ConsoleError>;

    /// Deletes every tool whose name differs from `exclude_name`.
    async fn delete_all(&self, exclude_name: Option<&str>)
        -> Result<DeleteAllResponse, ConsoleError>;
}

/// HTTP client for the `/api/tools` endpoints.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpCatalogClient {
    /// Creates a client for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Transport` if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ConsoleError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// Server URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// URL of one tool, with the id percent-encoded as a single path
    /// segment.
    fn tool_url(&self, id: &ToolId) -> Result<Url, ConsoleError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ConsoleError::Validation(format!("Invalid server URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| ConsoleError::Validation(format!("Invalid server URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "tools", id.as_str()]);
        Ok(url)
    }

    /// Build HTTP headers required for making API calls.
    fn build_headers(&self) -> Result<HeaderMap, ConsoleError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = &self.token {
            headers.insert(
                AUTHORIZATION,
                format!("Bearer {token}")
                    .parse()
                    .map_err(|e| ConsoleError::Validation(format!("Invalid token header: {e}")))?,
            );
        }

        Ok(headers)
    }
}

/// Passes 2xx responses through; everything else becomes an error
/// carrying the server's `message`.
async fn check(resp: Response) -> Result<Response, ConsoleError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ConsoleError::NotFound);
    }
    let text = resp.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<MessageResponse>(&text) {
        Ok(body) => body.message,
        Err(_) if text.is_empty() => status.to_string(),
        Err(_) => text,
    };
    Err(ConsoleError::Http {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn list(&self) -> Result<Vec<Tool>, ConsoleError> {
        let resp = self
            .http
            .get(self.url("/api/tools"))
            .headers(self.build_headers()?)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    async fn get(&self, id: &ToolId) -> Result<Tool, ConsoleError> {
        let resp = self
            .http
            .get(self.tool_url(id)?)
            .headers(self.build_headers()?)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    async fn create(&self, fields: &ToolFields) -> Result<Tool, ConsoleError> {
        let resp = self
            .http
            .post(self.url("/api/tools"))
            .headers(self.build_headers()?)
            .json(fields)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    async fn update(&self, id: &ToolId, fields: &ToolFields) -> Result<Tool, ConsoleError> {
        let resp = self
            .http
            .put(self.tool_url(id)?)
            .headers(self.build_headers()?)
            .json(fields)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    async fn delete(&self, id: &ToolId) -> Result<(), ConsoleError> {
        let resp = self
            .http
            .delete(self.tool_url(id)?)
            .headers(self.build_headers()?)
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    async fn delete_all(
        &self,
        exclude_name: Option<&str>,
    ) -> Result<DeleteAllResponse, ConsoleError> {
        let body = DeleteAllRequest {
            exclude_tool_name: exclude_name.filter(|n| !n.is_empty()).map(String::from),
        };
        let resp = self
            .http
            .post(self.url("/api/tools/delete-all"))
            .headers(self.build_headers()?)
            .json(&body)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(token: Option<&str>) -> HttpCatalogClient {
        HttpCatalogClient::new(
            "http://127.0.0.1:3000/",
            token.map(String::from),
            Duration::from_secs(5),
        )
        .expect("client")
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let c = client(None);
        assert_eq!(c.base_url(), "http://127.0.0.1:3000");
        assert_eq!(c.url("/api/tools"), "http://127.0.0.1:3000/api/tools");
    }

    #[test]
    fn tool_url_encodes_the_id() {
        let c = client(None);
        let id = ToolId::new("abc?x#y/z").unwrap();
        assert_eq!(
            c.tool_url(&id).unwrap().as_str(),
            "http://127.0.0.1:3000/api/tools/abc%3Fx%23y%2Fz"
        );
    }

    #[test]
    fn tool_url_keeps_a_path_prefix() {
        let c = HttpCatalogClient::new("http://host/catalog/", None, Duration::from_secs(5))
            .expect("client");
        let id = ToolId::new("t1").unwrap();
        assert_eq!(c.tool_url(&id).unwrap().as_str(), "http://host/catalog/api/tools/t1");
    }

    #[test]
    fn headers_carry_bearer_token() {
        let headers = client(Some("s3cret")).build_headers().expect("headers");
        assert_eq!(headers[AUTHORIZATION], "Bearer s3cret");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn empty_token_sends_no_authorization() {
        let headers = client(Some("")).build_headers().expect("headers");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn invalid_token_is_rejected() {
        let err = client(Some("bad\ntoken")).build_headers().unwrap_err();
        assert!(matches!(err, ConsoleError::Validation(_)));
    }
}
