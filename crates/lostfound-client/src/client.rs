// Rust guideline compliant 2026-10-19

//! `reqwest` implementation of the backend client.

use crate::backend::Backend;
use crate::error::{ClientError, Result};
use crate::types::{AdminPage, ImageVariant, ItemReport, PublicItem, UploadResponse};
use async_trait::async_trait;
use lostfound_core::{ItemId, ItemKind, Session};
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for the lost & found REST backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a client for the given base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Backend root, e.g. `http://localhost:5417`
    /// * `timeout` - Per-request transport timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attaches a bearer token to every subsequent request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replaces or clears the bearer token.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Whether a bearer token is held.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Backend root URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Direct link to an image rendition, for display outside the client.
    #[must_use]
    pub fn file_url(&self, id: &str, variant: ImageVariant) -> String {
        format!(
            "{}?result_type=file&image_type={}",
            self.url(&format!("/api/files/{}", id)),
            variant.as_str()
        )
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn mark_claimed_request(&self, id: ItemId, claimed_by: &str) -> RequestBuilder {
        let url = self.url(&format!("/api/admin/mark-claimed/{}", id));
        self.http.put(url).query(&[("claimed_by", claimed_by)])
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = self.authorized(builder).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            let message = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "backend returned failure status");
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Logs in with admin credentials.
    ///
    /// # Returns
    ///
    /// The issued session (token and expiry).
    ///
    /// # Errors
    ///
    /// Returns an error if a credential is empty, the request fails, or the
    /// backend refuses the credentials.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ClientError::InvalidRequest(
                "username and password are required".to_string(),
            ));
        }

        let form = Form::new()
            .text("username", username.to_string())
            .text("password", password.to_string());
        let response = self
            .send(self.http.post(self.url("/api/auth/login")).multipart(form))
            .await?;
        Self::read_json(response).await
    }

    /// Lists publicly visible found items.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a list.
    pub async fn found_items(&self) -> Result<Vec<PublicItem>> {
        let response = self.send(self.http.get(self.url("/api/found-items"))).await?;
        Self::read_json(response).await
    }

    /// Lists publicly visible lost items.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a list.
    pub async fn lost_items(&self) -> Result<Vec<PublicItem>> {
        let response = self.send(self.http.get(self.url("/api/lost-items"))).await?;
        Self::read_json(response).await
    }

    /// Submits a visitor report.
    ///
    /// # Arguments
    ///
    /// * `kind` - Lost or found report
    /// * `report` - Report fields
    ///
    /// # Returns
    ///
    /// The backend's response body, or `Null` when it is empty or not JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails (no request is sent) or the
    /// backend rejects the report.
    #[instrument(skip(self, report))]
    pub async fn report(&self, kind: ItemKind, report: &ItemReport) -> Result<serde_json::Value> {
        report.validate(kind)?;

        let path = match kind {
            ItemKind::Lost => "/api/report-lost",
            ItemKind::Found => "/api/report-found",
        };
        let form = report
            .form_fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));

        let response = self.send(self.http.post(self.url(path)).multipart(form)).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null))
    }

    /// Uploads an image.
    ///
    /// # Arguments
    ///
    /// * `file_name` - Name sent with the multipart part
    /// * `bytes` - File content
    ///
    /// # Returns
    ///
    /// The backend file identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is empty, the upload fails, or the
    /// response lacks an id.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload_file(&self, file_name: &str, bytes: Vec<u8>) -> Result<String> {
        if bytes.is_empty() {
            return Err(ClientError::InvalidRequest("file is empty".to_string()));
        }

        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        let response = self
            .send(self.http.post(self.url("/api/files/upload")).multipart(form))
            .await?;
        let upload: UploadResponse = Self::read_json(response).await?;
        upload.data.id.ok_or_else(|| {
            ClientError::InvalidRequest("upload response did not include a file id".to_string())
        })
    }

    /// Downloads an image rendition.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_file(&self, id: &str, variant: ImageVariant) -> Result<Vec<u8>> {
        let request = self
            .http
            .get(self.url(&format!("/api/files/{}", id)))
            .query(&[("result_type", "file"), ("image_type", variant.as_str())]);
        let response = self.send(request).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl Backend for ApiClient {
    #[instrument(skip(self))]
    async fn list_admin_items(&self, offset: u64, limit: u32) -> Result<AdminPage> {
        let request = self
            .http
            .get(self.url("/api/admin/all-items"))
            .query(&[("offset", offset), ("limit", u64::from(limit))]);
        let response = self.send(request).await?;
        let values: Vec<serde_json::Value> = Self::read_json(response).await?;
        let page = AdminPage::from_values(values);
        debug!(
            returned = page.returned,
            skipped = page.skipped(),
            "received admin items page"
        );
        Ok(page)
    }

    #[instrument(skip(self))]
    async fn approve_item(&self, id: ItemId) -> Result<()> {
        let url = self.url(&format!("/api/admin/approve-item/{}", id));
        self.send(self.http.put(url)).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn reject_item(&self, id: ItemId) -> Result<()> {
        let url = self.url(&format!("/api/admin/reject-item/{}", id));
        self.send(self.http.put(url)).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_claimed(&self, id: ItemId, claimed_by: &str) -> Result<()> {
        self.send(self.mark_claimed_request(id, claimed_by)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        // Port 9 (discard) is never served in tests; requests must not get that far.
        ApiClient::new("http://127.0.0.1:9/", Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let client = client();
        assert_eq!(client.base_url(), "http://127.0.0.1:9");
        assert_eq!(
            client.url("/api/found-items"),
            "http://127.0.0.1:9/api/found-items"
        );
    }

    #[test]
    fn test_file_url() {
        assert_eq!(
            client().file_url("17", ImageVariant::Original),
            "http://127.0.0.1:9/api/files/17?result_type=file&image_type=original"
        );
    }

    #[test]
    fn test_token_handling() {
        let mut client = client().with_token("secret");
        assert!(client.has_token());
        client.set_token(None);
        assert!(!client.has_token());
    }

    #[test]
    fn test_mark_claimed_sends_only_claimant() {
        let request = client()
            .mark_claimed_request(18, "Ana Lee")
            .build()
            .unwrap();
        assert_eq!(request.method(), reqwest::Method::PUT);
        assert_eq!(request.url().path(), "/api/admin/mark-claimed/18");
        let params: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        assert_eq!(params, vec![("claimed_by".to_string(), "Ana Lee".to_string())]);
    }

    #[tokio::test]
    async fn test_login_validates_before_network() {
        let err = client().login("", "pw").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_file() {
        let err = client().upload_file("a.png", Vec::new()).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }
}
