// course-client/src/http/network.rs
// 网络 HTTP 客户端 - reqwest

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use super::{HttpClient, MultipartForm, MultipartPart, decode_body};
use crate::{ClientConfig, ClientError, ClientResult};

/// 网络 HTTP 客户端
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    /// Client for `api_base` with the default timeout
    pub fn new(api_base: &str) -> Result<Self, ClientError> {
        Self::from_config(&ClientConfig::new(api_base).with_api_prefix(""))
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base(),
            token: config.token.clone(),
        })
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(&self, mut req: reqwest::RequestBuilder) -> ClientResult<T> {
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes).to_string();
            tracing::debug!(status = %status, body = %text, "API request failed");
            return Err(ClientError::from_status(status, text));
        }
        decode_body(&bytes)
    }

    fn to_reqwest_form(form: MultipartForm) -> ClientResult<Form> {
        let mut out = Form::new();
        for part in form.into_parts() {
            out = match part {
                MultipartPart::Text { name, value } => out.text(name, value),
                MultipartPart::File {
                    name,
                    file_name,
                    content_type,
                    bytes,
                } => out.part(
                    name,
                    Part::bytes(bytes)
                        .file_name(file_name)
                        .mime_str(&content_type)?,
                ),
            };
        }
        Ok(out)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.get(self.url(path))).await
    }

    async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        self.send(self.client.get(self.url(path)).query(query)).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.post(self.url(path))).await
    }

    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartForm,
    ) -> ClientResult<T> {
        let form = Self::to_reqwest_form(form)?;
        self.send(self.client.post(self.url(path)).multipart(form))
            .await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.delete(self.url(path))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let client = NetworkHttpClient::new("https://api.example.com/api/admin/").unwrap();
        assert_eq!(client.base_url(), "https://api.example.com/api/admin");
        assert_eq!(
            client.url("/courses/3"),
            "https://api.example.com/api/admin/courses/3"
        );
        assert!(client.token().is_none());
    }

    #[test]
    fn test_from_config_keeps_token() {
        let config = ClientConfig::new("http://localhost:8000").with_token("secret");
        let client = config.build_http_client().unwrap();
        assert_eq!(client.token(), Some("secret"));
        assert_eq!(client.base_url(), "http://localhost:8000/api/admin");
    }
}
