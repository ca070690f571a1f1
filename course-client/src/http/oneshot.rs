// course-client/src/http/oneshot.rs
// Oneshot HTTP 客户端 - 内存通信
//
// 需要启用 "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, header};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

use super::{HttpClient, MultipartForm, MultipartPart, decode_body};
use crate::config::DEFAULT_API_PREFIX;
use crate::{ClientError, ClientResult};

const BOUNDARY: &str = "course-client-form-boundary";

/// Oneshot HTTP 客户端 (内存调用)
///
/// 使用 Tower Service 的 oneshot 模式直接调用 Router，
/// 用于把 API 客户端接到同进程的 mock 后端或嵌入式服务。
///
/// # Example
///
/// ```ignore
/// use course_client::{AdminApi, OneshotHttpClient};
///
/// let router = axum::Router::new().route("/api/admin/courses", get(list_courses));
/// let api = AdminApi::new(OneshotHttpClient::new(router));
/// let courses = api.fetch_courses().await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    prefix: String,
    token: Arc<RwLock<Option<String>>>,
}

impl OneshotHttpClient {
    /// Router paths are expected under `/api/admin`
    pub fn new(router: Router) -> Self {
        Self {
            router,
            prefix: DEFAULT_API_PREFIX.to_string(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Mount point of the admin routes inside the router
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// 设置认证 token
    pub async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    /// 获取当前 token
    pub async fn get_token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    fn uri(&self, path: &str) -> String {
        let prefix = self.prefix.trim_matches('/');
        let path = path.trim_start_matches('/');
        if prefix.is_empty() {
            format!("/{path}")
        } else {
            format!("/{prefix}/{path}")
        }
    }

    /// 构建请求
    async fn build_request(
        &self,
        method: Method,
        uri: String,
        content_type: Option<String>,
        body: Body,
    ) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = self.get_token().await {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    async fn json_request<B: serde::Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Request<Body>> {
        let bytes = serde_json::to_vec(body)?;
        self.build_request(
            method,
            self.uri(path),
            Some("application/json".into()),
            Body::from(bytes),
        )
        .await
    }

    async fn empty_request(&self, method: Method, uri: String) -> ClientResult<Request<Body>> {
        self.build_request(method, uri, None, Body::empty()).await
    }

    /// 执行请求并处理响应
    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body_bytes).to_string();
            return Err(ClientError::from_status(status, text));
        }
        decode_body(&body_bytes)
    }
}

/// `multipart/form-data` body with a fixed boundary
fn encode_multipart(form: MultipartForm) -> Vec<u8> {
    let mut out = Vec::new();
    for part in form.into_parts() {
        out.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            MultipartPart::Text { name, value } => {
                out.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                out.extend_from_slice(value.as_bytes());
            }
            MultipartPart::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                out.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                out.extend_from_slice(&bytes);
            }
        }
        out.extend_from_slice(b"\r\n");
    }
    out.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    out
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.empty_request(Method::GET, self.uri(path)).await?;
        self.execute(request).await
    }

    async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        // Borrow reqwest's URL encoder; only path and query are sent to the router
        let url = reqwest::Url::parse_with_params(
            &format!("http://in-process{}", self.uri(path)),
            query,
        )
        .map_err(|e| ClientError::Internal(format!("Invalid path: {}", e)))?;
        let uri = match url.query() {
            Some(q) if !q.is_empty() => format!("{}?{}", url.path(), q),
            _ => url.path().to_string(),
        };
        let request = self.empty_request(Method::GET, uri).await?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.json_request(Method::POST, path, body).await?;
        self.execute(request).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.empty_request(Method::POST, self.uri(path)).await?;
        self.execute(request).await
    }

    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartForm,
    ) -> ClientResult<T> {
        let request = self
            .build_request(
                Method::POST,
                self.uri(path),
                Some(format!("multipart/form-data; boundary={BOUNDARY}")),
                Body::from(encode_multipart(form)),
            )
            .await?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.json_request(Method::PUT, path, body).await?;
        self.execute(request).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.empty_request(Method::DELETE, self.uri(path)).await?;
        self.execute(request).await
    }
}
