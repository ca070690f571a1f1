// course-client/tests/common/mod.rs
// 内存 mock 后端: 记录请求, 返回固定响应

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tokio::sync::Notify;

use course_client::{AdminApi, OneshotHttpClient, ReorderService};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Recorded {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

/// Holds reorder calls until released
#[derive(Debug, Default)]
pub struct Gate {
    pub entered: Notify,
    pub release: Notify,
}

#[derive(Clone, Default)]
pub struct Backend {
    calls: Arc<Mutex<Vec<Recorded>>>,
    pub fail_reorder: Arc<AtomicBool>,
    pub gate: Option<Arc<Gate>>,
}

impl Backend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated() -> (Self, Arc<Gate>) {
        let gate = Arc::new(Gate::default());
        let backend = Self {
            gate: Some(Arc::clone(&gate)),
            ..Self::default()
        };
        (backend, gate)
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls other than plain reads
    pub fn writes(&self) -> Vec<Recorded> {
        self.calls()
            .into_iter()
            .filter(|c| c.method != Method::GET)
            .collect()
    }

    pub fn router(&self) -> Router {
        Router::new().fallback(handle).with_state(self.clone())
    }

    pub fn api(&self) -> AdminApi<OneshotHttpClient> {
        AdminApi::new(OneshotHttpClient::new(self.router()))
    }

    pub fn service(&self) -> ReorderService<OneshotHttpClient> {
        ReorderService::new(Arc::new(self.api()))
    }
}

async fn handle(
    State(backend): State<Backend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    backend.calls.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    if path.ends_with("/reorder") {
        if let Some(gate) = &backend.gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        if backend.fail_reorder.load(Ordering::SeqCst) {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(json!({"code": 9001, "message": "database unavailable"})),
            )
                .into_response();
        }
        return axum::Json(json!({"message": "Order updated"})).into_response();
    }

    let Some(path) = path.strip_prefix("/api/admin/") else {
        return StatusCode::NOT_FOUND.into_response();
    };
    respond(&method, path)
}

fn respond(method: &Method, path: &str) -> Response {
    let segments: Vec<&str> = path.split('/').collect();
    match (method.as_str(), segments.as_slice()) {
        ("GET", ["courses"]) => axum::Json(json!([
            {"id": 1, "title": "Rust basics", "description": "Ownership", "status": true,
             "thumbnail": "rust.png", "uniqueAccess": 17},
            {"id": 2, "title": "Async Rust", "description": null, "status": false,
             "thumbnail": "", "uniqueAccess": 0}
        ]))
        .into_response(),
        ("GET", ["courses", "1"]) => axum::Json(course_fixture()).into_response(),
        ("GET", ["courses", _]) => (StatusCode::NOT_FOUND, "Course not found").into_response(),
        ("POST", ["courses", "1", "modules"]) => axum::Json(json!({
            "id": 50, "courseId": 1, "name": "Extra", "description": "", "status": "draft",
            "order": 5, "videos": []
        }))
        .into_response(),
        ("POST", ["courses", "1", "modules", module, "videos"]) => axum::Json(json!({
            "id": 900, "title": "New", "url": "dQw4w9WgXcQ", "status": "draft",
            "courseId": 1, "moduleId": module.parse::<i64>().unwrap_or(0), "order": 3
        }))
        .into_response(),
        ("GET", ["badges"]) => axum::Json(json!([
            {"id": 1, "platform_id": 1, "type": "videos_completed", "title": "First steps",
             "color": "#8E2DE2", "threshold": 1, "is_active": true}
        ]))
        .into_response(),
        ("POST", ["badges"]) | ("PUT", ["badges", _]) => axum::Json(json!({
            "id": 2, "platform_id": 1, "type": "hours_watched", "title": "Marathon",
            "color": "#FFD700", "threshold": 10, "is_active": true
        }))
        .into_response(),
        ("GET", ["help-articles"]) => axum::Json(json!([
            {"id": 1, "category_id": 3, "question": "Reset password?", "answer": "Use the link.",
             "is_faq": true}
        ]))
        .into_response(),
        ("POST", ["help-articles"]) | ("PUT", ["help-articles", _]) => axum::Json(json!({
            "id": 5, "category_id": 3, "question": "Q?", "answer": "A.", "is_faq": true
        }))
        .into_response(),
        ("GET", ["help-categories"]) => axum::Json(json!([
            {"id": 3, "name": "Account", "slug": "account", "articles_count": 4}
        ]))
        .into_response(),
        ("POST", ["help-categories"]) | ("PUT", ["help-categories", _]) => axum::Json(json!({
            "id": 4, "name": "Conta e Acesso", "slug": "conta-e-acesso"
        }))
        .into_response(),
        ("GET", ["dashboard"]) => axum::Json(json!({
            "period": "7d",
            "summary": {"averageWatchMinutes": 12.5, "completionRate": 48.2,
                        "positiveReactions": 30, "totalStudents": 120},
            "engagement": [{"date": "2026-03-01", "count": 4}, {"date": "2026-03-02", "count": 8}],
            "topStudents": [{"userId": 9, "name": "ana souza", "completedVideos": 10,
                             "totalVideos": 12, "progressPercent": 83.3,
                             "completedLabel": "10 of 12"}],
            "ratings": {"average": 4.6, "totalReviews": 20, "distribution": [
                {"stars": 5, "count": 14, "percentage": 70.0},
                {"stars": 4, "count": 6, "percentage": 30.0}
            ]}
        }))
        .into_response(),
        ("GET", ["users"]) => axum::Json(json!([
            {"id": 1, "name": "Ana Souza", "email": "ana@example.com", "role": "admin",
             "created_at": "2026-01-10T12:00:00Z"},
            {"id": 2, "name": "Bruno Lima", "email": "bruno@example.com", "role": "student"}
        ]))
        .into_response(),
        ("POST", ["users"]) | ("PUT", ["users", _]) => axum::Json(json!({
            "id": 3, "name": "Carla Dias", "email": "carla@example.com", "role": "student"
        }))
        .into_response(),
        ("GET", ["teachers"]) => axum::Json(json!([
            {"id": 7, "name": "Prof. Lima", "email": "lima@escola.edu.br",
             "phone": "+55 11 99999-0000", "bio": "Systems programming",
             "avatar_url": "https://cdn.example.com/lima.png"}
        ]))
        .into_response(),
        ("GET", ["teachers", "7"]) => axum::Json(json!({
            "id": 7, "name": "Prof. Lima", "email": "lima@escola.edu.br", "phone": null,
            "bio": null, "avatar_url": null
        }))
        .into_response(),
        ("GET", ["teachers", _]) => (StatusCode::NOT_FOUND, "Teacher not found").into_response(),
        ("POST", ["teachers"]) | ("POST", ["teachers", _]) => axum::Json(json!({
            "id": 8, "name": "Prof. Reis", "email": "reis@escola.edu.br",
            "avatar_url": "https://cdn.example.com/reis.png"
        }))
        .into_response(),
        ("DELETE", _) => StatusCode::NO_CONTENT.into_response(),
        ("POST", _) | ("PUT", _) => axum::Json(json!({"message": "ok"})).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Course 1: module 10 = [101, 102], 20 = [201], 30 = [], 40 = []
///
/// Server orders are sparse and out of sequence on purpose; the client
/// normalizes them on load.
pub fn course_fixture() -> Value {
    json!({
        "id": 1,
        "title": "Rust basics",
        "description": "Ownership",
        "status": true,
        "thumbnail": "rust.png",
        "modules": [
            {"id": 20, "courseId": 1, "name": "Borrowing", "description": null,
             "status": "published", "order": 5, "videos": [
                {"id": 201, "title": "Refs", "url": "https://youtu.be/aaaaaaaaaaa",
                 "status": "published", "courseId": 1, "moduleId": 20, "order": 1}
             ]},
            {"id": 10, "courseId": 1, "name": "Ownership", "description": "Moves",
             "status": "published", "order": 1, "videos": [
                {"id": 102, "title": "Drop", "url": "bbbbbbbbbbb", "status": "draft",
                 "courseId": 1, "moduleId": 10, "order": 4},
                {"id": 101, "title": "Move", "url": "ccccccccccc", "status": "published",
                 "time_in_seconds": 300, "courseId": 1, "moduleId": 10, "order": 2}
             ]},
            {"id": 30, "courseId": 1, "name": "Lifetimes", "status": "draft", "order": 7,
             "videos": []},
            {"id": 40, "courseId": 1, "name": "Traits", "status": "draft", "order": 9,
             "videos": []}
        ]
    })
}
