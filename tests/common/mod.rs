use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use ltodo::db::db::Db;
use ltodo::server::{router, AppState};
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;
use test_context::AsyncTestContext;
use tower::ServiceExt;

/// A migrated database in a temp dir and a router serving it.
#[allow(dead_code)]
pub struct ApiTestContext {
    _temp_dir: TempDir,
    pub db_path: PathBuf,
    pub app: Router,
}

impl AsyncTestContext for ApiTestContext {
    async fn setup() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("todo.db");
        Db::new(&db_path).unwrap();
        let app = router(AppState::new(db_path.clone()));
        ApiTestContext {
            _temp_dir: temp_dir,
            db_path,
            app,
        }
    }
}

impl ApiTestContext {
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.dispatch(request).await
    }

    pub async fn send_raw(&self, method: &str, uri: &str, raw: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(raw.to_string()))
            .unwrap();
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}
