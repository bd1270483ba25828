// tests/support/helpers.rs
use super::mocks::{
    FakeGenerator, InMemoryBlogs, InMemoryCatalogs, InMemoryKnowledge, SequentialIds,
    SteppingClock,
};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use oseberg_backend::application::{
    ports::ai::TextGenerator,
    services::{ApplicationServices, ServiceDependencies},
};
use oseberg_backend::domain::ledger::LedgerSheet;
use oseberg_backend::infrastructure::{ledger::InMemoryLedgerSheet, util::DefaultSlugGenerator};
use oseberg_backend::presentation::http::{
    routes::{RouterConfig, build_router},
    state::{AdminToken, HttpState},
};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const SITE_URL: &str = "https://osebergexim.test";

/// Router wired to in-memory collaborators that tests can inspect.
pub struct TestApp {
    pub router: axum::Router,
    pub blogs: Arc<InMemoryBlogs>,
    pub catalogs: Arc<InMemoryCatalogs>,
    pub knowledge: Arc<InMemoryKnowledge>,
    pub ledger: Arc<InMemoryLedgerSheet>,
    pub generator: Arc<FakeGenerator>,
}

pub struct TestAppBuilder {
    admin_token: Option<String>,
    with_ai: bool,
    with_ledger: bool,
}

impl TestAppBuilder {
    pub fn admin_token(mut self, token: &str) -> Self {
        self.admin_token = Some(token.to_string());
        self
    }

    pub fn without_ai(mut self) -> Self {
        self.with_ai = false;
        self
    }

    pub fn without_ledger(mut self) -> Self {
        self.with_ledger = false;
        self
    }

    pub fn build(self) -> TestApp {
        let blogs = Arc::new(InMemoryBlogs::default());
        let catalogs = Arc::new(InMemoryCatalogs::default());
        let knowledge = Arc::new(InMemoryKnowledge::default());
        let ledger = Arc::new(InMemoryLedgerSheet::new());
        let generator = Arc::new(FakeGenerator::default());

        let ledger_sheet: Option<Arc<dyn LedgerSheet>> = if self.with_ledger {
            Some(ledger.clone())
        } else {
            None
        };
        let text_generator: Option<Arc<dyn TextGenerator>> = if self.with_ai {
            Some(generator.clone())
        } else {
            None
        };

        let services = Arc::new(ApplicationServices::new(ServiceDependencies {
            blog_write_repo: blogs.clone(),
            blog_read_repo: blogs.clone(),
            catalog_write_repo: catalogs.clone(),
            catalog_read_repo: catalogs.clone(),
            knowledge_repo: knowledge.clone(),
            ledger_sheet,
            text_generator,
            clock: Arc::new(SteppingClock::default()),
            slugger: Arc::new(DefaultSlugGenerator),
            ids: Arc::new(SequentialIds::default()),
            site_url: format!("{SITE_URL}/"),
        }));

        let state = HttpState {
            services,
            admin_token: self.admin_token.as_deref().map(AdminToken::new),
        };
        // no peer address under oneshot, so the IP rate limiter stays off
        let router = build_router(state, &RouterConfig::default());

        TestApp {
            router,
            blogs,
            catalogs,
            knowledge,
            ledger,
            generator,
        }
    }
}

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    pub fn data(&self) -> &Value {
        assert_eq!(self.body["success"], Value::Bool(true), "body: {}", self.body);
        &self.body["data"]
    }
}

impl TestApp {
    pub fn builder() -> TestAppBuilder {
        TestAppBuilder {
            admin_token: None,
            with_ai: true,
            with_ledger: true,
        }
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let resp = self.router.clone().oneshot(request).await.unwrap();
        let status = resp.status();
        let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(request(Method::GET, uri, None, None)).await
    }

    pub async fn json(&self, method: Method, uri: &str, body: Value) -> TestResponse {
        self.send(request(method, uri, Some(body), None)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(request(Method::DELETE, uri, None, None)).await
    }
}

pub fn request(
    method: Method,
    uri: &str,
    body: Option<Value>,
    bearer: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Assert the failure envelope: status, `success: false` and the message.
pub fn assert_error_response(resp: &TestResponse, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status, expected_status, "body: {}", resp.body);
    assert_eq!(resp.body["success"], Value::Bool(false));
    assert_eq!(
        resp.body["error"].as_str(),
        Some(expected_error),
        "unexpected error field: {}",
        resp.body
    );
}
