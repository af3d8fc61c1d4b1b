mod builder;
mod live;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use tokenization::{Client, Context, HttpSend, Result, StaticEnv};

pub const API_KEY: &str = "my-api-key";
pub const SECRET: &str = "SuperS3cr3tKey";
pub const ENDPOINT: &str = "https://some-url.de";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Transport that records every request and answers with a canned response.
#[derive(Debug, Clone)]
pub struct MockHttpSend {
    status: StatusCode,
    body: &'static str,
    sent: Arc<Mutex<Vec<http::Request<Bytes>>>>,
}

impl MockHttpSend {
    pub fn new(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            body,
            sent: Arc::default(),
        }
    }

    pub fn ok(body: &'static str) -> Self {
        Self::new(StatusCode::OK, body)
    }

    pub fn sent(&self) -> Vec<http::Request<Bytes>> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.sent.lock().unwrap().push(req);

        Ok(http::Response::builder()
            .status(self.status)
            .body(Bytes::from_static(self.body.as_bytes()))
            .unwrap())
    }
}

/// Context with the given transport and an empty environment.
pub fn test_context(http: MockHttpSend) -> Context {
    Context::new()
        .with_http_send(http)
        .with_env(StaticEnv {
            envs: HashMap::new(),
        })
}

/// Client signing with [`API_KEY`] and [`SECRET`] against [`ENDPOINT`].
pub fn test_client(http: MockHttpSend) -> Client {
    init_logger();

    Client::builder()
        .api_key(API_KEY)
        .api_secret(SECRET)
        .endpoint(ENDPOINT)
        .context(test_context(http))
        .build()
        .expect("client must build")
}
