//! Shared setup for router tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use folio::{
    AppState, Config,
    config::{EmailConfig, ObservabilityConfig, ServerConfig, SiteConfig},
};
use folio_contact::{DeliveryError, Mailer, OutgoingEmail};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const ANN: &str =
    r#"{"name":"Ann","email":"ann@example.com","subject":"Hi","message":"Hello there"}"#;

/// Delivery collaborator double recording every message.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub sent: Arc<Mutex<Vec<OutgoingEmail>>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            sent: Arc::default(),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        self.sent.lock().unwrap().push(email.clone());

        if self.fail {
            return Err(DeliveryError::Rejected {
                status: 401,
                reason: "invalid API key".to_owned(),
            });
        }

        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        email: EmailConfig {
            owner_address: "owner@folio.test".to_owned(),
            from_address: "noreply@folio.test".to_owned(),
            ..EmailConfig::default()
        },
        observability: ObservabilityConfig::default(),
        site: SiteConfig::default(),
    }
}

pub fn create_test_app(config: Config, mailer: &RecordingMailer) -> Router {
    folio::routes::router(AppState::new(config, Arc::new(mailer.clone())))
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
