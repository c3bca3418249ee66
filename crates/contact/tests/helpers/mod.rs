use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use folio_contact::{Command, DeliveryError, Mailer, OutgoingEmail, Settings};

pub const ANN: &[u8] =
    br#"{"name":"Ann","email":"ann@example.com","subject":"Hi","message":"Hello there"}"#;

/// Mailer that keeps every message it is asked to send.
///
/// Messages addressed to `fail_to` are recorded and then rejected.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub sent: Arc<Mutex<Vec<OutgoingEmail>>>,
    pub fail_to: Option<String>,
}

#[allow(dead_code)]
impl RecordingMailer {
    pub fn failing_to(address: impl Into<String>) -> Self {
        Self {
            sent: Arc::default(),
            fail_to: Some(address.into()),
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

        if self.fail_to.as_deref() == Some(email.to.as_str()) {
            return Err(DeliveryError::Rejected {
                status: 403,
                reason: "sender identity not verified".to_owned(),
            });
        }

        Ok(())
    }
}

pub fn settings() -> Settings {
    Settings::new("noreply@folio.test", "owner@folio.test")
}

pub fn command(mailer: &RecordingMailer, settings: Settings) -> Command<RecordingMailer> {
    Command(mailer.clone(), settings)
}
