use std::sync::Arc;

use async_trait::async_trait;

use crate::DeliveryError;

#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(String),
    /// Provider-side template rendered with the given substitution data.
    Template {
        id: String,
        data: serde_json::Value,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub content: Content,
}

/// Outbound email delivery.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError>;
}

#[async_trait]
impl<T: Mailer + ?Sized> Mailer for Arc<T> {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        (**self).send(email).await
    }
}
