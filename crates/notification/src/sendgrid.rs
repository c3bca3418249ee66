//! SendGrid v3 mail send client

use std::time::Duration;

use async_trait::async_trait;
use folio_contact::{Content, DeliveryError, Mailer, OutgoingEmail};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone)]
pub struct SendGridConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SendGridConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.sendgrid.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Serialize, PartialEq)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize, PartialEq)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dynamic_template_data: Option<&'a serde_json::Value>,
}

#[derive(Debug, Serialize, PartialEq)]
struct ContentPart<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    value: &'a str,
}

/// Body of `POST /v3/mail/send`.
#[derive(Debug, Serialize, PartialEq)]
struct MailSend<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<Address<'a>>,
    subject: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    content: Vec<ContentPart<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    template_id: Option<&'a str>,
}

impl<'a> From<&'a OutgoingEmail> for MailSend<'a> {
    fn from(email: &'a OutgoingEmail) -> Self {
        let (content, template_id, data) = match &email.content {
            Content::Text(text) => (
                vec![ContentPart {
                    kind: "text/plain",
                    value: text,
                }],
                None,
                None,
            ),
            Content::Template { id, data } => (vec![], Some(id.as_str()), Some(data)),
        };

        Self {
            personalizations: vec![Personalization {
                to: vec![Address { email: &email.to }],
                dynamic_template_data: data,
            }],
            from: Address { email: &email.from },
            reply_to: email.reply_to.as_deref().map(|email| Address { email }),
            subject: &email.subject,
            content,
            template_id,
        }
    }
}

#[derive(Clone)]
pub struct SendGridClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl SendGridClient {
    pub fn new(config: &SendGridConfig) -> anyhow::Result<Self> {
        if config.api_key.is_empty() {
            anyhow::bail!("SendGrid API key is not configured");
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        tracing::info!(base_url = %config.base_url, "SendGrid client initialized");

        Ok(Self {
            http,
            endpoint: format!("{}/v3/mail/send", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.to_owned(),
        })
    }
}

#[async_trait]
impl Mailer for SendGridClient {
    #[tracing::instrument(skip_all, fields(to = %email.to, subject = %email.subject))]
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        tracing::info!("Sending email through SendGrid");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&MailSend::from(email))
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.into()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let reason = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), %reason, "SendGrid rejected email");

        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            reason,
        })
    }
}
