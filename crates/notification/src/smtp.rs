//! SMTP delivery using lettre

use async_trait::async_trait;
use folio_contact::{Content, DeliveryError, Mailer, OutgoingEmail};
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

/// Port of SMTP submission over implicit TLS. Every other port upgrades the
/// connection with STARTTLS.
const SMTPS_PORT: u16 = 465;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Encryption {
    /// TLS from the first byte.
    Implicit,
    /// Plaintext greeting, then STARTTLS.
    StartTls,
}

impl Encryption {
    fn for_port(port: u16) -> Self {
        if port == SMTPS_PORT {
            Self::Implicit
        } else {
            Self::StartTls
        }
    }
}

#[derive(Clone)]
pub struct SmtpMailer {
    transport: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let transport = if config.username.is_empty() || config.password.is_empty() {
            tracing::info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );

            SmtpTransport::builder_dangerous(&config.host)
                .port(config.port)
                .build()
        } else {
            let encryption = Encryption::for_port(config.port);

            tracing::info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                ?encryption,
                "SMTP relay initialized with authentication and TLS"
            );

            let creds = Credentials::new(config.username.clone(), config.password.clone());
            let builder = match encryption {
                Encryption::Implicit => SmtpTransport::relay(&config.host)?,
                Encryption::StartTls => SmtpTransport::starttls_relay(&config.host)?,
            };

            builder
                .port(config.port)
                .credentials(creds)
                .build()
        };

        Ok(Self { transport })
    }
}

fn mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address
        .parse()
        .map_err(|_| DeliveryError::Address(address.to_owned()))
}

pub(crate) fn build_message(email: &OutgoingEmail) -> Result<Message, DeliveryError> {
    let Content::Text(text) = &email.content else {
        return Err(DeliveryError::Unsupported("template content"));
    };

    let mut builder = Message::builder()
        .from(mailbox(&email.from)?)
        .to(mailbox(&email.to)?)
        .subject(email.subject.clone())
        .header(header::ContentType::TEXT_PLAIN);

    if let Some(reply_to) = &email.reply_to {
        builder = builder.reply_to(mailbox(reply_to)?);
    }

    builder
        .body(text.to_owned())
        .map_err(|e| DeliveryError::Transport(e.into()))
}

#[async_trait]
impl Mailer for SmtpMailer {
    #[tracing::instrument(skip_all, fields(to = %email.to, subject = %email.subject))]
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        let message = build_message(email)?;
        let transport = self.transport.clone();

        tracing::info!("Sending email text plain");

        tokio::task::spawn_blocking(move || transport.send(&message))
            .await
            .map_err(|e| DeliveryError::Transport(e.into()))?
            .map_err(|e| DeliveryError::Transport(e.into()))?;

        Ok(())
    }
}
