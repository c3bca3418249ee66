//! Delivery service selected from configuration

use async_trait::async_trait;
use folio_contact::{DeliveryError, Mailer, OutgoingEmail};
use serde::Deserialize;
use strum::{Display, EnumString};

use crate::{SendGridClient, SendGridConfig, SmtpConfig, SmtpMailer};

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Provider {
    #[default]
    SendGrid,
    Smtp,
}

/// Email service for forwarding inquiries
#[derive(Clone)]
pub enum EmailService {
    SendGrid(SendGridClient),
    Smtp(SmtpMailer),
}

impl EmailService {
    pub fn new(
        provider: Provider,
        sendgrid: &SendGridConfig,
        smtp: &SmtpConfig,
    ) -> anyhow::Result<Self> {
        let service = match provider {
            Provider::SendGrid => Self::SendGrid(SendGridClient::new(sendgrid)?),
            Provider::Smtp => Self::Smtp(SmtpMailer::new(smtp)?),
        };

        Ok(service)
    }

    pub fn provider(&self) -> Provider {
        match self {
            Self::SendGrid(_) => Provider::SendGrid,
            Self::Smtp(_) => Provider::Smtp,
        }
    }
}

#[async_trait]
impl Mailer for EmailService {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        match self {
            Self::SendGrid(client) => client.send(email).await,
            Self::Smtp(mailer) => mailer.send(email).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_provider_names() {
        assert_eq!(Provider::from_str("sendgrid").unwrap(), Provider::SendGrid);
        assert_eq!(Provider::from_str("smtp").unwrap(), Provider::Smtp);
        assert_eq!(Provider::SendGrid.to_string(), "sendgrid");
        assert!(Provider::from_str("mailgun").is_err());
    }

    #[test]
    fn test_new_selects_provider() {
        let sendgrid = SendGridConfig {
            api_key: "SG.test".to_owned(),
            ..SendGridConfig::default()
        };

        let service = EmailService::new(Provider::SendGrid, &sendgrid, &SmtpConfig::default())
            .unwrap();
        assert_eq!(service.provider(), Provider::SendGrid);

        let service =
            EmailService::new(Provider::Smtp, &SendGridConfig::default(), &SmtpConfig::default())
                .unwrap();
        assert_eq!(service.provider(), Provider::Smtp);
    }

    #[test]
    fn test_sendgrid_without_key_is_a_misconfiguration() {
        let result = EmailService::new(
            Provider::SendGrid,
            &SendGridConfig::default(),
            &SmtpConfig::default(),
        );

        assert!(result.is_err());
    }
}
