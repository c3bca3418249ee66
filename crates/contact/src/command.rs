use crate::{Content, Error, Inquiry, Mailer, OutgoingEmail};

pub const DEFAULT_ACKNOWLEDGMENT_SUBJECT: &str = "Thanks for the inquiry!";
pub const DEFAULT_ACKNOWLEDGMENT_MESSAGE: &str = "I've received your message and will get back to you as soon as possible. Please do not respond to this email.";

/// Addresses and wording used when forwarding an inquiry.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Address every outbound message is sent from.
    pub sender: String,
    /// Site owner, recipient of the notification.
    pub owner: String,
    pub acknowledge: bool,
    pub acknowledgment_subject: String,
    pub acknowledgment_message: String,
    pub notification_template_id: Option<String>,
}

impl Settings {
    pub fn new(sender: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            owner: owner.into(),
            acknowledge: true,
            acknowledgment_subject: DEFAULT_ACKNOWLEDGMENT_SUBJECT.to_owned(),
            acknowledgment_message: DEFAULT_ACKNOWLEDGMENT_MESSAGE.to_owned(),
            notification_template_id: None,
        }
    }
}

#[derive(Clone)]
pub struct Command<M: Mailer>(pub M, pub Settings);

/// Only `POST` carries an inquiry.
pub fn check_method(method: &str) -> crate::Result<()> {
    if method != "POST" {
        return Err(Error::MethodNotAllowed);
    }

    Ok(())
}

impl<M: Mailer> Command<M> {
    pub async fn submit_json(&self, body: &[u8]) -> crate::Result<()> {
        let inquiry = Inquiry::from_json(body)?;

        self.submit(&inquiry).await
    }

    /// Sends the owner notification and, when enabled, the acknowledgment.
    ///
    /// Both sends run concurrently and are awaited before returning. The
    /// first failure fails the whole submission.
    #[tracing::instrument(skip_all, fields(email = %inquiry.email))]
    pub async fn submit(&self, inquiry: &Inquiry) -> crate::Result<()> {
        tracing::info!(
            name = %inquiry.name,
            email = %inquiry.email,
            subject = %inquiry.subject,
            message = %inquiry.message,
            "Inquiry received"
        );

        let notification = self.notification(inquiry);

        if !self.1.acknowledge {
            self.0.send(&notification).await?;
            return Ok(());
        }

        let acknowledgment = self.acknowledgment(inquiry);
        futures::future::try_join(self.0.send(&notification), self.0.send(&acknowledgment))
            .await?;

        Ok(())
    }

    pub fn notification(&self, inquiry: &Inquiry) -> OutgoingEmail {
        let content = match &self.1.notification_template_id {
            Some(id) => Content::Template {
                id: id.to_owned(),
                data: inquiry.template_data(),
            },
            None => Content::Text(format!(
                "{}\n\n--\nFrom: {} <{}>",
                inquiry.message, inquiry.name, inquiry.email
            )),
        };

        OutgoingEmail {
            from: self.1.sender.to_owned(),
            to: self.1.owner.to_owned(),
            reply_to: Some(inquiry.email.to_owned()),
            subject: format!("[{}] {}", inquiry.name, inquiry.subject),
            content,
        }
    }

    pub fn acknowledgment(&self, inquiry: &Inquiry) -> OutgoingEmail {
        OutgoingEmail {
            from: self.1.sender.to_owned(),
            to: inquiry.email.to_owned(),
            reply_to: None,
            subject: self.1.acknowledgment_subject.to_owned(),
            content: Content::Text(self.1.acknowledgment_message.to_owned()),
        }
    }
}
