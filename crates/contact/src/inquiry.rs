use serde::Deserialize;
use validator::Validate;

/// A single contact-form submission.
///
/// Only `email` is checked, since it ends up as a mail address. The other
/// fields are forwarded as typed by the sender.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct Inquiry {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Inquiry {
    /// Parse and validate a raw JSON request body.
    pub fn from_json(body: &[u8]) -> crate::Result<Self> {
        let inquiry: Inquiry = serde_json::from_slice(body)?;
        inquiry.validate()?;

        Ok(inquiry)
    }

    /// Substitution data for provider-side templates.
    pub fn template_data(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "email": self.email,
            "subject": self.subject,
            "message": self.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_from_json_accepts_all_fields() {
        let inquiry = Inquiry::from_json(
            br#"{"name":"Ann","email":"ann@example.com","subject":"Hi","message":"Hello there"}"#,
        )
        .unwrap();

        assert_eq!(inquiry.name, "Ann");
        assert_eq!(inquiry.email, "ann@example.com");
        assert_eq!(inquiry.subject, "Hi");
        assert_eq!(inquiry.message, "Hello there");
    }

    #[test]
    fn test_from_json_rejects_missing_field() {
        let err = Inquiry::from_json(br#"{"name":"Ann","email":"ann@example.com"}"#).unwrap_err();

        assert!(matches!(err, Error::MalformedRequest(_)));
    }

    #[test]
    fn test_from_json_rejects_invalid_json() {
        let err = Inquiry::from_json(b"name=Ann&email=ann@example.com").unwrap_err();

        assert!(matches!(err, Error::MalformedRequest(_)));
    }

    #[test]
    fn test_from_json_rejects_invalid_email() {
        let err = Inquiry::from_json(
            br#"{"name":"Ann","email":"not-an-address","subject":"Hi","message":"Hello"}"#,
        )
        .unwrap_err();

        assert!(matches!(err, Error::MalformedRequest(msg) if msg.contains("email")));
    }

    #[test]
    fn test_empty_free_text_is_passed_through() {
        let inquiry =
            Inquiry::from_json(br#"{"name":"","email":"a@b.co","subject":"","message":""}"#)
                .unwrap();

        assert!(inquiry.name.is_empty());
        assert!(inquiry.message.is_empty());
    }

    #[test]
    fn test_template_data() {
        let inquiry = Inquiry {
            name: "Ann".to_owned(),
            email: "ann@example.com".to_owned(),
            subject: "Hi".to_owned(),
            message: "Hello there".to_owned(),
        };

        let data = inquiry.template_data();
        assert_eq!(data["name"], "Ann");
        assert_eq!(data["message"], "Hello there");
    }
}
