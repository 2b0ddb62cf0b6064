use crate::domain::field_error::require;
use crate::domain::{SubmitterEmail, ValidationErrors};

#[derive(serde::Deserialize)]
pub struct NewsletterPayload {
    pub email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewsletterSubscription {
    pub email: SubmitterEmail,
}

impl TryFrom<NewsletterPayload> for NewsletterSubscription {
    type Error = ValidationErrors;

    fn try_from(payload: NewsletterPayload) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::default();
        let email = require(&mut errors, "email", payload.email, SubmitterEmail::parse);
        match email {
            Some(email) if errors.is_empty() => Ok(Self { email }),
            _ => Err(errors),
        }
    }
}
