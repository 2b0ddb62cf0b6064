use crate::domain::field_error::{optional, require};
use crate::domain::{
    MessageBody, PhoneNumber, SubmitterEmail, SubmitterName, ValidationErrors,
};

/// The raw shape of a contact form POST. Every field is optional at this
/// stage so that a missing key surfaces as a field-level error rather than a
/// deserialization failure.
#[derive(serde::Deserialize)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: Option<String>,
    pub message: Option<String>,
}

/// A fully validated contact submission. Immutable once parsed: downstream
/// components only ever see shared references to it.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: SubmitterName,
    pub email: SubmitterEmail,
    pub mobile_number: Option<PhoneNumber>,
    pub message: MessageBody,
}

impl TryFrom<ContactPayload> for ContactSubmission {
    type Error = ValidationErrors;

    fn try_from(payload: ContactPayload) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::default();

        let name = require(&mut errors, "name", payload.name, SubmitterName::parse);
        let email = require(&mut errors, "email", payload.email, SubmitterEmail::parse);
        let mobile_number = optional(
            &mut errors,
            "mobileNumber",
            payload.mobile_number,
            PhoneNumber::parse,
        );
        let message = require(&mut errors, "message", payload.message, MessageBody::parse);

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) if errors.is_empty() => Ok(Self {
                name,
                email,
                mobile_number,
                message,
            }),
            _ => Err(errors),
        }
    }
}
