use crate::domain::field_error::{optional, require};
use crate::domain::{
    BudgetBucket, MessageBody, PhoneNumber, SubmitterEmail, SubmitterName, ValidationErrors,
};

#[derive(serde::Deserialize)]
pub struct WorkInquiryPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub budget: Option<String>,
}

/// A validated work inquiry. `company` reuses the name constraints since it
/// is rendered in the same places a name is.
#[derive(Debug, Clone)]
pub struct WorkInquiry {
    pub name: SubmitterName,
    pub email: SubmitterEmail,
    pub company: Option<SubmitterName>,
    pub phone: Option<PhoneNumber>,
    pub message: MessageBody,
    pub budget: Option<BudgetBucket>,
}

impl TryFrom<WorkInquiryPayload> for WorkInquiry {
    type Error = ValidationErrors;

    fn try_from(payload: WorkInquiryPayload) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::default();

        let name = require(&mut errors, "name", payload.name, SubmitterName::parse);
        let email = require(&mut errors, "email", payload.email, SubmitterEmail::parse);
        let company = optional(&mut errors, "company", payload.company, SubmitterName::parse);
        let phone = optional(&mut errors, "phone", payload.phone, PhoneNumber::parse);
        let message = require(&mut errors, "message", payload.message, MessageBody::parse);
        let budget = optional(&mut errors, "budget", payload.budget, BudgetBucket::parse);

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) if errors.is_empty() => Ok(Self {
                name,
                email,
                company,
                phone,
                message,
                budget,
            }),
            _ => Err(errors),
        }
    }
}
