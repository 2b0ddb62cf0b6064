mod budget;
mod contact_submission;
mod field_error;
mod message_body;
mod newsletter_subscription;
mod phone_number;
mod submitter_email;
mod submitter_name;
mod work_inquiry;

pub use budget::BudgetBucket;
pub use contact_submission::{ContactPayload, ContactSubmission};
pub use field_error::{FieldError, ValidationErrors};
pub use message_body::MessageBody;
pub use newsletter_subscription::{NewsletterPayload, NewsletterSubscription};
pub use phone_number::PhoneNumber;
pub use submitter_email::SubmitterEmail;
pub use submitter_name::SubmitterName;
pub use work_inquiry::{WorkInquiry, WorkInquiryPayload};
