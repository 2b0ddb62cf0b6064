use crate::domain::{ContactSubmission, NewsletterSubscription, SubmitterEmail, WorkInquiry};
use crate::email_client::EmailClient;
use crate::utils::error_chain_fmt;
use once_cell::sync::Lazy;
use tera::{Context, Tera};

// Templates are embedded at compile time; the binary carries everything it
// needs to render notifications.
static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        (
            "contact_admin.html",
            include_str!("../templates/contact_admin.html"),
        ),
        (
            "contact_acknowledgment.html",
            include_str!("../templates/contact_acknowledgment.html"),
        ),
        (
            "work_inquiry_admin.html",
            include_str!("../templates/work_inquiry_admin.html"),
        ),
        (
            "work_inquiry_acknowledgment.html",
            include_str!("../templates/work_inquiry_acknowledgment.html"),
        ),
        (
            "newsletter_admin.html",
            include_str!("../templates/newsletter_admin.html"),
        ),
        (
            "newsletter_acknowledgment.html",
            include_str!("../templates/newsletter_acknowledgment.html"),
        ),
    ])
    .expect("Failed to load the notification templates");
    tera
});

/// One outbound email, fully composed and ready to hand to the email client.
pub struct NotificationMessage {
    pub to: SubmitterEmail,
    pub subject: String,
    pub html_body: String,
}

/// Sends the fixed (admin notification, submitter acknowledgment) pair for a
/// validated submission. Pure fan-out: it never touches storage, never
/// retries, and never mutates the entity it is given.
pub struct NotificationDispatcher {
    email_client: EmailClient,
    admin_recipient: SubmitterEmail,
    studio_name: String,
}

impl NotificationDispatcher {
    pub fn new(
        email_client: EmailClient,
        admin_recipient: SubmitterEmail,
        studio_name: String,
    ) -> Self {
        Self {
            email_client,
            admin_recipient,
            studio_name,
        }
    }

    #[tracing::instrument(
        name = "Dispatching contact form notifications",
        skip(self, submission),
        fields(submitter_email = %submission.email)
    )]
    pub async fn dispatch_contact(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), DispatchError> {
        let (admin, acknowledgment) = self.contact_messages(submission)?;
        self.send_pair(admin, acknowledgment).await
    }

    #[tracing::instrument(
        name = "Dispatching work inquiry notifications",
        skip(self, inquiry),
        fields(submitter_email = %inquiry.email)
    )]
    pub async fn dispatch_work_inquiry(&self, inquiry: &WorkInquiry) -> Result<(), DispatchError> {
        let (admin, acknowledgment) = self.work_inquiry_messages(inquiry)?;
        self.send_pair(admin, acknowledgment).await
    }

    #[tracing::instrument(
        name = "Dispatching newsletter notifications",
        skip(self, subscription),
        fields(submitter_email = %subscription.email)
    )]
    pub async fn dispatch_newsletter(
        &self,
        subscription: &NewsletterSubscription,
    ) -> Result<(), DispatchError> {
        let (admin, acknowledgment) = self.newsletter_messages(subscription)?;
        self.send_pair(admin, acknowledgment).await
    }

    fn contact_messages(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(NotificationMessage, NotificationMessage), DispatchError> {
        let mut context = Context::new();
        context.insert("studio_name", &self.studio_name);
        context.insert("name", submission.name.as_ref());
        context.insert("email", submission.email.as_ref());
        // Absent optionals render as empty strings, which the templates
        // treat as falsy.
        context.insert(
            "mobile_number",
            submission
                .mobile_number
                .as_ref()
                .map(AsRef::as_ref)
                .unwrap_or(""),
        );
        context.insert("message", submission.message.as_ref());

        let admin = NotificationMessage {
            to: self.admin_recipient.clone(),
            subject: format!(
                "New Contact Form Submission from {}",
                submission.name.as_ref()
            ),
            html_body: TEMPLATES.render("contact_admin.html", &context)?,
        };
        let acknowledgment = NotificationMessage {
            to: submission.email.clone(),
            subject: format!("We received your message - {}", self.studio_name),
            html_body: TEMPLATES.render("contact_acknowledgment.html", &context)?,
        };
        Ok((admin, acknowledgment))
    }

    fn work_inquiry_messages(
        &self,
        inquiry: &WorkInquiry,
    ) -> Result<(NotificationMessage, NotificationMessage), DispatchError> {
        let mut context = Context::new();
        context.insert("studio_name", &self.studio_name);
        context.insert("name", inquiry.name.as_ref());
        context.insert("email", inquiry.email.as_ref());
        context.insert(
            "company",
            inquiry.company.as_ref().map(AsRef::as_ref).unwrap_or(""),
        );
        context.insert(
            "phone",
            inquiry.phone.as_ref().map(AsRef::as_ref).unwrap_or(""),
        );
        context.insert(
            "budget",
            inquiry.budget.as_ref().map(AsRef::as_ref).unwrap_or(""),
        );
        context.insert("message", inquiry.message.as_ref());

        // The admin subject leads with the company when one was given.
        let from_whom = inquiry
            .company
            .as_ref()
            .unwrap_or(&inquiry.name)
            .as_ref()
            .to_string();
        let admin = NotificationMessage {
            to: self.admin_recipient.clone(),
            subject: format!("New Work Inquiry from {from_whom}"),
            html_body: TEMPLATES.render("work_inquiry_admin.html", &context)?,
        };
        let acknowledgment = NotificationMessage {
            to: inquiry.email.clone(),
            subject: format!("Work Inquiry Received - {}", self.studio_name),
            html_body: TEMPLATES.render("work_inquiry_acknowledgment.html", &context)?,
        };
        Ok((admin, acknowledgment))
    }

    fn newsletter_messages(
        &self,
        subscription: &NewsletterSubscription,
    ) -> Result<(NotificationMessage, NotificationMessage), DispatchError> {
        let mut context = Context::new();
        context.insert("studio_name", &self.studio_name);
        context.insert("email", subscription.email.as_ref());

        let admin = NotificationMessage {
            to: self.admin_recipient.clone(),
            subject: "New Newsletter Subscription".to_string(),
            html_body: TEMPLATES.render("newsletter_admin.html", &context)?,
        };
        let acknowledgment = NotificationMessage {
            to: subscription.email.clone(),
            subject: format!("Welcome to the {} Newsletter", self.studio_name),
            html_body: TEMPLATES.render("newsletter_acknowledgment.html", &context)?,
        };
        Ok((admin, acknowledgment))
    }

    /// The two sends are independent network calls: both legs are always
    /// attempted and both outcomes are folded into the result, so a failure
    /// on one can never mask a failure on the other.
    async fn send_pair(
        &self,
        admin: NotificationMessage,
        acknowledgment: NotificationMessage,
    ) -> Result<(), DispatchError> {
        let (admin_outcome, acknowledgment_outcome) = tokio::join!(
            self.email_client
                .send_email(&admin.to, &admin.subject, &admin.html_body),
            self.email_client.send_email(
                &acknowledgment.to,
                &acknowledgment.subject,
                &acknowledgment.html_body,
            ),
        );
        match (admin_outcome, acknowledgment_outcome) {
            (Ok(()), Ok(())) => Ok(()),
            (Err(admin), Ok(())) => Err(DispatchError::AdminNotification(admin)),
            (Ok(()), Err(acknowledgment)) => Err(DispatchError::Acknowledgment(acknowledgment)),
            (Err(admin), Err(acknowledgment)) => Err(DispatchError::Both {
                admin,
                acknowledgment,
            }),
        }
    }
}

#[derive(thiserror::Error)]
pub enum DispatchError {
    #[error("Failed to render a notification template.")]
    Template(#[from] tera::Error),
    #[error("Failed to send the admin notification.")]
    AdminNotification(#[source] reqwest::Error),
    #[error("Failed to send the acknowledgment email.")]
    Acknowledgment(#[source] reqwest::Error),
    #[error("Failed to send both the admin notification and the acknowledgment email.")]
    Both {
        admin: reqwest::Error,
        acknowledgment: reqwest::Error,
    },
}

impl std::fmt::Debug for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
