use crate::calendar_client::CalendarClient;
use crate::dispatcher::NotificationDispatcher;
use crate::domain::{ContactPayload, ContactSubmission};
use crate::routes::SubmissionError;
use crate::storage;
use actix_web::{web, HttpResponse};
use anyhow::Context;
use sqlx::PgPool;

/// Terminal one-pass pipeline: validate, persist (when a database is
/// configured), dispatch the notification pair, then fire the best-effort
/// follow-up reminders. A validation failure short-circuits before any side
/// effect has occurred.
#[tracing::instrument(
    name = "Handling a contact form submission",
    skip_all,
    fields(submitter_email = tracing::field::Empty)
)]
pub async fn submit_contact(
    payload: web::Json<ContactPayload>,
    pool: Option<web::Data<PgPool>>,
    dispatcher: web::Data<NotificationDispatcher>,
    calendar_client: Option<web::Data<CalendarClient>>,
) -> Result<HttpResponse, SubmissionError> {
    let submission =
        ContactSubmission::try_from(payload.into_inner()).map_err(SubmissionError::Validation)?;
    tracing::Span::current().record(
        "submitter_email",
        tracing::field::display(&submission.email),
    );

    if let Some(pool) = pool.as_deref() {
        storage::insert_contact_submission(pool, &submission)
            .await
            .context("Failed to store the contact submission")?;
    }

    dispatcher.dispatch_contact(&submission).await?;

    // Best-effort: reminder failures are logged inside the client and never
    // alter the response.
    if let Some(calendar_client) = calendar_client.as_deref() {
        calendar_client.schedule_submission_reminders().await;
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
