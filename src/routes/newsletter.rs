use crate::dispatcher::NotificationDispatcher;
use crate::domain::{NewsletterPayload, NewsletterSubscription};
use crate::routes::SubmissionError;
use crate::storage;
use actix_web::{web, HttpResponse};
use anyhow::Context;
use sqlx::PgPool;

#[tracing::instrument(
    name = "Handling a newsletter signup",
    skip_all,
    fields(submitter_email = tracing::field::Empty)
)]
pub async fn subscribe_to_newsletter(
    payload: web::Json<NewsletterPayload>,
    pool: Option<web::Data<PgPool>>,
    dispatcher: web::Data<NotificationDispatcher>,
) -> Result<HttpResponse, SubmissionError> {
    let subscription =
        NewsletterSubscription::try_from(payload.into_inner()).map_err(SubmissionError::Validation)?;
    tracing::Span::current().record(
        "submitter_email",
        tracing::field::display(&subscription.email),
    );

    if let Some(pool) = pool.as_deref() {
        storage::insert_newsletter_subscription(pool, &subscription)
            .await
            .context("Failed to store the newsletter subscription")?;
    }

    dispatcher.dispatch_newsletter(&subscription).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Subscribed successfully" })))
}
