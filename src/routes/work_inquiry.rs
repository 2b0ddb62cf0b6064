use crate::dispatcher::NotificationDispatcher;
use crate::domain::{WorkInquiry, WorkInquiryPayload};
use crate::routes::SubmissionError;
use crate::storage;
use actix_web::{web, HttpResponse};
use anyhow::Context;
use sqlx::PgPool;

#[tracing::instrument(
    name = "Handling a work inquiry",
    skip_all,
    fields(submitter_email = tracing::field::Empty)
)]
pub async fn submit_work_inquiry(
    payload: web::Json<WorkInquiryPayload>,
    pool: Option<web::Data<PgPool>>,
    dispatcher: web::Data<NotificationDispatcher>,
) -> Result<HttpResponse, SubmissionError> {
    let inquiry =
        WorkInquiry::try_from(payload.into_inner()).map_err(SubmissionError::Validation)?;
    tracing::Span::current().record("submitter_email", tracing::field::display(&inquiry.email));

    if let Some(pool) = pool.as_deref() {
        storage::insert_work_inquiry(pool, &inquiry)
            .await
            .context("Failed to store the work inquiry")?;
    }

    dispatcher.dispatch_work_inquiry(&inquiry).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
