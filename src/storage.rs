//! Insert-only persistence of raw submissions. Optional: the handlers skip
//! these calls entirely when no database is configured. There is no dedup -
//! posting the same payload twice stores two rows.

use crate::domain::{ContactSubmission, NewsletterSubscription, WorkInquiry};
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Saving contact submission to the database", skip(pool, submission))]
pub async fn insert_contact_submission(
    pool: &PgPool,
    submission: &ContactSubmission,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO contact_submissions (id, name, email, mobile_number, message, submitted_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(submission.name.as_ref())
    .bind(submission.email.as_ref())
    .bind(submission.mobile_number.as_ref().map(AsRef::as_ref))
    .bind(submission.message.as_ref())
    .bind(chrono::Utc::now())
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        e
    })?;
    Ok(())
}

#[tracing::instrument(name = "Saving work inquiry to the database", skip(pool, inquiry))]
pub async fn insert_work_inquiry(pool: &PgPool, inquiry: &WorkInquiry) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO work_inquiries (id, name, email, company, phone, message, budget, submitted_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(inquiry.name.as_ref())
    .bind(inquiry.email.as_ref())
    .bind(inquiry.company.as_ref().map(AsRef::as_ref))
    .bind(inquiry.phone.as_ref().map(AsRef::as_ref))
    .bind(inquiry.message.as_ref())
    .bind(inquiry.budget.as_ref().map(AsRef::as_ref))
    .bind(chrono::Utc::now())
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        e
    })?;
    Ok(())
}

#[tracing::instrument(
    name = "Saving newsletter subscription to the database",
    skip(pool, subscription)
)]
pub async fn insert_newsletter_subscription(
    pool: &PgPool,
    subscription: &NewsletterSubscription,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO newsletter_subscriptions (id, email, subscribed_at)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(subscription.email.as_ref())
    .bind(chrono::Utc::now())
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        e
    })?;
    Ok(())
}
