use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

const REMINDER_SUMMARY: &str = "Check inbox for recent submission";
const REMINDER_DESCRIPTION: &str = "Please check your inbox for details of a recent submission \
made to the studio website.\nOutbound contact should be initiated within the first 8 hours to \
increase the likelihood of conversion.";
const REMINDER_DURATION_MINUTES: i64 = 15;
const FIRST_REMINDER_DELAY_HOURS: i64 = 2;
const SECOND_REMINDER_DELAY_HOURS: i64 = 6;

/// Client for the hosted calendar API used by the legacy follow-up reminder
/// path. Only ever exercised as a best-effort side effect.
pub struct CalendarClient {
    http_client: Client,
    base_url: String,
    calendar_id: String,
    authorization_token: Secret<String>,
}

impl CalendarClient {
    pub fn new(
        base_url: String,
        calendar_id: String,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
            calendar_id,
            authorization_token,
        })
    }

    /// Insert the two follow-up reminders for a fresh contact submission:
    /// one at now+2h, one at now+6h, each 15 minutes long.
    ///
    /// Both inserts are always attempted. Failures are logged and swallowed
    /// here - by contract they must never change the outcome of the
    /// submission that triggered them.
    #[tracing::instrument(name = "Scheduling follow-up reminders", skip(self))]
    pub async fn schedule_submission_reminders(&self) {
        let now = Utc::now();
        let (first, second) = tokio::join!(
            self.insert_reminder(now + Duration::hours(FIRST_REMINDER_DELAY_HOURS)),
            self.insert_reminder(now + Duration::hours(SECOND_REMINDER_DELAY_HOURS)),
        );
        if let Err(error) = first {
            tracing::warn!(
                error.cause_chain = ?error,
                "Failed to insert the first follow-up reminder"
            );
        }
        if let Err(error) = second {
            tracing::warn!(
                error.cause_chain = ?error,
                "Failed to insert the second follow-up reminder"
            );
        }
    }

    async fn insert_reminder(&self, start: DateTime<Utc>) -> Result<(), reqwest::Error> {
        let end = start + Duration::minutes(REMINDER_DURATION_MINUTES);
        let url = format!(
            "{}/calendars/{}/events",
            self.base_url, self.calendar_id
        );
        let request_body = InsertEventRequest {
            summary: REMINDER_SUMMARY,
            description: REMINDER_DESCRIPTION,
            start: EventTime {
                date_time: start.to_rfc3339(),
            },
            end: EventTime {
                date_time: end.to_rfc3339(),
            },
        };
        self.http_client
            .post(&url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct InsertEventRequest<'a> {
    summary: &'a str,
    description: &'a str,
    start: EventTime,
    end: EventTime,
}

#[derive(serde::Serialize)]
struct EventTime {
    #[serde(rename = "dateTime")]
    date_time: String,
}
