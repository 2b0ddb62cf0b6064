use crate::domain::SubmitterEmail;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

/// A thin client for the hosted transactional-email API. Constructed once at
/// startup and shared across requests; holds the only `reqwest::Client` used
/// for email traffic so connection pooling works as intended.
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: SubmitterEmail,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: SubmitterEmail,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        })
    }

    /// One outbound network call per invocation, no retries. Non-2xx
    /// responses are surfaced as errors via `error_for_status`.
    pub async fn send_email(
        &self,
        recipient: &SubmitterEmail,
        subject: &str,
        html_body: &str,
    ) -> Result<(), reqwest::Error> {
        let url = format!("{}/email", self.base_url);
        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: recipient.as_ref(),
            subject,
            html_body,
        };
        self.http_client
            .post(&url)
            .header(
                "X-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
}
