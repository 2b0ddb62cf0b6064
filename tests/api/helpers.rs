use formdesk::configuration::{get_configuration, CalendarSettings};
use formdesk::startup::Application;
use formdesk::telemetry;
use once_cell::sync::Lazy;
use secrecy::Secret;
use wiremock::MockServer;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // We cannot assign the output of `get_subscriber` to a variable based on
    // the value of TEST_LOG because the sink is part of the type returned by
    // `get_subscriber`, therefore they are not the same type.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        telemetry::init_subscriber(subscriber);
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        telemetry::init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub calendar_server: MockServer,
    pub admin_email: String,
}

impl TestApp {
    pub async fn post_contact(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/contact", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_work_inquiry(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/work-inquiry", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_newsletter(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/newsletter", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is
    // executed. All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    // Mock servers stand in for the hosted email and calendar APIs
    let email_server = MockServer::start().await;
    let calendar_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.port = 0;
        // The suite exercises the stateless pipeline; no Postgres required
        c.database = None;
        c.email_client.base_url = email_server.uri();
        c.email_client.admin_email = "studio@arcline.example".to_string();
        c.calendar = Some(CalendarSettings {
            base_url: calendar_server.uri(),
            calendar_id: "primary".to_string(),
            authorization_token: Secret::new("calendar-token".to_string()),
        });
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application");
    let port = application.port();
    let address = format!("http://127.0.0.1:{port}");

    // Launch the server as a background task
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        email_server,
        calendar_server,
        admin_email: "studio@arcline.example".to_string(),
    }
}
