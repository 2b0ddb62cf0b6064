use crate::calendar_client::CalendarClient;
use crate::configuration::{DatabaseSettings, Settings};
use crate::dispatcher::NotificationDispatcher;
use crate::email_client::EmailClient;
use crate::routes;
use actix_web::{dev::Server, web, App, HttpResponse, HttpServer};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::io::ErrorKind;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn get_connection_pool(configuration: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect_lazy_with(configuration.with_db())
}

/// Every outbound client is built exactly once here and handed to the server
/// as application state - no ambient singletons.
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let connection_pool = configuration.database.as_ref().map(get_connection_pool);

        let sender_email = configuration
            .email_client
            .sender()
            .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;
        let admin_email = configuration
            .email_client
            .admin()
            .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;
        let timeout = configuration.email_client.timeout();
        let email_client = EmailClient::new(
            configuration.email_client.base_url.clone(),
            sender_email,
            configuration.email_client.authorization_token.clone(),
            timeout,
        )
        .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;
        let dispatcher = NotificationDispatcher::new(
            email_client,
            admin_email,
            configuration.email_client.studio_name.clone(),
        );

        let calendar_client = match &configuration.calendar {
            Some(calendar) => Some(
                CalendarClient::new(
                    calendar.base_url.clone(),
                    calendar.calendar_id.clone(),
                    calendar.authorization_token.clone(),
                    timeout,
                )
                .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?,
            ),
            None => None,
        };

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)?;
        // Retrieve the port assigned to us by the OS
        let port = listener.local_addr()?.port();
        let server = run(listener, connection_pool, dispatcher, calendar_client)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// A more expressive name that makes it clear that this function only
    /// returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    db_pool: Option<PgPool>,
    dispatcher: NotificationDispatcher,
    calendar_client: Option<CalendarClient>,
) -> Result<Server, std::io::Error> {
    // Wrap the shared state in smart pointers
    let db_pool = db_pool.map(web::Data::new);
    let dispatcher = web::Data::new(dispatcher);
    let calendar_client = calendar_client.map(web::Data::new);

    let server = HttpServer::new(move || {
        // Malformed JSON gets the same 400 treatment as field errors, with a
        // generic body instead of actix's default plain-text response.
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest()
                    .json(serde_json::json!({ "error": "Invalid JSON payload" })),
            )
            .into()
        });

        let mut app = App::new()
            .wrap(TracingLogger::default())
            .app_data(json_config)
            .route("/health_check", web::get().to(routes::health_check))
            .route("/contact", web::post().to(routes::submit_contact))
            .route("/work-inquiry", web::post().to(routes::submit_work_inquiry))
            .route("/newsletter", web::post().to(routes::subscribe_to_newsletter))
            .app_data(dispatcher.clone());
        // Persistence and the reminder path are optional collaborators;
        // handlers take them as `Option<web::Data<_>>`.
        if let Some(db_pool) = &db_pool {
            app = app.app_data(db_pool.clone());
        }
        if let Some(calendar_client) = &calendar_client {
            app = app.app_data(calendar_client.clone());
        }
        app
    })
    .listen(listener)?
    .run();

    Ok(server)
}
