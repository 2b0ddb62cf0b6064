pub mod calendar_client;
pub mod configuration;
pub mod dispatcher;
pub mod domain;
pub mod email_client;
pub mod routes;
pub mod startup;
pub mod storage;
pub mod telemetry;
mod utils;
