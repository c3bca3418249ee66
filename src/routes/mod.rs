use std::sync::Arc;

use axum::{
    Router,
    routing::{any, get},
};
use folio_contact::Mailer;

mod contact;
mod health;
mod pages;

/// Where the contact form posts inquiries.
pub const CONTACT_ENDPOINT: &str = "/functions/email";

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact_command: folio_contact::Command<Arc<dyn Mailer>>,
}

impl AppState {
    pub fn new(config: crate::config::Config, mailer: Arc<dyn Mailer>) -> Self {
        let settings = config.email.settings();

        Self {
            config,
            contact_command: folio_contact::Command(mailer, settings),
        }
    }
}

/// Pages are not registered one by one: every path that is not an endpoint
/// goes through the route table.
pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(CONTACT_ENDPOINT, any(contact::action))
        .fallback(pages::page)
        .with_state(app_state)
}
