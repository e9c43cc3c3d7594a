//! HTTP inbound adapter exposing REST endpoints.

pub mod contact;
pub mod error;
pub mod health;
pub mod profile;
pub mod schemas;
pub mod seed;
pub mod state;
pub mod status;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;
use serde_json::json;

use crate::domain::Error;

pub use error::ApiResult;

fn json_body_error(err: &actix_web::error::JsonPayloadError) -> Error {
    Error::invalid_request(format!("request body is not valid JSON: {err}"))
        .with_details(json!({ "code": "invalid_json" }))
}

/// Register the portfolio routes and JSON body handling.
///
/// Callers supply `web::Data<HttpState>`; health probes are registered
/// separately because they use their own state.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use backend::domain::{PortfolioService, RecordMapper, SeedContent, StoreConnection};
/// use backend::inbound::http::{configure, state::HttpState};
///
/// let service = PortfolioService::new(
///     RecordMapper::new(StoreConnection::Disabled),
///     SeedContent::bundled().expect("bundled seed"),
///     Default::default(),
/// );
/// let app = App::new()
///     .app_data(web::Data::new(HttpState::new(service)))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default().error_handler(|err, _req| json_body_error(&err).into()),
    )
    .service(status::root)
    .service(status::diagnostics)
    .service(profile::get_profile)
    .service(profile::list_projects)
    .service(contact::submit_contact)
    .service(seed::seed_portfolio);
}
