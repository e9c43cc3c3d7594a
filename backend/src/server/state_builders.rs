//! Builders for HTTP handler state.

use actix_web::web;

use backend::domain::{PortfolioService, RecordMapper};
use backend::inbound::http::state::HttpState;

use super::ServerConfig;

/// Wire the portfolio service over the configured store connection.
pub(super) fn build_http_state(config: ServerConfig) -> web::Data<HttpState> {
    let ServerConfig {
        connection,
        seed_content,
        presence,
        ..
    } = config;
    let service = PortfolioService::new(RecordMapper::new(connection), seed_content, presence);
    web::Data::new(HttpState::new(service))
}
