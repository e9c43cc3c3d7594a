//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and only reach the
//! store via the portfolio service.

use std::sync::Arc;

use crate::domain::PortfolioService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Portfolio use cases.
    pub portfolio: Arc<PortfolioService>,
}

impl HttpState {
    /// Bundle the portfolio service for handlers.
    #[must_use]
    pub fn new(portfolio: PortfolioService) -> Self {
        Self {
            portfolio: Arc::new(portfolio),
        }
    }
}
