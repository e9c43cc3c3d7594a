//! Test helpers for inbound HTTP components.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error as ActixError, web};

use crate::domain::{
    PortfolioService, RecordMapper, SeedContent, StoreConfigPresence, StoreConnection,
};
use crate::outbound::memory::MemoryDocumentStore;

use super::state::HttpState;

/// Portfolio service over `connection` with the bundled seed content.
pub fn portfolio(connection: StoreConnection) -> PortfolioService {
    let configured = connection.is_connected();
    PortfolioService::new(
        RecordMapper::new(connection),
        SeedContent::bundled().expect("bundled seed validates"),
        StoreConfigPresence {
            url: configured,
            name: configured,
        },
    )
}

/// Portfolio service over a fresh memory store, returning both.
pub fn memory_portfolio() -> (PortfolioService, MemoryDocumentStore) {
    let store = MemoryDocumentStore::new("portfolio");
    (
        portfolio(StoreConnection::connected(store.clone())),
        store,
    )
}

/// App with every portfolio route registered over `service`.
pub fn test_app(
    service: PortfolioService,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = ActixError,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(service)))
        .configure(super::configure)
}
