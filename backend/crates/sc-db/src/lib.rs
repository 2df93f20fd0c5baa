pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database_gateway::DatabaseGateway;
pub use error::{DbError, Result};
pub use repositories::project_request_repository::ProjectRequestRepository;
