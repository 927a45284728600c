pub mod envelope;
pub mod errors;
pub mod extract;
pub mod openapi;
pub mod routes;
pub mod startup;

pub use routes::{build_router, ServerState};
pub use startup::{build_app, run};
