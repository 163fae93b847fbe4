pub mod assets;
pub mod config;
pub mod email;
pub mod error;
pub mod observability;
pub mod quote;
pub mod routes;
pub mod server;

pub use config::Config;
pub use routes::AppState;
