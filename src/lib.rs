pub mod config;
pub mod responses;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::app;
pub use state::AppState;
