pub mod client;
pub mod errors;
#[cfg(test)]
pub mod mock_oauth;
pub mod models;
pub mod provider;
pub mod service;
