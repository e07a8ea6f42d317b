pub mod authorize;
pub mod callback;
pub mod errors;
pub mod gate;
pub mod handshake;
pub(crate) mod helpers;
