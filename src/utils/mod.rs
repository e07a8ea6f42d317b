pub mod csrf;
pub mod host;
pub mod script;
