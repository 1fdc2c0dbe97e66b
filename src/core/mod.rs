pub mod config;
pub mod default_configuration;
pub mod error;
pub mod logger;
pub mod object_id;
pub mod server;

pub use error::{Error, Result};
