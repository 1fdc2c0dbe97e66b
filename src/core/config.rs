use std::net::SocketAddr;
use std::time::Duration;
use log::LevelFilter;

pub trait PhonebookConfig: Send + Sync {
    fn api_url(&self) -> &str;
    fn notification_timeout(&self) -> Duration;
}

pub trait Config: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn addr(&self) -> &SocketAddr;

    fn database(&self) -> &str;

    fn log_level(&self) -> LevelFilter;
    fn log_file(&self) -> Option<&str>;

    fn phonebook(&self) -> &dyn PhonebookConfig;

    #[cfg(feature = "inspect")]
    fn dump(&self);
}
