use std::fmt;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use serde::Deserialize;
use log::LevelFilter;

use crate::core::{
    config::Config,
    config::PhonebookConfig,
    error::{Error, Result},
};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3003;
pub const DEFAULT_DATABASE: &str = "blogs.db";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3001";
pub const DEFAULT_NOTIFICATION_TIMEOUT: u64 = 5;

#[derive(Clone, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : Option<String>,
    #[serde(rename = "logFile")]
    file    : Option<String>,
}

#[derive(Clone, Deserialize)]
struct PhonebookCfg {
    #[serde(rename = "apiUrl")]
    api_url : Option<String>,
    // in seconds.
    #[serde(rename = "notificationTimeout")]
    timeout : Option<u64>,
}

#[derive(Clone, Deserialize)]
struct ConfigFile {
    #[serde(rename = "host")]
    host        : Option<String>,
    #[serde(rename = "port")]
    port        : Option<u16>,
    #[serde(rename = "database")]
    database    : Option<String>,

    #[serde(rename = "logger")]
    logger      : Option<LogCfg>,
    #[serde(rename = "phonebook")]
    phonebook   : Option<PhonebookCfg>,
}

#[derive(Clone)]
struct PhonebookSettings {
    api_url     : String,
    timeout     : Duration,
}

struct Configuration {
    host        : String,
    port        : u16,
    addr        : SocketAddr,
    database    : String,

    log_level   : LevelFilter,
    log_file    : Option<String>,

    phonebook   : PhonebookSettings,
}

pub struct Builder<'a> {
    host        : Option<&'a str>,
    port        : Option<u16>,
    default_port: Option<u16>,
    database    : Option<String>,

    log_level   : Option<LevelFilter>,
    log_file    : Option<&'a str>,

    api_url     : Option<&'a str>,
    timeout     : Option<Duration>,

    cfg         : Option<ConfigFile>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            host        : None,
            port        : None,
            default_port: None,
            database    : None,
            log_level   : None,
            log_file    : None,
            api_url     : None,
            timeout     : None,
            cfg         : None,
        }
    }

    pub fn with_host(&mut self, host: &'a str) -> &mut Self {
        self.host = Some(host);
        self
    }

    pub fn with_port(&mut self, port: u16) -> &mut Self {
        self.port = Some(port);
        self
    }

    /// Port used when neither the builder nor the loaded file sets one.
    pub fn with_default_port(&mut self, port: u16) -> &mut Self {
        self.default_port = Some(port);
        self
    }

    pub fn with_database(&mut self, input: &str) -> &mut Self {
        let database = match input.strip_prefix("~/") {
            Some(rest) => match std::env::var("HOME") {
                Ok(home) => format!("{}/{}", home, rest),
                Err(_) => input.to_string(),
            },
            None => input.to_string(),
        };
        self.database = Some(database);
        self
    }

    pub fn with_logger(&mut self, level: LevelFilter, file: Option<&'a str>) -> &mut Self {
        self.log_level = Some(level);
        self.log_file = file;
        self
    }

    pub fn with_api_url(&mut self, url: &'a str) -> &mut Self {
        self.api_url = Some(url);
        self
    }

    pub fn with_notification_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn load(&mut self, input: &str) -> Result<&mut Self> {
        let data = fs::read_to_string(input).map_err(|e| {
            Error::Io(format!("Reading config {} error: {}", input, e))
        })?;

        let cfg = serde_json::from_str::<ConfigFile>(&data).map_err(|e| {
            Error::Argument(format!("bad config, error: {}", e))
        })?;

        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)?))
    }
}

impl Configuration {
    // Builder values take precedence over the loaded file, which takes
    // precedence over the defaults.
    fn new(b: &Builder) -> Result<Self> {
        let file = b.cfg.as_ref();

        let host = b.host.map(|v| v.to_string())
            .or_else(|| file.and_then(|v| v.host.clone()))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = b.port
            .or_else(|| file.and_then(|v| v.port))
            .or(b.default_port)
            .unwrap_or(DEFAULT_PORT);

        let ip = host.parse::<IpAddr>()?;
        let addr = SocketAddr::new(ip, port);

        let database = b.database.clone()
            .or_else(|| file.and_then(|v| v.database.clone()))
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        if database.is_empty() {
            return Err(Error::Argument("Database path must not be empty".into()));
        }

        let logger = file.and_then(|v| v.logger.as_ref());
        let log_level = match b.log_level {
            Some(level) => level,
            None => logger.and_then(|v| v.level.as_ref())
                .and_then(|v| v.parse::<LevelFilter>().ok())
                .unwrap_or(LevelFilter::Info),
        };
        let log_file = b.log_file.map(|v| v.to_string())
            .or_else(|| logger.and_then(|v| v.file.clone()));

        let pcfg = file.and_then(|v| v.phonebook.as_ref());
        let api_url = b.api_url.map(|v| v.to_string())
            .or_else(|| pcfg.and_then(|v| v.api_url.clone()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        url::Url::parse(&api_url)?;

        let timeout = b.timeout
            .or_else(|| pcfg.and_then(|v| v.timeout).map(Duration::from_secs))
            .unwrap_or(Duration::from_secs(DEFAULT_NOTIFICATION_TIMEOUT));

        Ok(Self {
            host,
            port,
            addr,
            database,
            log_level,
            log_file,
            phonebook: PhonebookSettings { api_url, timeout },
        })
    }
}

impl Config for Configuration {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn addr(&self) -> &SocketAddr {
        &self.addr
    }

    fn database(&self) -> &str {
        &self.database
    }

    fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    fn phonebook(&self) -> &dyn PhonebookConfig {
        &self.phonebook
    }

    #[cfg(feature = "inspect")]
    fn dump(&self) {
        println!("config: {}", self);
    }
}

impl PhonebookConfig for PhonebookSettings {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn notification_timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "addr:{},", self.addr)?;
        write!(f, "\tdatabase:{},", self.database)?;
        write!(f, "\tlog:{}", self.log_level)?;
        if let Some(file) = self.log_file.as_ref() {
            write!(f, "@{}", file)?;
        }
        write!(f, ",\tapi:{}", self.phonebook.api_url)
    }
}
