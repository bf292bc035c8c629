use std::env;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_QUEUE_URL: &str = "https://queue.fal.run";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct FalConfig {
    pub api_key: Option<String>,
    pub queue_url: String,
    pub poll_interval_ms: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub images_dir: PathBuf,
    pub chart_dir: PathBuf,
    pub chart_font: Option<PathBuf>,
    pub fal: FalConfig,
}

impl Default for FalConfig {
    fn default() -> Self {
        FalConfig {
            api_key: None,
            queue_url: DEFAULT_QUEUE_URL.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl FalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("FAL_KEY").ok().filter(|key| !key.is_empty());
        let queue_url = env::var("FAL_QUEUE_URL").unwrap_or_else(|_| DEFAULT_QUEUE_URL.to_string());
        let poll_interval_ms = env::var("FAL_POLL_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS);

        FalConfig {
            api_key,
            queue_url,
            poll_interval_ms,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_queue_url(mut self, queue_url: impl Into<String>) -> Self {
        self.queue_url = queue_url.into();
        self
    }

    pub fn with_poll_interval(mut self, millis: u64) -> Self {
        self.poll_interval_ms = millis;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            images_dir: PathBuf::from("images"),
            chart_dir: PathBuf::from("chart"),
            chart_font: None,
            fal: FalConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let defaults = Config::default();
        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(defaults.port);
        let images_dir = env::var("IMAGES_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.images_dir);
        let chart_dir = env::var("CHART_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.chart_dir);
        let chart_font = env::var("CHART_FONT").ok().map(PathBuf::from);

        Config {
            host,
            port,
            images_dir,
            chart_dir,
            chart_font,
            fal: FalConfig::from_env(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_images_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.images_dir = dir.into();
        self
    }

    pub fn with_chart_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.chart_dir = dir.into();
        self
    }

    pub fn with_chart_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.chart_font = Some(path.into());
        self
    }

    pub fn with_fal(mut self, config: FalConfig) -> Self {
        self.fal = config;
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
