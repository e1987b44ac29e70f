use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use gatepost_domain::{GatewayConfig, GatewayMode, RuntimeConfig, DEFAULT_PAGE_SIZE};

use crate::config::validation::validate_base_url;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub gateway_mode: String,
    pub backend_base_url: String,
    pub backend_token: Option<String>,
    pub snapshot_path: String,
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3240".to_string(),
            gateway_mode: "http".to_string(),
            backend_base_url: "http://127.0.0.1:8080/api".to_string(),
            backend_token: None,
            snapshot_path: "./dashboard.json".to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: 200,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("GATEPOST_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            Self::from_toml(&content)?
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| anyhow!("invalid config: {}", err))
    }

    pub fn normalize(&mut self) {
        if let Some(token) = &self.backend_token {
            if token.trim().is_empty() {
                self.backend_token = None;
            }
        }
        self.gateway_mode = self.gateway_mode.trim().to_lowercase();
        self.backend_base_url = self.backend_base_url.trim().trim_end_matches('/').to_string();
        if self.default_page_size > self.max_page_size {
            self.default_page_size = self.max_page_size;
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.snapshot_path = resolve_path(base, &self.snapshot_path);
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        match self.gateway_mode()? {
            GatewayMode::Http => validate_base_url(&self.backend_base_url)?,
            GatewayMode::File => {
                if self.snapshot_path.trim().is_empty() {
                    return Err(anyhow!("snapshot_path must not be empty in file mode"));
                }
            }
        }
        if self.max_page_size == 0 || self.default_page_size == 0 {
            return Err(anyhow!("page sizes must be greater than 0"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn gateway_mode(&self) -> Result<GatewayMode> {
        match self.gateway_mode.as_str() {
            "http" => Ok(GatewayMode::Http),
            "file" => Ok(GatewayMode::File),
            other => Err(anyhow!("unknown gateway_mode: {}", other)),
        }
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    pub fn to_gateway_config(&self) -> Result<GatewayConfig> {
        Ok(GatewayConfig {
            mode: self.gateway_mode()?,
            backend_base_url: self.backend_base_url.clone(),
            backend_token: self.backend_token.clone(),
            snapshot_path: self.snapshot_path.clone(),
            request_timeout_seconds: self.request_timeout_seconds,
        })
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("GATEPOST_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("GATEPOST_GATEWAY_MODE") {
            self.gateway_mode = value;
        }
        if let Ok(value) = env::var("GATEPOST_BACKEND_BASE_URL") {
            self.backend_base_url = value;
        }
        if let Ok(value) = env::var("GATEPOST_BACKEND_TOKEN") {
            self.backend_token = Some(value);
        }
        if let Ok(value) = env::var("GATEPOST_SNAPSHOT_PATH") {
            self.snapshot_path = value;
        }
        if let Ok(value) = env::var("GATEPOST_DEFAULT_PAGE_SIZE") {
            self.default_page_size = value.parse().unwrap_or(self.default_page_size);
        }
        if let Ok(value) = env::var("GATEPOST_MAX_PAGE_SIZE") {
            self.max_page_size = value.parse().unwrap_or(self.max_page_size);
        }
        if let Ok(value) = env::var("GATEPOST_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("GATEPOST_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
