use std::path::Path;

use miette::{Context, IntoDiagnostic, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Holo render configuration
/// We read a toml file, usually named [CONFIG_FILE_NAME], and then let `HOLO_RENDER_HOST`
/// and `HOLO_RENDER_PORT` override what it says. Every field has a default, so an empty file is valid.
pub const CONFIG_FILE_NAME: &str = "holo_render.toml";
pub const HOST_ENV_VAR: &str = "HOLO_RENDER_HOST";
pub const PORT_ENV_VAR: &str = "HOLO_RENDER_PORT";

/// Well known ports of the IPC services exposed by the headset.
pub struct IpcPort;

impl IpcPort {
    pub const UNITY_MESSAGE_QUEUE: u16 = 3816;
}

/// Where a transport should connect: the headset address and the port of the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionTarget {
    pub host: String,
    pub port: u16,
}

impl ConnectionTarget {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
    /// Target the unity message queue, the service which interprets render commands.
    pub fn message_queue(host: impl Into<String>) -> Self {
        Self::new(host, IpcPort::UNITY_MESSAGE_QUEUE)
    }
}

impl std::fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub host: String,
    pub port: u16,
    /// `EnvFilter` directives handed to [crate::trace::init]
    pub log_filter: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: IpcPort::UNITY_MESSAGE_QUEUE,
            log_filter: "info".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| path.display().to_string())
            .wrap_err("failed to read render configuration")?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), device = %config.target(), "render configuration loaded");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .into_diagnostic()
            .wrap_err("failed to deserialize render configuration")
    }

    /// Defaults overridden by the environment.
    pub fn from_env() -> Result<Self> {
        Self::default().apply_env()
    }

    pub fn apply_env(self) -> Result<Self> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    fn apply_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(host) = lookup(HOST_ENV_VAR) {
            self.host = host;
        }
        if let Some(port) = lookup(PORT_ENV_VAR) {
            self.port = port
                .trim()
                .parse()
                .into_diagnostic()
                .wrap_err_with(|| format!("{PORT_ENV_VAR}={port}"))
                .wrap_err("port override is not a valid port number")?;
        }
        Ok(self)
    }

    pub fn target(&self) -> ConnectionTarget {
        ConnectionTarget::new(self.host.clone(), self.port)
    }
}
