use std::env;

/// Connection settings for the external generation backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            endpoint: None,
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl BackendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let endpoint = env::var("PROMPTGRID_BACKEND_URL").ok();
        let api_key = env::var("PROMPTGRID_BACKEND_API_KEY").ok();
        let timeout_secs = env::var("PROMPTGRID_BACKEND_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok());

        BackendConfig {
            endpoint,
            api_key,
            timeout_secs,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}

/// Bind settings for the optional HTTP surface.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: None,
            port: None,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let bind_address = env::var("BIND_ADDRESS").ok();
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());

        ServerConfig { bind_address, port }
    }

    pub fn with_bind_address(mut self, bind_address: impl Into<String>) -> Self {
        self.bind_address = Some(bind_address.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: Option<BackendConfig>,
    pub server: Option<ServerConfig>,
    pub output_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            backend: None,
            server: None,
            output_dir: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Config {
            backend: Some(BackendConfig::from_env()),
            server: Some(ServerConfig::from_env()),
            output_dir: env::var("PROMPTGRID_OUTPUT_DIR").ok(),
        }
    }

    pub fn with_backend(mut self, config: BackendConfig) -> Self {
        self.backend = Some(config);
        self
    }

    pub fn with_server(mut self, config: ServerConfig) -> Self {
        self.server = Some(config);
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }
}
