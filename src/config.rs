use serde::Deserialize;

pub const ENV_PREFIX: &str = "EVALUATE";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Unset means request bodies are not size-limited
    pub body_limit_bytes: Option<usize>,
}

impl ServerSettings {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            body_limit_bytes: None,
        }
    }
}

/// Where received payloads are rendered.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Banner-framed pretty JSON on stdout
    #[default]
    Console,
    /// A structured `tracing` event
    Tracing,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SinkSettings {
    pub kind: SinkKind,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub sink: SinkSettings,
    pub cors: CorsSettings,
}

impl ServerConfig {
    /// Loads `config.{toml,yaml,json}` if present, then `EVALUATE__*` variables.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_sources(
            config::File::with_name("config").required(false),
            environment(),
        )
    }

    pub fn from_sources<S>(file: S, env: config::Environment) -> anyhow::Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize::<ServerConfig>()?;

        Ok(settings)
    }
}

pub fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
        .try_parsing(true)
}
