use std::time::Duration;

use polyglot_chatgpt::ChatGptTranslator;
use polyglot_google::GoogleTranslator;
use polyglot_interface::credential::{CredentialSource, ProcessEnv};
use polyglot_papago::PapagoTranslator;
use serde::{Deserialize, Serialize};

use crate::Backend;

fn default_source() -> String {
    "auto".to_string()
}

fn default_chatgpt_target() -> String {
    "english".to_string()
}

fn default_target() -> String {
    "en".to_string()
}

fn default_model() -> String {
    polyglot_chatgpt::DEFAULT_MODEL.to_string()
}

fn default_chatgpt_endpoint() -> String {
    polyglot_chatgpt::DEFAULT_ENDPOINT.to_string()
}

fn default_papago_endpoint() -> String {
    polyglot_papago::DEFAULT_ENDPOINT.to_string()
}

fn default_spacing_ms() -> u64 {
    polyglot_google::DEFAULT_SPACING.as_millis() as u64
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    #[error("failed to build translator")]
    Build(#[from] polyglot_interface::error::Error),
}

/// Settings shared by every backend.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    pub proxy: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl NetworkConfig {
    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatGptConfig {
    /// Falls back to `OPENAI_API_KEY`
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_chatgpt_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_chatgpt_target")]
    pub target: String,
    #[serde(flatten)]
    pub network: NetworkConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GoogleConfig {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_target")]
    pub target: String,
    /// Minimum time between two requests
    #[serde(default = "default_spacing_ms")]
    pub spacing_ms: u64,
    #[serde(flatten)]
    pub network: NetworkConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PapagoConfig {
    /// Falls back to `PAPAGO_CLIENT_ID`
    #[serde(default)]
    pub client_id: Option<String>,
    /// Falls back to `PAPAGO_SECRET_KEY`
    #[serde(default)]
    pub secret_key: Option<String>,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_target")]
    pub target: String,
    #[serde(default = "default_papago_endpoint")]
    pub endpoint: String,
    #[serde(flatten)]
    pub network: NetworkConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum BackendConfig {
    ChatGpt(ChatGptConfig),
    Google(GoogleConfig),
    Papago(PapagoConfig),
}

impl BackendConfig {
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Builds the translator, reading missing credentials from the process
    /// environment.
    pub fn build(&self) -> Result<Backend, ConfigError> {
        self.build_with(&ProcessEnv)
    }

    pub fn build_with(&self, env: &dyn CredentialSource) -> Result<Backend, ConfigError> {
        let backend = match self.clone() {
            BackendConfig::ChatGpt(c) => {
                let mut b = ChatGptTranslator::builder()
                    .model(c.model)
                    .endpoint(c.endpoint)
                    .source(c.source)
                    .target(c.target);
                if let Some(key) = c.api_key {
                    b = b.api_key(key);
                }
                if let Some(prompt) = c.system_prompt {
                    b = b.system_prompt(prompt);
                }
                if let Some(proxy) = &c.network.proxy {
                    b = b.proxy(proxy);
                }
                if let Some(timeout) = c.network.timeout() {
                    b = b.timeout(timeout);
                }
                Backend::ChatGpt(b.build_with(env)?)
            }
            BackendConfig::Google(c) => {
                let mut b = GoogleTranslator::builder()
                    .source(c.source)
                    .target(c.target)
                    .spacing(Duration::from_millis(c.spacing_ms));
                if let Some(proxy) = &c.network.proxy {
                    b = b.proxy(proxy);
                }
                if let Some(timeout) = c.network.timeout() {
                    b = b.timeout(timeout);
                }
                Backend::Google(b.build()?)
            }
            BackendConfig::Papago(c) => {
                let mut b = PapagoTranslator::builder()
                    .endpoint(c.endpoint)
                    .source(c.source)
                    .target(c.target);
                if let Some(id) = c.client_id {
                    b = b.client_id(id);
                }
                if let Some(secret) = c.secret_key {
                    b = b.secret_key(secret);
                }
                if let Some(proxy) = &c.network.proxy {
                    b = b.proxy(proxy);
                }
                if let Some(timeout) = c.network.timeout() {
                    b = b.timeout(timeout);
                }
                Backend::Papago(b.build_with(env)?)
            }
        };
        log::debug!("built {} translator", self.provider());
        Ok(backend)
    }

    pub fn provider(&self) -> &'static str {
        match self {
            BackendConfig::ChatGpt(_) => "chatgpt",
            BackendConfig::Google(_) => "google",
            BackendConfig::Papago(_) => "papago",
        }
    }
}
