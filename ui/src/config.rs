use secrecy::SecretString;

pub const DATA_SERVICE_URL: &str = "DATA_SERVICE_URL";
pub const DATA_SERVICE_KEY: &str = "DATA_SERVICE_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

pub struct Config {
    /// Base url of the hosted data service, without the `/rest/v1` suffix
    pub data_service_url: String,
    /// Key sent as both `apikey` and bearer token
    pub api_key: SecretString,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let data_service_url = lookup(DATA_SERVICE_URL)
            .ok_or(ConfigError::Missing(DATA_SERVICE_URL))?
            .trim()
            .to_string();
        if !data_service_url.starts_with("http://")
            && !data_service_url.starts_with("https://")
        {
            return Err(ConfigError::Invalid {
                name: DATA_SERVICE_URL,
                reason: format!("expected an http(s) url, got '{data_service_url}'"),
            });
        }

        let api_key = lookup(DATA_SERVICE_KEY)
            .ok_or(ConfigError::Missing(DATA_SERVICE_KEY))?;
        if api_key.is_empty() {
            return Err(ConfigError::Invalid {
                name: DATA_SERVICE_KEY,
                reason: "key is empty".into(),
            });
        }

        Ok(Config {
            data_service_url,
            api_key: SecretString::from(api_key),
        })
    }
}
