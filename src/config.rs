use crate::error::ConfigError;
use secrecy::SecretString;

#[derive(Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub project_id: String,
    pub public_key: SecretString,
}

impl BackendConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::MissingRequired(key.into()))
        };

        let base_url = required("RECORDS_BASE_URL")?;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue("RECORDS_BASE_URL".into()));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: required("RECORDS_PROJECT_ID")?,
            public_key: SecretString::from(required("RECORDS_PUBLIC_KEY")?),
        })
    }
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url)
            .field("project_id", &self.project_id)
            .field("public_key", &"[REDACTED]")
            .finish()
    }
}
