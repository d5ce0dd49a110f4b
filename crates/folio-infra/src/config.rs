//! Configuration loader for Folio.
//!
//! Non-secret settings come from `{config_dir}/config.toml` ([`SiteConfig`]);
//! credentials come from the environment. Both are read once at startup into
//! a [`FolioConfig`] that is passed to whatever needs it.
//!
//! The backend has two credentials with different privileges: the service
//! role key (server only, bypasses row-level security) and the anon key
//! (restricted, safe to hand to the form's fallback write). They live in
//! separate fields so the server never falls back to the public key and the
//! client never sees the service key.

use std::path::{Path, PathBuf};

use secrecy::SecretString;

use folio_types::config::SiteConfig;

pub const ENV_SERVICE_URL: &str = "SUPABASE_URL";
pub const ENV_SERVICE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";
pub const ENV_PUBLIC_URL: &str = "SUPABASE_PUBLIC_URL";
pub const ENV_PUBLIC_KEY: &str = "SUPABASE_ANON_KEY";
pub const ENV_RESEND_KEY: &str = "RESEND_API_KEY";
pub const ENV_FROM_EMAIL: &str = "FROM_EMAIL";
pub const ENV_NOTIFY_EMAIL: &str = "NOTIFY_EMAIL";
pub const ENV_CONFIG_DIR: &str = "FOLIO_CONFIG_DIR";

/// URL and key for one privilege level of the data backend.
#[derive(Debug)]
pub struct BackendAccess {
    pub url: String,
    pub key: SecretString,
}

/// Email provider credentials and notification route.
#[derive(Debug)]
pub struct EmailSettings {
    pub api_key: SecretString,
    /// Sender address, e.g. `no-reply@example.dev`.
    pub from: String,
    /// Inbox that receives contact notifications.
    pub to: String,
}

/// Everything the binary needs, resolved once at startup.
#[derive(Debug)]
pub struct FolioConfig {
    pub site: SiteConfig,
    /// Privileged backend access for the contact handler and loaders.
    pub service_backend: Option<BackendAccess>,
    /// Restricted backend access for the form's fallback write.
    pub public_backend: Option<BackendAccess>,
    pub email: Option<EmailSettings>,
}

impl FolioConfig {
    /// Resolve credentials from the process environment.
    pub fn from_env(site: SiteConfig) -> Self {
        Self::from_lookup(site, |key| std::env::var(key).ok())
    }

    /// Resolve credentials through `lookup`. Empty values count as unset.
    pub fn from_lookup(site: SiteConfig, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let service_backend = match (get(ENV_SERVICE_URL), get(ENV_SERVICE_KEY)) {
            (Some(url), Some(key)) => Some(BackendAccess {
                url,
                key: SecretString::from(key),
            }),
            _ => None,
        };

        let public_backend = match (
            get(ENV_PUBLIC_URL).or_else(|| get(ENV_SERVICE_URL)),
            get(ENV_PUBLIC_KEY),
        ) {
            (Some(url), Some(key)) => Some(BackendAccess {
                url,
                key: SecretString::from(key),
            }),
            _ => {
                tracing::warn!(
                    "{ENV_PUBLIC_KEY} or backend URL not set, direct backend fallback is disabled"
                );
                None
            }
        };

        let email = match (get(ENV_RESEND_KEY), get(ENV_FROM_EMAIL), get(ENV_NOTIFY_EMAIL)) {
            (Some(api_key), Some(from), Some(to)) => Some(EmailSettings {
                api_key: SecretString::from(api_key),
                from,
                to,
            }),
            (None, None, None) => None,
            _ => {
                tracing::warn!(
                    "incomplete email settings ({ENV_RESEND_KEY}, {ENV_FROM_EMAIL}, {ENV_NOTIFY_EMAIL}), notifications disabled"
                );
                None
            }
        };

        Self {
            site,
            service_backend,
            public_backend,
            email,
        }
    }
}

/// Resolve the configuration directory.
///
/// `FOLIO_CONFIG_DIR` wins; otherwise `~/.folio`, or `.folio` in the working
/// directory when no home directory is known.
pub fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|home| home.join(".folio"))
        .unwrap_or_else(|| PathBuf::from(".folio"))
}

/// Load site configuration from `{config_dir}/config.toml`.
///
/// - If the file does not exist, returns [`SiteConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_site_config(config_dir: &Path) -> SiteConfig {
    let config_path = config_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return SiteConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return SiteConfig::default();
        }
    };

    match toml::from_str::<SiteConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            SiteConfig::default()
        }
    }
}

/// Load the full configuration: `config.toml` plus environment credentials.
pub async fn load_config() -> FolioConfig {
    let site = load_site_config(&resolve_config_dir()).await;
    FolioConfig::from_env(site)
}
