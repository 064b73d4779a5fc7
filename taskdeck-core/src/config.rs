//! Centralized configuration for Taskdeck.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Environment variable holding the task API base address override.
pub const API_URL_ENV: &str = "TASKDECK_API_URL";

/// Central configuration for all Taskdeck components.
///
/// Groups related configuration settings into logical sections.
#[derive(Debug, Clone, Default)]
pub struct TaskdeckConfig {
    /// Request client settings.
    pub api: ApiConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Task persistence settings.
    pub storage: StorageConfig,
}

/// Base network address for the task API.
///
/// Three configurations are distinguished: an explicit base URL, the default
/// development address (when nothing is configured), and "same origin" (an
/// empty configured value), where requests carry only the absolute path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiBase {
    /// Requests are issued against this absolute base URL.
    Url(Url),
    /// Requests carry only the path. Resolution is left to whatever serves
    /// the process, typically a reverse proxy exposing API and pages from
    /// one origin.
    SameOrigin,
}

impl ApiBase {
    /// Default development address used when no override is configured.
    pub const DEFAULT_DEV_URL: &'static str = "http://localhost:8000";

    /// Resolves the base address from an optional configured value.
    ///
    /// Unset falls back to the development default; an empty value selects
    /// same-origin requests. Empty and unset are distinct on purpose.
    pub fn resolve(configured: Option<&str>) -> Self {
        match configured {
            None => Self::default_dev(),
            Some(value) if value.is_empty() => Self::SameOrigin,
            Some(value) => match Url::parse(value) {
                Ok(url) => Self::Url(url),
                Err(err) => {
                    tracing::warn!(
                        "invalid {API_URL_ENV} value '{value}' ({err}), using {}",
                        Self::DEFAULT_DEV_URL
                    );
                    Self::default_dev()
                }
            },
        }
    }

    /// Reads the base address from the [`API_URL_ENV`] environment variable.
    pub fn from_env() -> Self {
        let configured = std::env::var(API_URL_ENV).ok();
        Self::resolve(configured.as_deref())
    }

    /// Joins an absolute API path onto the base address.
    pub fn join(&self, path: &str) -> String {
        match self {
            Self::SameOrigin => path.to_owned(),
            Self::Url(base) => format!("{}{}", base.as_str().trim_end_matches('/'), path),
        }
    }

    fn default_dev() -> Self {
        Self::Url(Url::parse(Self::DEFAULT_DEV_URL).expect("default dev URL is valid"))
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self::default_dev()
    }
}

/// Request client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base network address of the task API.
    pub base: ApiBase,
    /// Per-request timeout; a hung call is aborted after this.
    pub request_timeout: Duration,
    /// User agent for HTTP requests.
    pub user_agent: &'static str,
}

impl ApiConfig {
    /// Builds the request client configuration, reading the base address
    /// override from the environment.
    pub fn from_env() -> Self {
        Self {
            base: ApiBase::from_env(),
            ..Self::default()
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base: ApiBase::default(),
            request_timeout: Duration::from_secs(10),
            user_agent: "taskdeck/0.1.0",
        }
    }
}

/// HTTP server binding configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the task API server listens on.
    pub bind_address: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8000)),
        }
    }
}

/// Task persistence configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Path to the JSON data file, rewritten after every mutation.
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("tasks.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_base_uses_development_default() {
        let base = ApiBase::resolve(None);
        assert_eq!(
            base.join("/api/tasks"),
            "http://localhost:8000/api/tasks"
        );
    }

    #[test]
    fn test_empty_base_means_same_origin() {
        // Empty is not the same as unset: it selects bare-path requests.
        let base = ApiBase::resolve(Some(""));
        assert_eq!(base, ApiBase::SameOrigin);
        assert_eq!(base.join("/api/tasks"), "/api/tasks");
    }

    #[test]
    fn test_explicit_base_is_used_verbatim() {
        let base = ApiBase::resolve(Some("http://tasks.internal:9000"));
        assert_eq!(
            base.join("/api/tasks/3"),
            "http://tasks.internal:9000/api/tasks/3"
        );
    }

    #[test]
    fn test_base_with_path_prefix_keeps_prefix() {
        let base = ApiBase::resolve(Some("http://gateway.local/taskdeck"));
        assert_eq!(
            base.join("/api/tasks"),
            "http://gateway.local/taskdeck/api/tasks"
        );
    }

    #[test]
    fn test_invalid_base_falls_back_to_default() {
        let base = ApiBase::resolve(Some("not a url"));
        assert_eq!(base, ApiBase::resolve(None));
    }

    #[test]
    fn test_default_timeout_is_ten_seconds() {
        assert_eq!(
            ApiConfig::default().request_timeout,
            Duration::from_secs(10)
        );
    }
}
