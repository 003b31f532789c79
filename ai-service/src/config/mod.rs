use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct AiConfig {
    pub common: core_config::Config,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Name reported in logs and as the OTLP `service.name` resource.
    pub service_name: String,
    /// Fallback filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// OTLP collector endpoint; span export is disabled when absent.
    pub otlp_endpoint: Option<String>,
}

impl AiConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(AiConfig {
            common: common_config,
            observability: ObservabilityConfig {
                service_name: get_env("SERVICE_NAME", Some("ai-service"), is_prod)?,
                log_level: get_env("LOG_LEVEL", Some("info"), is_prod)?,
                otlp_endpoint: env::var("OTLP_ENDPOINT")
                    .ok()
                    .filter(|endpoint| !endpoint.trim().is_empty()),
            },
        })
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            observability: ObservabilityConfig {
                service_name: "ai-service".to_string(),
                log_level: "info".to_string(),
                otlp_endpoint: None,
            },
        }
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_falls_back_to_default_outside_prod() {
        let value = get_env("AI_SERVICE_TEST_UNSET_KEY", Some("fallback"), false).unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn test_get_env_requires_key_in_prod() {
        let err = get_env("AI_SERVICE_TEST_UNSET_KEY", Some("fallback"), true).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
        assert!(err.to_string().contains("required in production"));
    }

    #[test]
    fn test_get_env_without_default_is_an_error() {
        let err = get_env("AI_SERVICE_TEST_UNSET_KEY", None, false).unwrap_err();
        assert!(err.to_string().contains("is required but not set"));
    }

    #[test]
    fn test_default_config_binds_port_8000() {
        let config = AiConfig::default();
        assert_eq!(config.common.port, 8000);
        assert_eq!(config.observability.service_name, "ai-service");
        assert!(config.observability.otlp_endpoint.is_none());
    }
}
