use anyhow::Result;
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,

    // CORS
    pub cors_allow_origins: Vec<String>,
    pub max_body_bytes: usize,

    // Pricing
    pub pricing_config_path: Option<String>,
    /// Unrecognized siding/stories/prep/quality values are rejected instead of
    /// falling back to a 1.0 multiplier
    pub strict_enums: bool,

    // Wizard
    pub service_area_postal_codes: Vec<String>,
    pub estimate_debounce_ms: u64,
    pub session_ttl_seconds: u64,

    // Remote evaluator
    pub estimator_url: Option<String>,
    pub estimator_timeout_seconds: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup; missing or malformed values take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let parsed = |key: &str, default: u64| {
            var(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };
        let list = |key: &str, default: &str| -> Vec<String> {
            var(key)
                .unwrap_or_else(|| default.to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        };

        let env = Environment::from_str(&var("ENV").unwrap_or_else(|| "dev".to_string()));
        let server_addr = var("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());

        // CORS
        let cors_allow_origins = list("CORS_ALLOW_ORIGINS", "http://localhost:3000");
        let max_body_bytes = parsed("MAX_BODY_BYTES", 256 * 1024) as usize;

        // Pricing
        let pricing_config_path = var("PRICING_CONFIG_PATH");
        let strict_enums = var("STRICT_ENUMS")
            .map(|s| matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        // Wizard
        let service_area_postal_codes = list("SERVICE_AREA_POSTAL_CODES", "");
        let estimate_debounce_ms = parsed("ESTIMATE_DEBOUNCE_MS", 500);
        let session_ttl_seconds = parsed("SESSION_TTL_SECONDS", 3600); // 1 hour default

        // Remote evaluator
        let estimator_url = var("ESTIMATOR_URL");
        let estimator_timeout_seconds = parsed("ESTIMATOR_TIMEOUT_SECONDS", 10);

        Ok(Settings {
            env,
            server_addr,
            cors_allow_origins,
            max_body_bytes,
            pricing_config_path,
            strict_enums,
            service_area_postal_codes,
            estimate_debounce_ms,
            session_ttl_seconds,
            estimator_url,
            estimator_timeout_seconds,
        })
    }
}
