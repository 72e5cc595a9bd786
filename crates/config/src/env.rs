use serde::Deserialize;
use std::env;
use tasklens_common::error::{TasklensError, TasklensResult};

/// Custom field Jira Cloud uses for sprints unless a site remaps it.
pub const DEFAULT_SPRINT_FIELD: &str = "customfield_10020";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub cors_origins: Vec<String>,
    pub jira: JiraConfig,
}

/// Upstream Jira site and the service-account credential used for every call.
#[derive(Clone, Deserialize)]
pub struct JiraConfig {
    pub domain: String,
    pub email: String,
    pub api_token: String,
    pub filter_id: String,
    pub sprint_field: String,
    pub timeout_secs: u64,
}

// Hand-written so the token never ends up in logs.
impl std::fmt::Debug for JiraConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraConfig")
            .field("domain", &self.domain)
            .field("email", &self.email)
            .field("api_token", &"<redacted>")
            .field("filter_id", &self.filter_id)
            .field("sprint_field", &self.sprint_field)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present, then reads required vars.
    pub fn from_env() -> TasklensResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        Ok(Self {
            host: get_var_or("HOST", "0.0.0.0"),
            port: get_var_or("PORT", "3001")
                .parse()
                .map_err(|e| TasklensError::Config(format!("invalid PORT: {e}")))?,
            log_level: get_var_or("LOG_LEVEL", "info"),
            cors_origins: parse_csv(&get_var_or(
                "CORS_ORIGINS",
                "http://localhost:5173,http://localhost:3000",
            )),
            jira: JiraConfig::from_env()?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl JiraConfig {
    pub fn from_env() -> TasklensResult<Self> {
        let domain = get_var("JIRA_DOMAIN")?;
        Ok(Self {
            domain: domain.trim_end_matches('/').to_owned(),
            email: get_var("JIRA_EMAIL")?,
            api_token: get_var("JIRA_API_TOKEN")?,
            filter_id: get_var("JIRA_FILTER_ID")?,
            sprint_field: get_var_or("JIRA_SPRINT_FIELD", DEFAULT_SPRINT_FIELD),
            timeout_secs: get_var_or("JIRA_TIMEOUT_SECS", "30")
                .parse()
                .map_err(|e| TasklensError::Config(format!("invalid JIRA_TIMEOUT_SECS: {e}")))?,
        })
    }
}

fn get_var(key: &str) -> TasklensResult<String> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(TasklensError::Config(format!("{key} is required but not set"))),
    }
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect()
}
