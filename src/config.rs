// src/config.rs
use crate::infrastructure::{
    ai::gemini::{DEFAULT_GEMINI_API_BASE, DEFAULT_GEMINI_MODEL},
    ledger::{
        ServiceAccountCredentials,
        auth::DEFAULT_TOKEN_URI,
        sheets::{DEFAULT_SHEET_NAME, DEFAULT_SHEETS_API_BASE},
    },
};
use crate::presentation::http::routes::RateLimitSettings;
use std::env;
use thiserror::Error;

const PEM_BEGIN: &str = "-----BEGIN";
const PEM_END: &str = "-----END";

#[derive(Clone, Debug)]
pub struct AppConfig {
    mongodb_uri: String,
    mongodb_database: String,
    listen_addr: String,
    allowed_origins: Vec<String>,
    admin_api_token: Option<String>,
    site_url: String,
    gemini: Option<GeminiSettings>,
    ledger: LedgerSettings,
    rate_limit: RateLimitSettings,
}

#[derive(Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl std::fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub enum LedgerSettings {
    Disabled,
    Memory,
    Sheets(SheetsSettings),
}

#[derive(Clone, Debug)]
pub struct SheetsSettings {
    pub spreadsheet_id: String,
    pub sheet_name: String,
    pub api_base: String,
    pub credentials: ServiceAccountCredentials,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_mongodb_uri() -> String {
    "mongodb://localhost:27017".into()
}

fn default_mongodb_database() -> String {
    "oseberg_exim".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn default_site_url() -> String {
    "https://osebergexim.vercel.app".into()
}

impl AppConfig {
    /// Build configuration from environment variables, after loading a
    /// `.env` file when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source. Blank values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let allowed_origins = var("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let gemini = var("GOOGLE_GENERATIVE_AI_API_KEY").map(|api_key| GeminiSettings {
            api_key,
            model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            api_base: var("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
        });

        let rate_limit = RateLimitSettings {
            per_second: parse_number(var("RATE_LIMIT_PER_SECOND"), "RATE_LIMIT_PER_SECOND", 2)?,
            burst: parse_number(var("RATE_LIMIT_BURST"), "RATE_LIMIT_BURST", 10)?,
        };

        Ok(Self {
            mongodb_uri: var("MONGODB_URI").unwrap_or_else(default_mongodb_uri),
            mongodb_database: var("MONGODB_DATABASE").unwrap_or_else(default_mongodb_database),
            listen_addr: var("LISTEN_ADDR").unwrap_or_else(default_listen_addr),
            allowed_origins,
            admin_api_token: var("ADMIN_API_TOKEN"),
            site_url: var("SITE_URL").unwrap_or_else(default_site_url),
            gemini,
            ledger: ledger_settings(&var)?,
            rate_limit,
        })
    }

    pub fn mongodb_uri(&self) -> &str {
        &self.mongodb_uri
    }

    pub fn mongodb_database(&self) -> &str {
        &self.mongodb_database
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn admin_api_token(&self) -> Option<&str> {
        self.admin_api_token.as_deref()
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub fn gemini(&self) -> Option<&GeminiSettings> {
        self.gemini.as_ref()
    }

    pub fn ledger(&self) -> &LedgerSettings {
        &self.ledger
    }

    pub fn rate_limit(&self) -> RateLimitSettings {
        self.rate_limit
    }
}

fn ledger_settings<F>(var: &F) -> Result<LedgerSettings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match var("LEDGER_BACKEND").as_deref() {
        Some("memory") => return Ok(LedgerSettings::Memory),
        None | Some("sheets") => {}
        Some(other) => {
            return Err(ConfigError::Invalid(format!(
                "LEDGER_BACKEND must be `sheets` or `memory`, got `{other}`"
            )));
        }
    }

    let Some(spreadsheet_id) = var("GOOGLE_SHEET_ID") else {
        return Ok(LedgerSettings::Disabled);
    };

    Ok(LedgerSettings::Sheets(SheetsSettings {
        spreadsheet_id,
        sheet_name: var("LEDGER_SHEET_NAME").unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string()),
        api_base: var("GOOGLE_SHEETS_API_BASE")
            .unwrap_or_else(|| DEFAULT_SHEETS_API_BASE.to_string()),
        credentials: service_account_credentials(var)?,
    }))
}

/// The JSON key file wins over the separate email and key variables.
fn service_account_credentials<F>(var: &F) -> Result<ServiceAccountCredentials, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut credentials = if let Some(json) = var("GOOGLE_SERVICE_ACCOUNT_JSON") {
        serde_json::from_str::<ServiceAccountCredentials>(&json).map_err(|err| {
            ConfigError::Invalid(format!("GOOGLE_SERVICE_ACCOUNT_JSON is not a key file: {err}"))
        })?
    } else {
        ServiceAccountCredentials {
            client_email: var("GOOGLE_SERVICE_ACCOUNT_EMAIL")
                .ok_or(ConfigError::Missing("GOOGLE_SERVICE_ACCOUNT_EMAIL"))?,
            private_key: var("GOOGLE_PRIVATE_KEY")
                .ok_or(ConfigError::Missing("GOOGLE_PRIVATE_KEY"))?,
            token_uri: DEFAULT_TOKEN_URI.to_string(),
        }
    };

    credentials.private_key = normalize_private_key(&credentials.private_key)?;
    Ok(credentials)
}

/// Undo the usual damage done to PEM keys stored in environment variables:
/// surrounding quotes and literal `\n` sequences.
pub fn normalize_private_key(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|quote| {
            trimmed
                .strip_prefix(*quote)
                .and_then(|rest| rest.strip_suffix(*quote))
        })
        .unwrap_or(trimmed);
    let key = unquoted.replace("\\n", "\n").trim().to_string();

    if !key.contains(PEM_BEGIN) || !key.contains(PEM_END) {
        return Err(ConfigError::Invalid(
            "GOOGLE_PRIVATE_KEY must be a PEM encoded key".into(),
        ));
    }
    Ok(key)
}

fn parse_number<T>(value: Option<String>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a non-negative integer"))),
    }
}
