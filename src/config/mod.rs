use crate::error::AppError;
use std::env;

/// Default NCBI E-utilities base URL.
const NCBI_EUTILS_BASE: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Default Gemini API base URL.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct BiorecodeConfig {
    pub port: u16,
    pub log_level: String,
    pub ncbi: NcbiConfig,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone)]
pub struct NcbiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    /// Model identifier used in the generateContent URL (e.g. gemini-2.0-flash-exp).
    pub model: String,
    pub base_url: String,
}

impl BiorecodeConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(BiorecodeConfig {
            port: get_env("APP__PORT", Some("5000"), is_prod)?
                .parse()
                .map_err(|e| {
                    AppError::Config(anyhow::anyhow!("APP__PORT is not a valid port: {}", e))
                })?,
            log_level: get_env("APP__LOG_LEVEL", Some("info"), is_prod)?,
            ncbi: NcbiConfig {
                base_url: get_env("NCBI_EUTILS_BASE_URL", Some(NCBI_EUTILS_BASE), is_prod)?,
            },
            gemini: GeminiConfig {
                // No default: the credential must come from the environment.
                api_key: get_env("GEMINI_API_KEY", None, is_prod)?,
                model: get_env("GEMINI_MODEL", Some("gemini-2.0-flash-exp"), is_prod)?,
                base_url: get_env("GEMINI_API_BASE_URL", Some(GEMINI_API_BASE), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod && default.is_none() {
                Err(AppError::Config(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::Config(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
