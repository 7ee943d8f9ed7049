use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub catalog_path: Option<String>,
    /// Credential for the generative-language delegate. Absence is only
    /// surfaced when the compare-prices endpoint is invoked, never at
    /// startup.
    pub gemini_api_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let catalog_path = env::var("CATALOG_PATH").ok();
        let gemini_api_key = env::var("GOOGLE_GENERATIVE_AI_API_KEY").ok();
        Ok(Self {
            host,
            port,
            catalog_path,
            gemini_api_key,
        })
    }
}
