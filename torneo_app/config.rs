use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST backend, without trailing slash.
    pub api_url: String,
    /// Application name the backend uses for its `X-<app>-*` headers.
    pub app_name: String,
    pub web_port: u16,
    pub locale: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config out of `lookup`, falling back to the defaults for
    /// missing or unusable values.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = match lookup("TORNEO_API_URL") {
            Some(val) if !val.trim().is_empty() => val.trim().trim_end_matches('/').to_string(),
            _ => "http://localhost:8080".to_string(),
        };

        let app_name = match lookup("TORNEO_APP_NAME") {
            Some(val) if !val.trim().is_empty() => val,
            _ => "torneoApp".to_string(),
        };

        let web_port = match lookup("TORNEO_WEB_PORT") {
            Some(val) => val.trim().parse::<u16>().unwrap_or(3000),
            None => 3000,
        };

        let locale = match lookup("TORNEO_LOCALE") {
            Some(val) if val == "en" || val == "es" => val,
            _ => "es".to_string(),
        };

        Self {
            api_url,
            app_name,
            web_port,
            locale,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            app_name: "torneoApp".to_string(),
            web_port: 3000,
            locale: "es".to_string(),
        }
    }
}
