use std::env;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub customization_service_url: String,
    pub customization_service_token: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            customization_service_url: env::var("CUSTOMIZATION_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8000/functions/v1/resort-customization".to_string()),
            customization_service_token: env::var("CUSTOMIZATION_SERVICE_TOKEN")
                .unwrap_or_else(|_| "test-token-1".to_string()),
        }
    }
}
