use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
    pub chat_api_base: String,
    pub chat_api_key: SecretString,
    pub chat_model: String,
    pub chat_temperature: f32,
    pub subjects_topics_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "education-platform-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET")
                    .unwrap_or_else(|_| "dev_secret_key_change_in_production".to_string()),
            ),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(24),
            chat_api_base: env::var("CHAT_API_BASE")
                .unwrap_or_else(|_| "https://gigachat.devices.sberbank.ru/api/v1".to_string()),
            chat_api_key: SecretString::from(
                env::var("CHAT_API_KEY").unwrap_or_else(|_| "chat_api_key".to_string()),
            ),
            chat_model: env::var("CHAT_MODEL").unwrap_or_else(|_| "GigaChat".to_string()),
            chat_temperature: env::var("CHAT_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.3),
            subjects_topics_path: env::var("SUBJECTS_TOPICS_PATH")
                .unwrap_or_else(|_| "data/subjects_topics.json".to_string()),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let jwt_secret = self.jwt_secret.expose_secret();
        let chat_key = self.chat_api_key.expose_secret();

        if jwt_secret == "dev_secret_key_change_in_production" {
            panic!(
                "FATAL: JWT_SECRET is using default value! Set JWT_SECRET environment variable to a secure random string."
            );
        }

        if jwt_secret.len() < 32 {
            panic!(
                "FATAL: JWT_SECRET is too short ({}). Must be at least 32 characters for security.",
                jwt_secret.len()
            );
        }

        if chat_key == "chat_api_key" {
            panic!(
                "FATAL: CHAT_API_KEY is using default value! Set CHAT_API_KEY environment variable."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "education-platform-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            jwt_expiration_hours: 1,
            chat_api_base: "http://localhost:9999/api/v1".to_string(),
            chat_api_key: SecretString::from("test_chat_key".to_string()),
            chat_model: "GigaChat".to_string(),
            chat_temperature: 0.3,
            subjects_topics_path: "data/subjects_topics.json".to_string(),
        }
    }
}
