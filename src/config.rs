//! Client configuration
//!
//! The server owns all conversation state; the client only needs to know
//! where to find it.

/// Configuration for reaching the remote chat server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Base URL of the chat server, without a trailing slash
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:1111".to_string(),
        }
    }
}

impl ServerConfig {
    /// Build a configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        match std::env::var("VOXCHAT_SERVER_URL") {
            Ok(url) if !url.trim().is_empty() => Self {
                base_url: url.trim().trim_end_matches('/').to_string(),
            },
            _ => Self::default(),
        }
    }

    /// Override the server base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url: String = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Full URL for an endpoint path such as `/chat`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        let config = ServerConfig::default();
        assert_eq!(config.endpoint("/chat"), "http://127.0.0.1:1111/chat");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ServerConfig::default().with_base_url("http://example.com/");
        assert_eq!(config.endpoint("/voice"), "http://example.com/voice");
    }
}
