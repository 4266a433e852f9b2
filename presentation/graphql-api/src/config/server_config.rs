use std::env;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "4000")
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVICE_PORT").unwrap_or_else(|_| "4000".to_string());

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }

    /// Public URL of the GraphQL endpoint mounted at `path`
    pub fn graphql_url(&self, path: &str) -> String {
        format!("http://{}{}", self.bind_address(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_config() -> ServerConfig {
        ServerConfig {
            ip: "0.0.0.0".to_string(),
            port: "4000".to_string(),
        }
    }

    #[test]
    fn should_bind_on_configured_interface() {
        assert_eq!(local_config().bind_address(), "0.0.0.0:4000");
    }

    #[test]
    fn should_build_graphql_url_from_bind_address() {
        assert_eq!(
            local_config().graphql_url("/graphql"),
            "http://0.0.0.0:4000/graphql"
        );
    }
}
