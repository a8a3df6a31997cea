use std::env;

/// Deployment environment tag.
///
/// Controls startup-time composition only (the private router is mounted
/// for [`Environment::Local`]); nothing branches on it per request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Staging,
    Production,
}

impl Environment {
    pub fn parse(value: &str) -> Self {
        match value {
            "staging" => Environment::Staging,
            "production" => Environment::Production,
            _ => Environment::Local,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: Environment,
    pub first_superuser: String,
    pub first_superuser_password: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            environment: Environment::parse(
                &env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
            ),
            first_superuser: env::var("FIRST_SUPERUSER")
                .unwrap_or_else(|_| "admin@example.com".to_string()),
            first_superuser_password: env::var("FIRST_SUPERUSER_PASSWORD")
                .unwrap_or_else(|_| "changethis".to_string()),
        }
    }
}
