use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub host: String,
    pub port: u16,
}

impl EnvConfig {
    fn get_env(key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.trim().is_empty())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            host: Self::get_env("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: Self::get_env("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}
