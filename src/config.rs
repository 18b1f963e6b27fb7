//! Server configuration parsed from environment variables.

use crate::flowchart::RenderOptions;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    pub max_body_bytes: usize,
    pub render: RenderOptions,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_owned(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            render: RenderOptions::default(),
        }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `FLOWDOC_MAX_BODY_BYTES`: request body limit, default 1 MiB
    /// - `FLOWDOC_ESCAPE_QUOTES`: `1`/`true`/`yes` to escape quotes in labels
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup. Malformed values fall
    /// back to defaults.
    #[must_use]
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = lookup("BIND_ADDR")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let port = parse_or(lookup("PORT").as_deref(), DEFAULT_PORT);
        let max_body_bytes = parse_or(lookup("FLOWDOC_MAX_BODY_BYTES").as_deref(), DEFAULT_MAX_BODY_BYTES);
        let escape_quotes = lookup("FLOWDOC_ESCAPE_QUOTES").as_deref().is_some_and(parse_flag);

        Self { bind_addr, port, max_body_bytes, render: RenderOptions { escape_quotes } }
    }

    /// `host:port` string for the listener.
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_or<T>(raw: Option<&str>, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    raw.and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
