//! Runtime configuration, read once at startup.

pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
pub const DEFAULT_PORT: u16 = 5555;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    /// Read `DATABASE_URL` and `PORT` from the environment, falling back to
    /// the local-file database and the default port.
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());
        let port = parse_port(std::env::var("PORT").ok());
        Self { database_url, port }
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(parse_port(None), 5555);
    }

    #[test]
    fn port_parses_when_numeric() {
        assert_eq!(parse_port(Some("8080".into())), 8080);
    }

    #[test]
    fn port_falls_back_when_unparseable() {
        assert_eq!(parse_port(Some("not-a-port".into())), 5555);
    }
}
