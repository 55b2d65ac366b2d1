//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USER_SERVICE_*` environment variables and
//! configuration files, in OrthoConfig's usual precedence. Port and pool size
//! carry declared defaults; host and database URL stay optional.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Configuration for the user service binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SERVICE")]
pub struct ServerSettings {
    /// Interface to bind; all interfaces when absent.
    pub host: Option<IpAddr>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// PostgreSQL URL; the in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub db_max_connections: u32,
}

impl ServerSettings {
    /// Socket address to bind, on `0.0.0.0` unless a host is configured.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host.unwrap_or(DEFAULT_HOST), self.port)
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size to request; a configured zero falls back to the default.
    pub fn db_max_connections(&self) -> u32 {
        if self.db_max_connections == 0 {
            DEFAULT_DB_MAX_CONNECTIONS
        } else {
            self.db_max_connections
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "USER_SERVICE_HOST",
        "USER_SERVICE_PORT",
        "USER_SERVICE_DATABASE_URL",
        "USER_SERVICE_DB_MAX_CONNECTIONS",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("user-service")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080".parse().expect("addr"));
        assert_eq!(settings.database_url(), None);
        assert_eq!(settings.db_max_connections(), DEFAULT_DB_MAX_CONNECTIONS);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("USER_SERVICE_HOST", Some("127.0.0.1".to_owned())),
            ("USER_SERVICE_PORT", Some("9090".to_owned())),
            (
                "USER_SERVICE_DATABASE_URL",
                Some("postgres://localhost/users".to_owned()),
            ),
            ("USER_SERVICE_DB_MAX_CONNECTIONS", Some("3".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr(),
            "127.0.0.1:9090".parse().expect("addr")
        );
        assert_eq!(settings.database_url(), Some("postgres://localhost/users"));
        assert_eq!(settings.db_max_connections(), 3);
    }

    #[rstest]
    fn partial_configuration_keeps_the_remaining_defaults() {
        let _guard = lock_env([
            ("USER_SERVICE_HOST", None::<String>),
            ("USER_SERVICE_PORT", None),
            (
                "USER_SERVICE_DATABASE_URL",
                Some("postgres://localhost/users".to_owned()),
            ),
            ("USER_SERVICE_DB_MAX_CONNECTIONS", None),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
        assert_eq!(settings.database_url(), Some("postgres://localhost/users"));
    }

    #[rstest]
    #[case(Some("   "), None)]
    #[case(Some(" postgres://db/users "), Some("postgres://db/users"))]
    #[case(None, None)]
    fn blank_database_urls_select_the_memory_store(
        #[case] raw: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let settings = ServerSettings {
            host: None,
            port: 8080,
            database_url: raw.map(str::to_owned),
            db_max_connections: 0,
        };
        assert_eq!(settings.database_url(), expected);
        assert_eq!(settings.db_max_connections(), DEFAULT_DB_MAX_CONNECTIONS);
    }
}
