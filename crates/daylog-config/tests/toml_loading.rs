//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed cwd and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use std::path::Path;

use daylog_config::DaylogConfig;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
host = "0.0.0.0"
port = 8080
static_dir = "./ui/out"
body_limit_bytes = 2048
cors_permissive = true

[database]
path = "/var/lib/daylog/daylog.db"

[log]
filter = "debug,hyper=warn"
"#,
        )?;

        let config: DaylogConfig = Figment::from(Serialized::defaults(DaylogConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.server.static_dir, "./ui/out");
        assert_eq!(config.server.body_limit_bytes, 2048);
        assert!(config.server.cors_permissive);
        assert_eq!(config.database.path, "/var/lib/daylog/daylog.db");
        assert_eq!(config.log.filter, "debug,hyper=warn");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
port = 4000
"#,
        )?;

        let config: DaylogConfig = Figment::from(Serialized::defaults(DaylogConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.database.path, "daylog.db");
        assert_eq!(config.log.filter, "info");
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_from_cwd() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "daylog.toml",
            r#"
[database]
path = "project.db"
"#,
        )?;

        let config = DaylogConfig::load(None).expect("config loads");
        assert_eq!(config.database.path, "project.db");
        Ok(())
    });
}

#[test]
fn explicit_file_replaces_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file("daylog.toml", "[database]\npath = \"project.db\"\n")?;
        jail.create_file("other.toml", "[database]\npath = \"other.db\"\n")?;

        let config = DaylogConfig::load(Some(Path::new("other.toml"))).expect("config loads");
        assert_eq!(config.database.path, "other.db");
        Ok(())
    });
}

#[test]
fn invalid_port_in_toml_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file("daylog.toml", "[server]\nport = 0\n")?;

        assert!(DaylogConfig::load(None).is_err());
        Ok(())
    });
}

#[test]
fn malformed_toml_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file("daylog.toml", "[server\nport = 1\n")?;

        assert!(DaylogConfig::load(None).is_err());
        Ok(())
    });
}
