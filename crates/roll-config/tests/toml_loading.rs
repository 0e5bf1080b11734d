//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use roll_config::{ConfigError, RollConfig};

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/rollcall/main.db"

[attendance]
target_rate = 0.8

[general]
default_limit = 25
"#,
        )?;

        let config: RollConfig = Figment::from(Serialized::defaults(RollConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/rollcall/main.db");
        assert!((config.attendance.target_rate - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.general.default_limit, 25);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[attendance]
target_rate = 0.6
"#,
        )?;

        let config: RollConfig = Figment::from(Serialized::defaults(RollConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, ".rollcall/rollcall.db");
        assert_eq!(config.general.default_limit, 50);
        assert!((config.attendance.target_rate - 0.6).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_figment() {
    Jail::expect_with(|jail| {
        jail.create_dir(".rollcall")?;
        jail.create_file(
            ".rollcall/config.toml",
            r#"
[database]
path = "custom.db"
"#,
        )?;

        let config = RollConfig::from_figment(&RollConfig::figment()).expect("config loads");
        assert_eq!(config.database.path, "custom.db");
        Ok(())
    });
}

#[test]
fn invalid_target_rate_in_toml_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[attendance]
target_rate = 1.5
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(RollConfig::default()))
            .merge(Toml::file("config.toml"));
        let result = RollConfig::from_figment(&figment);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "attendance.target_rate"
        ));
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_limit = "lots"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(RollConfig::default()))
            .merge(Toml::file("config.toml"));
        assert!(matches!(
            RollConfig::from_figment(&figment),
            Err(ConfigError::Figment(_))
        ));
        Ok(())
    });
}
