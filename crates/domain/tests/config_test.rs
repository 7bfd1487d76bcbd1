use zonemux_domain::{CliOverrides, Config, ConfigError, ConfigurationError};

const SAMPLE: &str = r#"
[server]
bind_address = "127.0.0.2"
dns_port = 5353

[logging]
level = "debug"

[[zones]]
name = "example.com"

[[zones.records]]
name = "www"
record_type = "A"
value = "123.123.123.123"

[[zones.records]]
record_type = "NS"
value = "ns.example.org."
ttl = 3600
"#;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.dns_port, 53);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.tcp_idle_timeout, 10);
    assert_eq!(config.server.udp_buffer_size, 4096);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.log_queries);
    assert!(!config.dispatch.servfail_on_unhandled_error);
    assert!(config.zones.is_empty());
}

#[test]
fn test_parse_zones() {
    let config = Config::from_toml(SAMPLE).unwrap();

    assert_eq!(config.server.dns_port, 5353);
    assert_eq!(config.server.tcp_idle_timeout, 10);
    assert_eq!(config.zones.len(), 1);

    let zone = &config.zones[0];
    assert_eq!(zone.name, "example.com");
    assert!(!zone.merge_params);
    assert_eq!(zone.records.len(), 2);
    assert_eq!(zone.records[0].ttl_or_default(), 300);
    assert_eq!(zone.records[1].name, "");
    assert_eq!(zone.records[1].ttl_or_default(), 3600);

    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_port_zero() {
    let mut config = Config::default();
    config.server.dns_port = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_bad_record_data() {
    let toml = r#"
[[zones]]
name = "example.com"

[[zones.records]]
name = "www"
record_type = "A"
value = "not-an-ip"
"#;
    let config = Config::from_toml(toml).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Zone {
            source: ConfigurationError::InvalidRecordData { .. },
            ..
        })
    ));
}

#[test]
fn test_validate_rejects_bad_zone_pattern() {
    let toml = r#"
[[zones]]
name = "example..com"
"#;
    let config = Config::from_toml(toml).unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Zone {
            source: ConfigurationError::EmptyLabel(_),
            ..
        }
    ));
    assert!(err.to_string().starts_with("Zone 'example..com'"));
}

#[test]
fn test_validate_rejects_unknown_record_type() {
    let toml = r#"
[[zones]]
name = "example.com"

[[zones.records]]
record_type = "BOGUS"
value = "x"
"#;
    let config = Config::from_toml(toml).unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_parse_error_is_reported() {
    assert!(matches!(
        Config::from_toml("[server\n"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_load_missing_file_fails() {
    let result = Config::load(Some("/nonexistent/zonemux.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_cli_overrides_win() {
    let dir = std::env::temp_dir().join(format!("zonemux-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("zonemux.toml");
    std::fs::write(&path, SAMPLE).unwrap();

    let config = Config::load(
        Some(path.to_str().unwrap()),
        CliOverrides {
            dns_port: Some(1053),
            bind_address: None,
            log_level: Some("trace".to_string()),
        },
    )
    .unwrap();

    assert_eq!(config.server.dns_port, 1053);
    assert_eq!(config.server.bind_address, "127.0.0.2");
    assert_eq!(config.logging.level, "trace");

    std::fs::remove_dir_all(&dir).ok();
}
