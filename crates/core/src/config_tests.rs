// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;

#[test]
fn empty_config_uses_defaults() {
    let config = AlarmConfig::from_toml_str("").unwrap();
    assert_eq!(config, AlarmConfig::default());
    assert_eq!(config.default_sound, "alarm1");
    assert_eq!(config.snooze, Duration::from_secs(540));
    assert_eq!(config.ring_timeout, Duration::from_secs(600));
}

#[test]
fn parses_humantime_durations() {
    let config = AlarmConfig::from_toml_str(
        r#"
        snooze = "5m"
        ring_timeout = "90s"
        "#,
    )
    .unwrap();
    assert_eq!(config.snooze, Duration::from_secs(300));
    assert_eq!(config.ring_timeout, Duration::from_secs(90));
}

#[test]
fn rejects_default_missing_from_sounds() {
    let err = AlarmConfig::from_toml_str(
        r#"
        default_sound = "alarm1"
        sounds = ["chime"]
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("alarm1")));
}

#[test]
fn rejects_unknown_fields() {
    let err = AlarmConfig::from_toml_str("volume = 11").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn rejects_zero_ring_timeout() {
    let err = AlarmConfig::from_toml_str(r#"ring_timeout = "0s""#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn load_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, r#"sounds = ["alarm1", "chime"]"#).unwrap();

    let config = AlarmConfig::load(&path).unwrap();
    let catalog = config.sound_catalog();
    assert!(catalog.contains("chime"));
    assert!(!catalog.contains("foghorn"));
}

#[test]
fn load_or_default_tolerates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = AlarmConfig::load_or_default(&dir.path().join("missing.toml")).unwrap();
    assert_eq!(config, AlarmConfig::default());
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = AlarmConfig::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
