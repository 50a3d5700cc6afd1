use crossterm::event::{KeyCode, KeyModifiers};
use kioskflow::config::Config;
use kioskflow::keymap::{Action, KeyBinding, KeymapPreset};
use kioskflow::navigation::ScreenId;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_missing_config_is_created_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let config = Config::load_or_create(&config_path).unwrap();
    assert_eq!(config, Config::default());
    assert!(config_path.exists());

    let written = fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("inactivity_timeout_ms = 600000"));
}

#[test]
fn test_partial_config_fills_in_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
kiosk_name = "UTC Kuala Lumpur"

[timing]
processing_delay_ms = 5000

[keymap]
preset = "vim"

[[keymap.overrides]]
key = "f12"
action = "logout"
"#,
    )
    .unwrap();

    let config = Config::load_or_create(&config_path).unwrap();
    assert_eq!(config.kiosk_name, "UTC Kuala Lumpur");
    assert_eq!(config.theme, "dark");
    assert_eq!(
        config.timing.completion_delay(ScreenId::Processing),
        Some(Duration::from_millis(5000))
    );
    assert_eq!(config.timing.inactivity_timeout(), Duration::from_secs(600));

    assert_eq!(config.keymap.preset, KeymapPreset::Vim);
    assert_eq!(
        config.keymap.get_action(KeyCode::F(12), KeyModifiers::NONE),
        Some(Action::Logout)
    );
    // The override replaces ctrl+l
    assert_eq!(
        config.keymap.get_action(KeyCode::Char('l'), KeyModifiers::CONTROL),
        None
    );
    assert_eq!(
        config.keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Action::MoveDown)
    );
}

#[test]
fn test_poll_longer_than_timeout_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[timing]\ninactivity_timeout_ms = 5000\ninactivity_poll_ms = 10000\n",
    )
    .unwrap();

    let err = Config::load_or_create(&config_path).unwrap_err();
    assert!(format!("{:#}", err).contains("inactivity_poll_ms"));
}

#[test]
fn test_unparsable_override_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[[keymap.overrides]]\nkey = \"hyper+q\"\naction = \"quit\"\n",
    )
    .unwrap();

    assert!(Config::load_or_create(&config_path).is_err());
}

#[test]
fn test_save_and_reload_round_trip_keeps_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.theme = "light".to_string();
    config
        .keymap
        .overrides
        .push(KeyBinding::new("ctrl+x", Action::Quit));
    config.save(&config_path).unwrap();

    let loaded = Config::load_or_create(&config_path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('x'), KeyModifiers::CONTROL),
        Some(Action::Quit)
    );
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('q'), KeyModifiers::CONTROL),
        None
    );
}
