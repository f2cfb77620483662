use workerchat_core::config::{Settings, DEFAULT_ENDPOINT};
use tempfile::TempDir;

// ========================================================================
// Settings (config.rs)
// ========================================================================

#[test]
fn test_settings_default_values() {
    let settings = Settings::default();

    assert_eq!(settings.endpoint.base_url, DEFAULT_ENDPOINT);
    assert!(settings.endpoint.timeout_secs.is_none());
    assert_eq!(settings.endpoint.user_agent, "Workerchat/0.1");
    assert_eq!(settings.render.highlight_theme, "base16-ocean.dark");
}

#[test]
fn test_settings_toml_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut settings = Settings::default();
    settings.endpoint.base_url = "https://worker.test".to_string();
    settings.endpoint.timeout_secs = Some(30);
    settings.render.highlight_theme = "InspiredGitHub".to_string();

    let content = toml::to_string_pretty(&settings).unwrap();
    std::fs::write(&config_path, content).unwrap();

    let loaded: Settings =
        toml::from_str(&std::fs::read_to_string(&config_path).unwrap()).unwrap();

    assert_eq!(loaded.endpoint.base_url, "https://worker.test");
    assert_eq!(loaded.endpoint.timeout_secs, Some(30));
    assert_eq!(loaded.render.highlight_theme, "InspiredGitHub");
}

#[test]
fn test_settings_load_never_panics() {
    let settings = Settings::load();
    assert!(!settings.endpoint.base_url.is_empty());
}
