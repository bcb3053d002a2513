use figment::Jail;
use lrn_config::LrnConfig;
use lrn_engine::Locale;

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("LRN_GENERAL__LOCALE", "russian");
        jail.set_env("LRN_STORAGE__SETTINGS_PATH", "/tmp/lrn-test/settings.json");

        let config = LrnConfig::load().expect("config loads");
        assert_eq!(config.general.locale, Locale::Russian);
        assert_eq!(
            config.settings_store().expect("store").path(),
            std::path::Path::new("/tmp/lrn-test/settings.json")
        );
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".lrn")).expect("mkdir .lrn");
        jail.create_file(".lrn/config.toml", "[general]\ndefault_format = \"table\"\n")?;
        jail.set_env("LRN_GENERAL__DEFAULT_FORMAT", "raw");

        let config = LrnConfig::load().expect("config loads");
        assert_eq!(config.general.default_format, "raw");
        Ok(())
    });
}

#[test]
fn log_filter_variable_does_not_disturb_extraction() {
    Jail::expect_with(|jail| {
        jail.set_env("LRN_LOG", "debug");
        assert!(LrnConfig::load().is_ok());
        Ok(())
    });
}
