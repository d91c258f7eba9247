use figment::Jail;
use joblens_config::JoblensConfig;

#[test]
fn env_overrides_api_base_url() {
    Jail::expect_with(|jail| {
        jail.set_env("JOBLENS_API__BASE_URL", "http://boards.example:8080");
        let config = JoblensConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://boards.example:8080");
        // Untouched fields keep their defaults.
        assert_eq!(config.api.timeout_secs, 10);
        Ok(())
    });
}

#[test]
fn env_overrides_general_limit() {
    Jail::expect_with(|jail| {
        jail.set_env("JOBLENS_GENERAL__DEFAULT_LIMIT", "5");
        let config = JoblensConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn zero_timeout_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("JOBLENS_API__TIMEOUT_SECS", "0");
        let err = JoblensConfig::load().expect_err("zero timeout must not load");
        assert!(err.to_string().contains("api.timeout_secs"));
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "joblens.toml",
            r#"
                [api]
                base_url = "http://from-toml.example"
            "#,
        )?;
        jail.set_env("JOBLENS_API__BASE_URL", "http://from-env.example");

        let config = JoblensConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://from-env.example");
        Ok(())
    });
}
