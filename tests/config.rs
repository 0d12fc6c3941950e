#[cfg(test)]
mod tests {
    use ltodo::libs::config::{Config, Overrides, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
    use ltodo::libs::data_storage::{DataStorage, RunMode};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Gives every test its own data directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::at(temp_dir.path().join("lacodda").join("ltodo"));
            ConfigTestContext {
                _temp_dir: temp_dir,
                storage,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.server.is_none());
        assert!(config.database.is_none());

        let server = ServerConfig::default();
        assert_eq!(server.host, DEFAULT_HOST);
        assert_eq!(server.port, DEFAULT_PORT);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_missing_file(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            }),
            database: Some(PathBuf::from("/tmp/todos.db")),
        };

        config.save_to(&ctx.storage).unwrap();
        assert!(ctx.storage.base_path().join("config.json").exists());

        let loaded = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_resolve_defaults(ctx: &mut ConfigTestContext) {
        let installed = Config::default()
            .resolve(RunMode::Installed, &ctx.storage, Overrides::default())
            .unwrap();
        assert_eq!(installed.address(), "127.0.0.1:3001");
        assert_eq!(installed.api_url(), "http://127.0.0.1:3001/api");
        assert_eq!(installed.db_path, ctx.storage.base_path().join("todo.db"));

        let development = Config::default()
            .resolve(RunMode::Development, &ctx.storage, Overrides::default())
            .unwrap();
        assert_eq!(development.db_path, PathBuf::from("todo.db"));
        assert_eq!(development.run_mode, RunMode::Development);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_resolve_precedence(ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                host: "10.0.0.1".to_string(),
                port: 4000,
            }),
            database: Some(PathBuf::from("from-file.db")),
        };

        let from_file = config
            .resolve(RunMode::Development, &ctx.storage, Overrides::default())
            .unwrap();
        assert_eq!(from_file.address(), "10.0.0.1:4000");
        assert_eq!(from_file.db_path, PathBuf::from("from-file.db"));

        let overridden = config
            .resolve(
                RunMode::Development,
                &ctx.storage,
                Overrides {
                    host: None,
                    port: Some(5000),
                    database: Some(PathBuf::from("from-flag.db")),
                },
            )
            .unwrap();
        assert_eq!(overridden.address(), "10.0.0.1:5000");
        assert_eq!(overridden.db_path, PathBuf::from("from-flag.db"));
    }

    #[test]
    fn test_run_mode_from_value() {
        assert_eq!(RunMode::from_value(Some("development")), RunMode::Development);
        assert_eq!(RunMode::from_value(Some("Development")), RunMode::Development);
        assert_eq!(RunMode::from_value(Some("production")), RunMode::Installed);
        assert_eq!(RunMode::from_value(None), RunMode::Installed);
    }
}
