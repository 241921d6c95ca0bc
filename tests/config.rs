#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use taskdeck::libs::config::{Config, DisplayConfig, StorageConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context that redirects the home/appdata directory to a
    /// temporary directory so tests never touch a real configuration.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.storage.is_none());
        assert!(config.display.is_none());
        assert_eq!(config.task_file(), PathBuf::from("tasks.txt"));
        assert_eq!(config.margin(), 4);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the defaults.
        let config = Config::read().unwrap();
        assert!(config.storage.is_none());
        assert!(config.display.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            storage: Some(StorageConfig {
                file: "chores.txt".to_string(),
            }),
            display: Some(DisplayConfig { margin: 2 }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.storage, config.storage);
        assert_eq!(loaded.display, config.display);
        assert_eq!(loaded.task_file(), PathBuf::from("chores.txt"));
        assert_eq!(loaded.margin(), 2);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            storage: Some(StorageConfig::default()),
            display: None,
        };
        config.save().unwrap();

        Config::delete().unwrap();

        let loaded = Config::read().unwrap();
        assert!(loaded.storage.is_none());

        // Deleting again is not an error.
        Config::delete().unwrap();
    }
}
