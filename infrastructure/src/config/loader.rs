//! Configuration loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables: `SWIPEMATCH_*` (nested keys split on `__`,
    ///    e.g. `SWIPEMATCH_MATCHING__POLICY=all-participants`)
    /// 2. Explicit config path (if provided)
    /// 3. Working directory: `./swipematch.toml` or `./.swipematch.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for filename in &["swipematch.toml", ".swipematch.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("SWIPEMATCH_").split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for embedded/test setups)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.matching.default_quorum_size, 2);
        assert_eq!(config.store.matches_table, "matches");
    }

    #[test]
    fn test_explicit_path_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            "[matching]\ndefault_quorum_size = 4\n\n[store]\nvotes_table = \"test-votes\"\n"
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&file.path().to_path_buf())).unwrap();

        assert_eq!(config.matching.default_quorum_size, 4);
        assert_eq!(config.store.votes_table, "test-votes");
        // Untouched sections keep defaults
        assert_eq!(config.gateway.timeout_secs, 5);
    }

    #[test]
    fn test_env_overrides_discovered_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "swipematch.toml",
                r#"
                    [matching]
                    default_quorum_size = 4
                    policy = "exact-quorum"
                "#,
            )?;
            jail.set_env("SWIPEMATCH_MATCHING__POLICY", "all-participants");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;

            // Env beats the file for the key it sets
            assert_eq!(config.matching.policy, "all-participants");
            // File keys without an env override survive the merge
            assert_eq!(config.matching.default_quorum_size, 4);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_path_falls_back_to_defaults() {
        let path = PathBuf::from("/nonexistent/swipematch.toml");
        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config, FileConfig::default());
    }
}
