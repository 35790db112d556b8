use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::FilterMode;
use crate::error::FilterError;
use crate::filter::{new_filter_provider, FilterChain, PcapFilter, ProviderKind};

const DEFAULT_CONFIG_PATH: &str = "/etc/tcpdumpw.conf";

/// Filter settings gathered from the config file and environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Network protocol selector, e.g. `ipv4`.
    pub l3_protocols: String,
    /// Transport protocol selector, e.g. `tcp,17`.
    pub l4_protocols: String,
    /// Pre-existing expression the providers are merged into.
    pub filter: Option<String>,
    /// How provider fragments are merged.
    pub mode: FilterMode,
}

impl Config {
    /// Path from `TCPDUMPW_CONFIG`, or the system default.
    pub fn default_path() -> PathBuf {
        std::env::var("TCPDUMPW_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load from the default path, then apply environment overrides.
    pub fn load() -> Result<Self, FilterError> {
        Self::load_from(&Self::default_path())
    }

    /// Load from `path`, then apply environment overrides.
    ///
    /// A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, FilterError> {
        let mut config = Config::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config.merge_file(&content)?;
        }

        config.merge_env()?;
        Ok(config)
    }

    fn merge_file(&mut self, content: &str) -> Result<(), FilterError> {
        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(FilterError::Config(format!(
                    "line {}: expected key = value",
                    number + 1
                )));
            };

            let value = value.trim();
            match key.trim() {
                "l3_protocols" => self.l3_protocols = value.to_string(),
                "l4_protocols" => self.l4_protocols = value.to_string(),
                "filter" => self.filter = Some(value.to_string()).filter(|f| !f.is_empty()),
                "mode" => self.mode = value.parse()?,
                other => tracing::debug!(key = other, "Ignoring unknown config key"),
            }
        }

        Ok(())
    }

    fn merge_env(&mut self) -> Result<(), FilterError> {
        if let Ok(val) = std::env::var("TCPDUMPW_L3_PROTOS") {
            self.l3_protocols = val;
        }
        if let Ok(val) = std::env::var("TCPDUMPW_L4_PROTOS") {
            self.l4_protocols = val;
        }
        if let Ok(val) = std::env::var("TCPDUMPW_FILTER") {
            self.filter = Some(val).filter(|f| !f.trim().is_empty());
        }
        if let Ok(val) = std::env::var("TCPDUMPW_MODE") {
            self.mode = val.parse()?;
        }
        Ok(())
    }

    /// Network then transport provider, both merged with `mode`.
    pub fn filter_chain(&self) -> FilterChain {
        let mut chain = FilterChain::new();
        if let Some(seed) = &self.filter {
            chain = chain.with_seed(seed.as_str());
        }

        chain
            .with_provider(
                new_filter_provider(
                    ProviderKind::L3Proto,
                    Arc::new(PcapFilter::new(self.l3_protocols.as_str())),
                ),
                self.mode,
            )
            .with_provider(
                new_filter_provider(
                    ProviderKind::L4Proto,
                    Arc::new(PcapFilter::new(self.l4_protocols.as_str())),
                ),
                self.mode,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterContext;
    use serial_test::serial;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    const ENV_KEYS: [&str; 5] = [
        "TCPDUMPW_CONFIG",
        "TCPDUMPW_L3_PROTOS",
        "TCPDUMPW_L4_PROTOS",
        "TCPDUMPW_FILTER",
        "TCPDUMPW_MODE",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            env::remove_var(key);
        }
    }

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("tcpdumpw.conf");
        fs::write(&path, content).unwrap();
        path
    }

    mod file_tests {
        use super::*;

        #[test]
        #[serial]
        fn missing_file_yields_defaults() {
            clear_env();
            let temp = TempDir::new().unwrap();
            let config = Config::load_from(&temp.path().join("absent.conf")).unwrap();
            assert_eq!(config, Config::default());
        }

        #[test]
        #[serial]
        fn reads_known_keys() {
            clear_env();
            let temp = TempDir::new().unwrap();
            let path = write_config(
                &temp,
                "# capture settings\n\
                 l3_protocols = ipv4\n\
                 l4_protocols = tcp,17\n\
                 \n\
                 filter = port 53\n\
                 mode = or\n\
                 color = blue\n",
            );

            let config = Config::load_from(&path).unwrap();
            assert_eq!(config.l3_protocols, "ipv4");
            assert_eq!(config.l4_protocols, "tcp,17");
            assert_eq!(config.filter.as_deref(), Some("port 53"));
            assert_eq!(config.mode, FilterMode::Or);
        }

        #[test]
        #[serial]
        fn empty_filter_is_none() {
            clear_env();
            let temp = TempDir::new().unwrap();
            let path = write_config(&temp, "filter =\n");
            assert!(Config::load_from(&path).unwrap().filter.is_none());
        }

        #[test]
        #[serial]
        fn invalid_mode_is_rejected() {
            clear_env();
            let temp = TempDir::new().unwrap();
            let path = write_config(&temp, "mode = xor\n");
            assert!(matches!(
                Config::load_from(&path),
                Err(FilterError::UnknownMode(_))
            ));
        }

        #[test]
        #[serial]
        fn line_without_separator_is_rejected() {
            clear_env();
            let temp = TempDir::new().unwrap();
            let path = write_config(&temp, "l4_protocols tcp\n");
            assert!(matches!(
                Config::load_from(&path),
                Err(FilterError::Config(_))
            ));
        }
    }

    mod env_tests {
        use super::*;

        #[test]
        #[serial]
        fn env_overrides_file() {
            clear_env();
            let temp = TempDir::new().unwrap();
            let path = write_config(&temp, "l4_protocols = tcp\nmode = and\n");
            env::set_var("TCPDUMPW_L4_PROTOS", "udp");
            env::set_var("TCPDUMPW_MODE", "replace");

            let config = Config::load_from(&path).unwrap();
            clear_env();

            assert_eq!(config.l4_protocols, "udp");
            assert_eq!(config.mode, FilterMode::Replace);
        }

        #[test]
        #[serial]
        fn config_path_from_env() {
            clear_env();
            let temp = TempDir::new().unwrap();
            let path = write_config(&temp, "l3_protocols = ip6\n");
            env::set_var("TCPDUMPW_CONFIG", &path);

            let config = Config::load().unwrap();
            clear_env();

            assert_eq!(config.l3_protocols, "ip6");
        }

        #[test]
        #[serial]
        fn invalid_env_mode_is_rejected() {
            clear_env();
            let temp = TempDir::new().unwrap();
            env::set_var("TCPDUMPW_MODE", "sometimes");

            let result = Config::load_from(&temp.path().join("absent.conf"));
            clear_env();

            assert!(matches!(result, Err(FilterError::UnknownMode(_))));
        }
    }

    mod chain_tests {
        use super::*;

        #[test]
        fn default_config_matches_all_ip_transport() {
            let expr = Config::default()
                .filter_chain()
                .build(&FilterContext::default())
                .unwrap();
            assert_eq!(expr.as_str(), "(ip or ip6) and (tcp or udp)");
        }

        #[test]
        fn seed_and_selectors_combine() {
            let config = Config {
                l3_protocols: "ipv4".to_string(),
                l4_protocols: "0x11".to_string(),
                filter: Some("port 53".to_string()),
                mode: FilterMode::And,
            };
            let expr = config.filter_chain().build(&FilterContext::default()).unwrap();
            assert_eq!(expr.as_str(), "((port 53) and (ip)) and (udp)");
        }
    }
}
