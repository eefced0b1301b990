//! Configuration loading from sortscope.toml
//!
//! Sortscope configuration can be specified in a `sortscope.toml` file in the
//! project root. The configuration is automatically discovered by walking up
//! from the current directory. Command-line flags override file values.

use crate::input::Pattern;
use serde::{Deserialize, Serialize};
use sortscope_core::{Algorithm, AlgorithmRegistry};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

/// Name of the configuration file looked up during discovery
pub const CONFIG_FILE_NAME: &str = "sortscope.toml";

/// Sortscope configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SortscopeConfig {
    /// Generated input defaults
    #[serde(default)]
    pub input: InputConfig,
    /// Comparison defaults
    #[serde(default)]
    pub compare: CompareConfig,
    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults for generated input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    /// Number of generated values
    #[serde(default = "default_size")]
    pub size: usize,
    /// Inclusive lower bound of generated values
    #[serde(default = "default_min")]
    pub min: i64,
    /// Inclusive upper bound of generated values
    #[serde(default = "default_max")]
    pub max: i64,
    /// Shape of generated data
    #[serde(default)]
    pub pattern: Pattern,
    /// Fixed seed for reproducible data
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            min: default_min(),
            max: default_max(),
            pattern: Pattern::default(),
            seed: None,
        }
    }
}

fn default_size() -> usize {
    20
}
fn default_min() -> i64 {
    1
}
fn default_max() -> i64 {
    100
}

/// Defaults for comparisons
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CompareConfig {
    /// Algorithms compared when none are named (empty = all)
    #[serde(default)]
    pub algorithms: Vec<String>,
    /// Run variants in parallel
    #[serde(default)]
    pub parallel: bool,
    /// Rayon pool size for parallel runs (0 = all cores)
    #[serde(default)]
    pub threads: usize,
    /// Extra names mapped onto algorithm identifiers
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default output format: "human", "json", "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// Print recorded steps after a single run
    #[serde(default)]
    pub show_steps: bool,
    /// Maximum number of steps printed
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            show_steps: false,
            max_steps: default_max_steps(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_max_steps() -> usize {
    50
}

impl SortscopeConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` looking for [`CONFIG_FILE_NAME`]
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        warn!(
                            path = %config_path.display(),
                            error = %e,
                            "ignoring invalid config, using defaults"
                        );
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Standard registry extended with the configured aliases
    pub fn registry(&self) -> anyhow::Result<AlgorithmRegistry> {
        let mut registry = AlgorithmRegistry::standard();
        for (alias, target) in &self.compare.aliases {
            let algorithm: Algorithm = target
                .parse()
                .map_err(|e| anyhow::anyhow!("Alias '{}': {}", alias, e))?;
            registry.register(alias, algorithm);
        }
        Ok(registry)
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Sortscope Configuration

[input]
# Number of generated values
size = 20
# Inclusive bounds of generated values
min = 1
max = 100
# Pattern: random, sorted, reverse, nearly-sorted, duplicates
pattern = "random"
# Fixed seed for reproducible data (uncomment to enable)
# seed = 42

[compare]
# Algorithms compared when none are named on the command line (empty = all)
algorithms = []
# Run variants in parallel
parallel = false
# Thread pool size for parallel runs (0 = all cores)
threads = 0

# Extra names for algorithms
[compare.aliases]
# heap = "priority_queue_sort"

[output]
# Default output format: human, json, csv
format = "human"
# Print recorded steps after a single run
show_steps = false
# Maximum number of steps printed
max_steps = 50
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SortscopeConfig::default();
        assert_eq!(config.input.size, 20);
        assert_eq!(config.input.pattern, Pattern::Random);
        assert!(config.compare.algorithms.is_empty());
        assert!(!config.compare.parallel);
        assert_eq!(config.output.format, "human");
        assert_eq!(config.output.max_steps, 50);
    }

    #[test]
    fn test_default_toml_parses_to_defaults() {
        let config: SortscopeConfig = toml::from_str(&SortscopeConfig::default_toml()).unwrap();
        assert_eq!(config, SortscopeConfig::default());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [input]
            size = 8
            pattern = "nearly-sorted"
            seed = 7

            [compare]
            algorithms = ["merge_sort", "quick_sort"]

            [compare.aliases]
            heap = "priority_queue_sort"
        "#;

        let config: SortscopeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.input.size, 8);
        assert_eq!(config.input.pattern, Pattern::NearlySorted);
        assert_eq!(config.input.seed, Some(7));
        // Defaults should still apply
        assert_eq!(config.input.max, 100);
        assert_eq!(config.output.format, "human");

        let registry = config.registry().unwrap();
        assert_eq!(registry.resolve("heap"), Some(Algorithm::PriorityQueueSort));
    }

    #[test]
    fn test_bad_alias_target() {
        let mut config = SortscopeConfig::default();
        config
            .compare
            .aliases
            .insert("fast".to_string(), "bogo_sort".to_string());
        let err = config.registry().unwrap_err();
        assert!(err.to_string().contains("bogo_sort"));
    }

    #[test]
    fn test_discover_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[output]\nformat = \"json\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = SortscopeConfig::discover_from(&nested).unwrap();
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn test_discover_invalid_nearest_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[output]\nformat = \"json\"\n",
        )
        .unwrap();
        let nested = dir.path().join("project");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join(CONFIG_FILE_NAME), "[input\nsize = ").unwrap();

        // The nearest file wins even when it is broken; parents are not consulted
        assert!(SortscopeConfig::discover_from(&nested).is_none());
        assert!(SortscopeConfig::load(nested.join(CONFIG_FILE_NAME)).is_err());
    }
}
