//! Layered application configuration.
//!
//! Defaults, then the YAML file (if provided), then `RELKIT__*` environment
//! variables; the `--mock` flag overrides the result from the CLI.

use std::collections::BTreeMap;
use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// DSN of a private in-memory database.
pub const MEMORY_DSN: &str = "sqlite::memory:";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
    /// Per-module DSN overrides keyed by module name
    /// (`one_to_one`, `one_to_many`, `single_table`, `table_per_class`).
    pub modules: BTreeMap<String, ModuleDbConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Shared default DSN; every module without an override connects here.
    pub dsn: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: MEMORY_DSN.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleDbConfig {
    pub dsn: Option<String>,
}

impl AppConfig {
    /// Load the layered configuration.
    ///
    /// # Errors
    /// Returns an error if the file or an override does not parse.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        let config = figment
            .merge(Env::prefixed("RELKIT__").split("__"))
            .extract()?;
        Ok(config)
    }

    /// Resolve the DSN for a module: its override, else the shared default.
    #[must_use]
    pub fn module_dsn(&self, module: &str) -> &str {
        self.modules
            .get(module)
            .and_then(|m| m.dsn.as_deref())
            .unwrap_or(&self.database.dsn)
    }

    /// Force every module onto a private in-memory database.
    pub fn set_mock(&mut self) {
        self.database.dsn = MEMORY_DSN.to_owned();
        for module in self.modules.values_mut() {
            module.dsn = None;
        }
    }
}
