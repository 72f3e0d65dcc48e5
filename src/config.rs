//! Render configuration.
//!
//! Looked up at `<config dir>/querychain/config.toml`:
//!
//! ```toml
//! dialect = "jpql"
//! schema = "/etc/myapp/entities.toml"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{QueryError, QueryResult};
use crate::schema::Schema;
use crate::transpiler::Dialect;

const CONFIG_DIR: &str = "querychain";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderConfig {
    /// Dialect used when none is given explicitly.
    #[serde(default)]
    pub dialect: Dialect,

    /// Path to a JSON or TOML schema file with naming overrides.
    #[serde(default)]
    pub schema: Option<PathBuf>,
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    pub fn from_toml_str(content: &str) -> QueryResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> QueryResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the user config file, or defaults when there is none.
    pub fn discover() -> QueryResult<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Loading render config from {}", path.display());
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Schema named by this config, or an empty one.
    pub fn load_schema(&self) -> QueryResult<Schema> {
        match &self.schema {
            Some(path) => Schema::load(path).map_err(|e| match e {
                QueryError::Io(io) => QueryError::Config(format!(
                    "cannot read schema {}: {}",
                    path.display(),
                    io
                )),
                other => other,
            }),
            None => Ok(Schema::default()),
        }
    }
}

/// Builder for RenderConfig
#[derive(Debug, Default)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.config.dialect = dialect;
        self
    }

    pub fn schema(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.schema = Some(path.into());
        self
    }

    pub fn build(self) -> RenderConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::from_toml_str("").unwrap();
        assert_eq!(config.dialect, Dialect::Sql);
        assert!(config.schema.is_none());
        assert!(config.load_schema().unwrap().entities.is_empty());
    }

    #[test]
    fn test_load_with_schema() {
        let dir = tempfile::tempdir().unwrap();
        let schema_path = dir.path().join("entities.json");
        std::fs::write(
            &schema_path,
            r#"{ "entities": [{ "type_name": "Car", "name": "vehicle" }] }"#,
        )
        .unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            format!(
                "dialect = \"jpql\"\nschema = {:?}\n",
                schema_path.display().to_string()
            ),
        )
        .unwrap();

        let config = RenderConfig::load(&config_path).unwrap();
        assert_eq!(config.dialect, Dialect::Jpql);
        let schema = config.load_schema().unwrap();
        assert_eq!(schema.entity("Car").and_then(|e| e.name.as_deref()), Some("vehicle"));
    }

    #[test]
    fn test_missing_schema_file() {
        let config = RenderConfig::builder()
            .dialect(Dialect::Jpql)
            .schema("/nonexistent/entities.toml")
            .build();
        assert!(matches!(config.load_schema(), Err(QueryError::Config(_))));
    }

    #[test]
    fn test_unknown_dialect() {
        assert!(matches!(
            RenderConfig::from_toml_str("dialect = \"cobol\""),
            Err(QueryError::Toml(_))
        ));
    }
}
