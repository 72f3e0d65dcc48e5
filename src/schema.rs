//! Entity and column naming.
//!
//! The renderer never guesses names itself; it asks a [`SchemaProvider`].
//! [`ConventionSchema`] derives everything from type and accessor names,
//! while [`Schema`] layers overrides loaded from JSON/TOML on top of it.
//!
//! # Example
//! ```
//! use querychain::schema::{Schema, SchemaProvider};
//! use querychain::ast::Table;
//!
//! let json = r#"{
//!     "entities": [{
//!         "type_name": "Customer",
//!         "name": "customers",
//!         "columns": [{ "accessor": "getFirstName", "name": "FIRST_NAME" }]
//!     }]
//! }"#;
//!
//! let schema = Schema::from_json_str(json).unwrap();
//! let t = Table::new("Customer");
//! assert_eq!(schema.entity_name(&t), "customers");
//! assert_eq!(schema.column_name(&t.var("getFirstName")), "first_name");
//! assert_eq!(schema.attribute_name(&t.var("getFirstName")), "firstName");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ast::{Table, Variable};
use crate::error::{QueryError, QueryResult};

/// Resolves rendered names for tables and columns.
pub trait SchemaProvider {
    /// Entity / table name of a table reference.
    fn entity_name(&self, table: &Table) -> String;

    /// Storage column name of a variable, honoring overrides.
    fn column_name(&self, var: &Variable) -> String {
        self.attribute_name(var)
    }

    /// Property name of a variable as seen on the entity type.
    fn attribute_name(&self, var: &Variable) -> String {
        attribute_from_accessor(&var.accessor)
    }
}

/// Strip a `get`/`is` accessor prefix and lower-case the first letter.
///
/// The prefix is only stripped when an uppercase letter follows it, so
/// `issuer` stays `issuer` while `isActive` becomes `active`.
pub fn attribute_from_accessor(accessor: &str) -> String {
    let stripped = ["get", "is"]
        .iter()
        .find_map(|prefix| {
            accessor
                .strip_prefix(prefix)
                .filter(|rest| rest.chars().next().is_some_and(char::is_uppercase))
        })
        .unwrap_or(accessor);

    let mut chars = stripped.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Names derived purely from type and accessor names.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionSchema;

impl SchemaProvider for ConventionSchema {
    fn entity_name(&self, table: &Table) -> String {
        table.entity.clone()
    }
}

/// Naming overrides for entities and their columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub entities: Vec<EntityDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDef {
    /// Type name the entity is referenced by in tables.
    pub type_name: String,
    /// Rendered entity name; the type name when absent.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDef {
    pub accessor: String,
    pub name: String,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entity(&mut self, entity: EntityDef) {
        self.entities.push(entity);
    }

    pub fn entity(&self, type_name: &str) -> Option<&EntityDef> {
        self.entities.iter().find(|e| e.type_name == type_name)
    }

    pub fn from_json_str(json: &str) -> QueryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_toml_str(toml: &str) -> QueryResult<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Load from a `.json` or `.toml` file.
    pub fn load(path: impl AsRef<Path>) -> QueryResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            other => Err(QueryError::Config(format!(
                "unsupported schema format '{}' for {}",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }
}

impl SchemaProvider for Schema {
    fn entity_name(&self, table: &Table) -> String {
        self.entity(&table.entity)
            .and_then(|e| e.name.clone())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| table.entity.clone())
    }

    fn column_name(&self, var: &Variable) -> String {
        self.entity(&var.table.entity)
            .and_then(|e| e.columns.iter().find(|c| c.accessor == var.accessor))
            .filter(|c| !c.name.is_empty())
            .map(|c| c.name.to_lowercase())
            .unwrap_or_else(|| self.attribute_name(var))
    }
}
