use serde::{Deserialize, Serialize};

use crate::ast::{Collection, Operator, Relation, Value};

/// A queryable entity, optionally aliased.
///
/// Two references to the same entity with different aliases are different
/// tables, which is what makes self-joins expressible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Table {
    /// Type name of the entity (e.g. `User`).
    pub entity: String,
    #[serde(default)]
    pub alias: Option<String>,
}

impl Table {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            alias: None,
        }
    }

    /// Reference to the entity backing a Rust type, named after the type's
    /// last path segment.
    pub fn of<T: ?Sized>() -> Self {
        let full = std::any::type_name::<T>();
        let base = full.split('<').next().unwrap_or(full);
        let short = base.rsplit("::").next().unwrap_or(base);
        Self::new(short)
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Column on this table, named by its accessor (`getName`, `isActive`, `email`).
    pub fn var(&self, accessor: impl Into<String>) -> Variable {
        Variable {
            table: self.clone(),
            accessor: accessor.into(),
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} {}", self.entity, alias),
            None => write!(f, "{}", self.entity),
        }
    }
}

/// A column on a specific table reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    pub table: Table,
    pub accessor: String,
}

impl Variable {
    pub fn eq(&self, value: impl Into<Value>) -> Relation {
        Relation::new(self.clone(), Operator::Eq, value)
    }

    pub fn ne(&self, value: impl Into<Value>) -> Relation {
        Relation::new(self.clone(), Operator::Ne, value)
    }

    pub fn lt(&self, value: impl Into<Value>) -> Relation {
        Relation::new(self.clone(), Operator::Lt, value)
    }

    pub fn le(&self, value: impl Into<Value>) -> Relation {
        Relation::new(self.clone(), Operator::Le, value)
    }

    pub fn gt(&self, value: impl Into<Value>) -> Relation {
        Relation::new(self.clone(), Operator::Gt, value)
    }

    pub fn ge(&self, value: impl Into<Value>) -> Relation {
        Relation::new(self.clone(), Operator::Ge, value)
    }

    /// Pattern match against a wildcard pattern.
    pub fn like(&self, pattern: impl Into<Value>) -> Relation {
        Relation::new(self.clone(), Operator::Like, pattern)
    }

    /// Compare against another column.
    pub fn cmp_col(&self, op: Operator, other: &Variable) -> Relation {
        Relation::with_column(self.clone(), op, other.clone())
    }

    pub fn eq_col(&self, other: &Variable) -> Relation {
        self.cmp_col(Operator::Eq, other)
    }

    pub fn is_in<V: Into<Value>>(&self, values: impl IntoIterator<Item = V>) -> Collection {
        Collection::new(self.clone(), Operator::In, values)
    }

    pub fn not_in<V: Into<Value>>(&self, values: impl IntoIterator<Item = V>) -> Collection {
        Collection::new(self.clone(), Operator::NotIn, values)
    }

    pub fn is_null(&self) -> Relation {
        Relation::new(self.clone(), Operator::Eq, Value::Null)
    }

    pub fn is_not_null(&self) -> Relation {
        Relation::new(self.clone(), Operator::Ne, Value::Null)
    }
}
