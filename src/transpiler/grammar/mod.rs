//! Dialect capabilities.
//!
//! A [`Grammar`] answers the handful of questions on which dialects differ:
//! how names are spelled, which keywords are used and how joins are
//! expressed. The default methods describe plain SQL; dialects override
//! only what they change.

pub mod ansi;
pub mod jpql;

pub use ansi::AnsiGrammar;
pub use jpql::JpqlGrammar;

use crate::ast::Table;
use crate::ast::Variable;
use crate::schema::SchemaProvider;

/// How a dialect expresses JOIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStrategy {
    /// `[LEFT|RIGHT] [INNER|OUTER] JOIN t ON cond`
    Native,
    /// Joined table goes to FROM, its condition to WHERE.
    FoldIntoWhere,
}

pub trait Grammar {
    /// Short dialect name for diagnostics.
    fn name(&self) -> &'static str;

    /// Wrap an expression in the dialect's lower-casing function.
    fn lower(&self, expr: &str) -> String;

    /// Keyword of the wildcard pattern-match comparator.
    fn pattern_operator(&self) -> &'static str;

    /// Placeholder text of the parameter with the given 1-based index.
    fn placeholder(&self, index: usize) -> String {
        format!("?{}", index)
    }

    fn join_strategy(&self) -> JoinStrategy {
        JoinStrategy::Native
    }

    /// Name a table is referred to by: its alias, else its entity name.
    fn table_name(&self, table: &Table, schema: &dyn SchemaProvider) -> String {
        match &table.alias {
            Some(alias) => alias.clone(),
            None => schema.entity_name(table),
        }
    }

    /// Table as written in FROM / JOIN position.
    fn table_definition(&self, table: &Table, schema: &dyn SchemaProvider) -> String {
        let name = schema.entity_name(table);
        match &table.alias {
            Some(alias) => format!("{} {}", name, alias),
            None => name,
        }
    }

    /// Whole-row selection of a table.
    fn select_all(&self, table: &Table, schema: &dyn SchemaProvider) -> String {
        format!("{}.*", self.table_name(table, schema))
    }

    /// Qualified name of a column.
    fn variable_name(&self, var: &Variable, schema: &dyn SchemaProvider) -> String {
        format!(
            "{}.{}",
            self.table_name(&var.table, schema),
            schema.column_name(var)
        )
    }
}
