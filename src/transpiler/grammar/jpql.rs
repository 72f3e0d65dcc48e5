use super::{Grammar, JoinStrategy};
use crate::ast::{Table, Variable};
use crate::schema::SchemaProvider;

/// JPQL-like object query language.
///
/// Every table reference carries an alias: unaliased entities alias
/// themselves (`Person Person`). Columns are addressed as entity
/// attributes, so column-name overrides do not apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpqlGrammar;

impl Grammar for JpqlGrammar {
    fn name(&self) -> &'static str {
        "jpql"
    }

    fn lower(&self, expr: &str) -> String {
        format!("lower({})", expr)
    }

    fn pattern_operator(&self) -> &'static str {
        "LIKE"
    }

    fn join_strategy(&self) -> JoinStrategy {
        JoinStrategy::FoldIntoWhere
    }

    fn table_definition(&self, table: &Table, schema: &dyn SchemaProvider) -> String {
        let name = schema.entity_name(table);
        match &table.alias {
            Some(alias) => format!("{} {}", name, alias),
            None => format!("{} {}", name, name),
        }
    }

    fn select_all(&self, table: &Table, schema: &dyn SchemaProvider) -> String {
        self.table_name(table, schema)
    }

    fn variable_name(&self, var: &Variable, schema: &dyn SchemaProvider) -> String {
        format!(
            "{}.{}",
            self.table_name(&var.table, schema),
            schema.attribute_name(var)
        )
    }
}
