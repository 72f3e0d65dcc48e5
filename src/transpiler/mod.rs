//! Renders token trees into dialect-specific query text.

pub mod conditions;
pub mod dialect;
pub mod grammar;
pub mod select;
pub mod walker;

#[cfg(test)]
mod tests;

use crate::ast::{Select, Token};
use crate::error::QueryResult;
use crate::schema::{ConventionSchema, SchemaProvider};

pub use conditions::{ConditionWriter, ParamContext};
pub use dialect::Dialect;
pub use grammar::{Grammar, JoinStrategy};
pub use select::{RenderedQuery, SelectBuilder};
pub use walker::SelectHandler;

/// Render a SELECT tree with a fresh builder.
pub fn render(
    root: &Token,
    dialect: Dialect,
    schema: &dyn SchemaProvider,
) -> QueryResult<RenderedQuery> {
    let grammar = dialect.grammar();
    let mut builder = SelectBuilder::new(grammar.as_ref(), schema);
    walker::walk(root, &mut builder)?;
    Ok(builder.finish())
}

/// Trait for converting statement trees to query text.
pub trait ToQuery {
    /// Render as plain SQL with convention-derived names.
    fn to_query(&self) -> QueryResult<RenderedQuery> {
        self.to_query_with(Dialect::default(), &ConventionSchema)
    }

    fn to_query_with(
        &self,
        dialect: Dialect,
        schema: &dyn SchemaProvider,
    ) -> QueryResult<RenderedQuery>;
}

impl ToQuery for Token {
    fn to_query_with(
        &self,
        dialect: Dialect,
        schema: &dyn SchemaProvider,
    ) -> QueryResult<RenderedQuery> {
        render(self, dialect, schema)
    }
}

impl ToQuery for Select {
    fn to_query_with(
        &self,
        dialect: Dialect,
        schema: &dyn SchemaProvider,
    ) -> QueryResult<RenderedQuery> {
        render(self.root(), dialect, schema)
    }
}
