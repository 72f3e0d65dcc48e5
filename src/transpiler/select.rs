//! SELECT statement accumulator.
//!
//! A [`SelectBuilder`] collects one text fragment per clause plus the bound
//! parameters while the walker feeds it, then assembles the statement in
//! [`SelectBuilder::finish`]. It renders exactly one statement: `finish`
//! consumes it.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::ast::*;
use crate::error::QueryResult;
use crate::schema::SchemaProvider;

use super::conditions::{ConditionWriter, ParamContext, RenderedCondition};
use super::grammar::{Grammar, JoinStrategy};
use super::walker::SelectHandler;

const COUNT_ALL: &str = "COUNT(*)";

/// Statement text plus its parameters keyed by placeholder index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedQuery {
    pub sql: String,
    pub params: BTreeMap<usize, Value>,
}

impl RenderedQuery {
    pub fn to_json(&self) -> QueryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct SelectBuilder<'a> {
    grammar: &'a dyn Grammar,
    schema: &'a dyn SchemaProvider,
    columns: String,
    tables: String,
    joins: String,
    join_conditions: Vec<RenderedCondition>,
    where_: String,
    /// The WHERE text joins top-level members with OR.
    where_has_or: bool,
    order_by: String,
    group_by: String,
    params: ParamContext,
    /// No select list was given; every FROM/JOIN table is selected as it arrives.
    select_all: bool,
}

/// Separate list elements with `, `.
fn append_element(fragment: &mut String, element: &str) {
    if !fragment.is_empty() {
        fragment.push_str(", ");
    }
    fragment.push_str(element);
}

impl<'a> SelectBuilder<'a> {
    pub fn new(grammar: &'a dyn Grammar, schema: &'a dyn SchemaProvider) -> Self {
        Self {
            grammar,
            schema,
            columns: String::new(),
            tables: String::new(),
            joins: String::new(),
            join_conditions: Vec::new(),
            where_: String::new(),
            where_has_or: false,
            order_by: String::new(),
            group_by: String::new(),
            params: ParamContext::new(),
            select_all: false,
        }
    }

    fn condition(&mut self, chain: &ExpressionChain) -> QueryResult<RenderedCondition> {
        ConditionWriter::new(self.grammar, self.schema, &mut self.params).chain(chain)
    }

    fn select_all_from(&mut self, table: &Table) {
        let star = self.grammar.select_all(table, self.schema);
        append_element(&mut self.columns, &star);
    }

    /// Join conditions folded into WHERE, wrapped in one parenthesis.
    fn join_condition_sql(&self) -> Option<String> {
        if self.join_conditions.is_empty() {
            return None;
        }
        let several = self.join_conditions.len() > 1;
        let parts: Vec<String> = self
            .join_conditions
            .iter()
            .map(|c| {
                if several && c.has_or {
                    format!("({})", c.sql)
                } else {
                    c.sql.clone()
                }
            })
            .collect();
        Some(format!("({})", parts.join(" AND ")))
    }

    /// Assemble the statement.
    ///
    /// Folded join conditions come first in WHERE, in one parenthesis. When
    /// the WHERE chain itself has a top-level OR it is parenthesized too, so
    /// the body reads `(<joins>) AND (<a> OR <b>)` and the joins constrain
    /// every alternative.
    pub fn finish(self) -> RenderedQuery {
        let mut sql = format!("SELECT {} FROM {}", self.columns, self.tables);
        sql.push_str(&self.joins);

        let where_body = match (self.join_condition_sql(), self.where_.is_empty()) {
            (Some(joins), true) => joins,
            (Some(joins), false) if self.where_has_or => {
                format!("{} AND ({})", joins, self.where_)
            }
            (Some(joins), false) => format!("{} AND {}", joins, self.where_),
            (None, _) => self.where_.clone(),
        };
        if !where_body.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_body);
        }
        if !self.order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order_by);
        }
        if !self.group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.group_by);
        }

        tracing::debug!(
            dialect = self.grammar.name(),
            params = self.params.params.len(),
            "rendered SELECT"
        );

        RenderedQuery {
            sql,
            params: self.params.params,
        }
    }
}

impl SelectHandler for SelectBuilder<'_> {
    fn handle_select(
        &mut self,
        tables: &[Table],
        columns: &[Variable],
        distinct: bool,
        count: bool,
    ) -> QueryResult<()> {
        for table in tables {
            self.select_all_from(table);
        }
        for column in columns {
            let name = self.grammar.variable_name(column, self.schema);
            append_element(&mut self.columns, &name);
        }
        if distinct && !self.columns.is_empty() {
            self.columns.insert_str(0, "DISTINCT ");
        }
        if count {
            append_element(&mut self.columns, COUNT_ALL);
        }
        self.select_all = self.columns.is_empty();
        tracing::trace!(columns = %self.columns, select_all = self.select_all, "select list");
        Ok(())
    }

    fn handle_from(&mut self, tables: &[Table]) -> QueryResult<()> {
        for table in tables {
            if self.select_all {
                self.select_all_from(table);
            }
            let definition = self.grammar.table_definition(table, self.schema);
            append_element(&mut self.tables, &definition);
        }
        Ok(())
    }

    fn handle_join(
        &mut self,
        table: &Table,
        direction: JoinDirection,
        kind: JoinKind,
        on: Option<&ExpressionChain>,
    ) -> QueryResult<()> {
        tracing::trace!(table = %table, ?direction, ?kind, "join");
        match self.grammar.join_strategy() {
            JoinStrategy::Native => {
                if self.select_all {
                    self.select_all_from(table);
                }
                match direction {
                    JoinDirection::None => {}
                    JoinDirection::Left => self.joins.push_str(" LEFT"),
                    JoinDirection::Right => self.joins.push_str(" RIGHT"),
                }
                match kind {
                    JoinKind::None => {}
                    JoinKind::Inner => self.joins.push_str(" INNER"),
                    JoinKind::Outer => self.joins.push_str(" OUTER"),
                }
                let definition = self.grammar.table_definition(table, self.schema);
                self.joins.push_str(" JOIN ");
                self.joins.push_str(&definition);
                if let Some(chain) = on {
                    let condition = self.condition(chain)?;
                    if !condition.is_empty() {
                        self.joins.push_str(" ON ");
                        self.joins.push_str(&condition.sql);
                    }
                }
            }
            JoinStrategy::FoldIntoWhere => {
                self.handle_from(std::slice::from_ref(table))?;
                if let Some(chain) = on {
                    let condition = self.condition(chain)?;
                    if !condition.is_empty() {
                        self.join_conditions.push(condition);
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_where(&mut self, chain: &ExpressionChain) -> QueryResult<()> {
        let condition = self.condition(chain)?;
        if !condition.is_empty() {
            self.where_ = condition.sql;
            self.where_has_or = condition.has_or;
        }
        Ok(())
    }

    fn handle_order_by(&mut self, order: &OrderBy) -> QueryResult<()> {
        for item in &order.items {
            let mut entry = self.grammar.variable_name(&item.var, self.schema);
            if item.desc {
                entry.push_str(" DESC");
            }
            append_element(&mut self.order_by, &entry);
        }
        Ok(())
    }

    fn handle_group_by(&mut self, columns: &[Variable]) -> QueryResult<()> {
        for column in columns {
            let name = self.grammar.variable_name(column, self.schema);
            append_element(&mut self.group_by, &name);
        }
        Ok(())
    }
}
