use std::collections::BTreeMap;

use crate::ast::*;
use crate::error::{QueryError, QueryResult};
use crate::schema::SchemaProvider;

use super::grammar::Grammar;

/// Parameters bound while rendering one statement.
#[derive(Debug, Default)]
pub struct ParamContext {
    /// Last index handed out (1-based, 0 before the first bind).
    pub index: usize,
    pub params: BTreeMap<usize, Value>,
}

impl ParamContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value to the next index and return its placeholder.
    pub fn bind(&mut self, value: Value, grammar: &dyn Grammar) -> String {
        self.index += 1;
        self.params.insert(self.index, value);
        grammar.placeholder(self.index)
    }
}

/// A rendered condition chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedCondition {
    pub sql: String,
    /// Some top-level member after the first was joined with OR.
    pub has_or: bool,
}

impl RenderedCondition {
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

/// Renders expressions against one grammar, binding literals as it goes.
pub struct ConditionWriter<'a> {
    grammar: &'a dyn Grammar,
    schema: &'a dyn SchemaProvider,
    params: &'a mut ParamContext,
}

impl<'a> ConditionWriter<'a> {
    pub fn new(
        grammar: &'a dyn Grammar,
        schema: &'a dyn SchemaProvider,
        params: &'a mut ParamContext,
    ) -> Self {
        Self {
            grammar,
            schema,
            params,
        }
    }

    /// Render a chain. Omitted members produce no text and no connector;
    /// the first member that does render is never preceded by one.
    pub fn chain(&mut self, chain: &ExpressionChain) -> QueryResult<RenderedCondition> {
        let mut out = RenderedCondition::default();
        let mut rendered = 0;

        for entry in &chain.entries {
            if entry.expr.should_be_omitted() {
                tracing::trace!("omitting null {:?}", entry.expr);
                continue;
            }
            let part = match &entry.expr {
                Expression::Relation(r) => self.relation(r)?,
                Expression::Collection(c) => self.collection(c)?,
                Expression::Chain(inner) => {
                    let nested = self.chain(inner)?;
                    if nested.is_empty() {
                        continue;
                    }
                    format!("({})", nested.sql)
                }
            };
            if rendered > 0 {
                let connector = entry.connector.unwrap_or_default();
                if connector == Connector::Or {
                    out.has_or = true;
                }
                out.sql.push(' ');
                out.sql.push_str(connector.keyword());
                out.sql.push(' ');
            }
            out.sql.push_str(&part);
            rendered += 1;
        }

        Ok(out)
    }

    fn variable(&self, var: &Variable, ignore_case: bool) -> String {
        let name = self.grammar.variable_name(var, self.schema);
        if ignore_case {
            self.grammar.lower(&name)
        } else {
            name
        }
    }

    pub fn relation(&mut self, relation: &Relation) -> QueryResult<String> {
        let left = self.variable(&relation.left, relation.ignore_case);

        let mark = match relation.op {
            Operator::Eq if !relation.has_value() => return Ok(format!("{} IS NULL", left)),
            Operator::Ne if !relation.has_value() => {
                return Ok(format!("{} IS NOT NULL", left));
            }
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Like => self.grammar.pattern_operator(),
            Operator::In | Operator::NotIn => {
                return Err(QueryError::comparator(relation.op, "relation"));
            }
        };

        let right = match &relation.right {
            Operand::Column(var) => self.variable(var, relation.ignore_case),
            Operand::Value(value) => {
                let bound = if relation.ignore_case && !value.is_null() {
                    value.to_lowercase()
                } else {
                    value.clone()
                };
                self.params.bind(bound, self.grammar)
            }
        };

        Ok(format!("{} {} {}", left, mark, right))
    }

    /// IN / NOT IN with the whole list bound as one parameter. An empty
    /// list collapses to IS NULL / IS NOT NULL.
    pub fn collection(&mut self, collection: &Collection) -> QueryResult<String> {
        let (keyword, null_form) = match collection.op {
            Operator::In => ("IN", "IS NULL"),
            Operator::NotIn => ("NOT IN", "IS NOT NULL"),
            op => return Err(QueryError::comparator(op, "collection")),
        };
        let var = self.variable(&collection.var, false);

        match &collection.values {
            Some(values) if !values.is_empty() => {
                let placeholder = self.params.bind(Value::List(values.clone()), self.grammar);
                Ok(format!("{} {} ({})", var, keyword, placeholder))
            }
            _ => Ok(format!("{} {}", var, null_form)),
        }
    }
}
