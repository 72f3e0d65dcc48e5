//! Boolean expression model: relations, collection tests and connector chains.

use serde::{Deserialize, Serialize};

use crate::ast::{Connector, Operator, Value, Variable};

/// A node of a WHERE or ON condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Relation(Relation),
    Collection(Collection),
    /// A nested chain, rendered in parentheses.
    Chain(ExpressionChain),
}

impl Expression {
    /// Whether this expression disappears when its value is absent.
    pub fn is_null_omittable(&self) -> bool {
        match self {
            Expression::Relation(r) => r.omittable,
            Expression::Collection(c) => c.omittable,
            Expression::Chain(_) => true,
        }
    }

    /// The value this expression tests is absent. A chain counts as absent
    /// when every member of it is omitted.
    pub fn is_null(&self) -> bool {
        match self {
            Expression::Relation(r) => !r.has_value(),
            Expression::Collection(c) => c.is_null(),
            Expression::Chain(chain) => chain.should_be_omitted(),
        }
    }

    /// Omittable and its value is absent.
    pub fn should_be_omitted(&self) -> bool {
        self.is_null_omittable() && self.is_null()
    }
}

impl From<Relation> for Expression {
    fn from(r: Relation) -> Self {
        Expression::Relation(r)
    }
}

impl From<Collection> for Expression {
    fn from(c: Collection) -> Self {
        Expression::Collection(c)
    }
}

impl From<ExpressionChain> for Expression {
    fn from(chain: ExpressionChain) -> Self {
        Expression::Chain(chain)
    }
}

/// Right-hand side of a relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    Value(Value),
    Column(Variable),
}

/// Binary comparison between a column and a literal or another column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub left: Variable,
    pub op: Operator,
    pub right: Operand,
    #[serde(default)]
    pub ignore_case: bool,
    #[serde(default)]
    pub omittable: bool,
}

impl Relation {
    pub fn new(left: Variable, op: Operator, value: impl Into<Value>) -> Self {
        Self {
            left,
            op,
            right: Operand::Value(value.into()),
            ignore_case: false,
            omittable: false,
        }
    }

    pub fn with_column(left: Variable, op: Operator, right: Variable) -> Self {
        Self {
            left,
            op,
            right: Operand::Column(right),
            ignore_case: false,
            omittable: false,
        }
    }

    /// Drop this relation from the output when its value is absent.
    pub fn omittable(mut self) -> Self {
        self.omittable = true;
        self
    }

    /// Compare lower-cased on both sides.
    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    /// True when the right side is a column or a non-null literal.
    pub fn has_value(&self) -> bool {
        match &self.right {
            Operand::Value(v) => !v.is_null(),
            Operand::Column(_) => true,
        }
    }

    pub fn should_be_omitted(&self) -> bool {
        self.omittable && !self.has_value()
    }
}

/// IN / NOT IN test against a list of literals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub var: Variable,
    pub op: Operator,
    /// `None` when the list given was empty.
    pub values: Option<Vec<Value>>,
    #[serde(default)]
    pub omittable: bool,
}

impl Collection {
    pub fn new<V: Into<Value>>(
        var: Variable,
        op: Operator,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        Self {
            var,
            op,
            values: if values.is_empty() { None } else { Some(values) },
            omittable: false,
        }
    }

    pub fn omittable(mut self) -> Self {
        self.omittable = true;
        self
    }

    pub fn is_null(&self) -> bool {
        self.values.as_ref().is_none_or(|v| v.is_empty())
    }

    pub fn should_be_omitted(&self) -> bool {
        self.omittable && self.is_null()
    }
}

/// One member of a chain and the connector that precedes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainEntry {
    /// `None` only for the first entry.
    pub connector: Option<Connector>,
    pub expr: Expression,
}

/// Ordered expressions joined by AND / OR.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpressionChain {
    pub entries: Vec<ChainEntry>,
}

impl ExpressionChain {
    pub fn new(first: impl Into<Expression>) -> Self {
        Self {
            entries: vec![ChainEntry {
                connector: None,
                expr: first.into(),
            }],
        }
    }

    pub fn and(self, expr: impl Into<Expression>) -> Self {
        self.push(Connector::And, expr)
    }

    pub fn or(self, expr: impl Into<Expression>) -> Self {
        self.push(Connector::Or, expr)
    }

    /// Append with an explicit connector. The connector of the first entry is dropped.
    pub fn push(mut self, connector: Connector, expr: impl Into<Expression>) -> Self {
        let connector = if self.entries.is_empty() {
            None
        } else {
            Some(connector)
        };
        self.entries.push(ChainEntry {
            connector,
            expr: expr.into(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A chain whose every member is omitted renders nothing.
    pub fn should_be_omitted(&self) -> bool {
        self.entries.iter().all(|e| e.expr.should_be_omitted())
    }
}

impl From<Relation> for ExpressionChain {
    fn from(r: Relation) -> Self {
        ExpressionChain::new(r)
    }
}

impl From<Collection> for ExpressionChain {
    fn from(c: Collection) -> Self {
        ExpressionChain::new(c)
    }
}
