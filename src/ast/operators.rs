use serde::{Deserialize, Serialize};

/// Comparison operator of a relation or collection test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    /// Wildcard pattern match; the keyword is dialect specific.
    Like,
    In,
    NotIn,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Like => "LIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
        };
        f.write_str(op)
    }
}

/// Logical connector placed before an expression in a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Connector {
    #[default]
    And,
    Or,
}

impl Connector {
    pub fn keyword(&self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

/// LEFT / RIGHT qualifier of a join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum JoinDirection {
    #[default]
    None,
    Left,
    Right,
}

/// INNER / OUTER qualifier of a join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum JoinKind {
    #[default]
    None,
    Inner,
    Outer,
}
