use serde::{Deserialize, Serialize};

use crate::ast::{ExpressionChain, JoinDirection, JoinKind, Table, Variable};

/// A join extracted from a JOIN marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinStatement {
    pub table: Table,
    #[serde(default)]
    pub direction: JoinDirection,
    #[serde(default)]
    pub kind: JoinKind,
    #[serde(default)]
    pub on: Option<ExpressionChain>,
}

/// One ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub var: Variable,
    #[serde(default)]
    pub desc: bool,
}

/// Ordered sort specification.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderBy {
    pub items: Vec<OrderItem>,
}

impl OrderBy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn asc(mut self, var: Variable) -> Self {
        self.items.push(OrderItem { var, desc: false });
        self
    }

    pub fn desc(mut self, var: Variable) -> Self {
        self.items.push(OrderItem { var, desc: true });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
