//! Fluent SELECT construction.
//!
//! ```
//! use querychain::prelude::*;
//!
//! let a = Table::new("Account");
//! let b = Table::new("Branch");
//! let tree = Select::new()
//!     .from([a.clone()])
//!     .join(b.clone())
//!     .on(a.var("getBranchId").eq_col(&b.var("getId")))
//!     .where_(a.var("isActive").eq(true))
//!     .build()
//!     .unwrap();
//! assert!(tree.is_noun(Noun::Select));
//! ```

use crate::ast::{Expression, ExpressionChain, Node, Noun, OrderBy, Table, Token, Variable};
use crate::error::{QueryError, QueryResult};

/// Builds the token tree of one SELECT statement.
#[derive(Debug)]
pub struct Select {
    root: Token,
    error: Option<QueryError>,
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}

impl Select {
    /// SELECT without explicit columns; every FROM/JOIN table is selected.
    pub fn new() -> Self {
        Self {
            root: Token::noun(Noun::Select),
            error: None,
        }
    }

    /// SELECT whole rows of the given tables.
    pub fn tables(tables: impl IntoIterator<Item = Table>) -> Self {
        let mut select = Self::new();
        select
            .root
            .add_all_children(tables.into_iter().map(Token::from));
        select
    }

    /// Select list entries go before FROM.
    pub fn column(mut self, var: Variable) -> Self {
        self.check_select_item(&var);
        self.root.add_child(var.into());
        self
    }

    pub fn columns(mut self, vars: impl IntoIterator<Item = Variable>) -> Self {
        for var in vars {
            self = self.column(var);
        }
        self
    }

    /// Append `COUNT(*)` to the selected columns.
    pub fn count(mut self) -> Self {
        self.root.add_child(Token::noun(Noun::Count));
        self
    }

    pub fn distinct(mut self) -> Self {
        self.root.add_child_first(Token::noun(Noun::Distinct));
        self
    }

    pub fn from(mut self, tables: impl IntoIterator<Item = Table>) -> Self {
        let mut from = Token::noun(Noun::From);
        from.add_all_children(tables.into_iter().map(Token::from));
        if !from.has_children() {
            self.record(QueryError::missing(Noun::From, "no tables given"));
        }
        self.root.add_child(from);
        self
    }

    pub fn join(self, table: Table) -> Join {
        Join::new(self, table, &[])
    }

    pub fn left_join(self, table: Table) -> Join {
        Join::new(self, table, &[Noun::Left])
    }

    pub fn left_outer_join(self, table: Table) -> Join {
        Join::new(self, table, &[Noun::Left, Noun::Outer])
    }

    pub fn left_inner_join(self, table: Table) -> Join {
        Join::new(self, table, &[Noun::Left, Noun::Inner])
    }

    pub fn right_join(self, table: Table) -> Join {
        Join::new(self, table, &[Noun::Right])
    }

    pub fn right_outer_join(self, table: Table) -> Join {
        Join::new(self, table, &[Noun::Right, Noun::Outer])
    }

    pub fn right_inner_join(self, table: Table) -> Join {
        Join::new(self, table, &[Noun::Right, Noun::Inner])
    }

    /// WHERE clause. A condition that would render nothing adds no clause.
    pub fn where_(mut self, condition: impl Into<ExpressionChain>) -> Self {
        let chain = condition.into();
        if chain.should_be_omitted() {
            return self;
        }
        let mut where_ = Token::noun(Noun::Where);
        where_.add_child(Expression::Chain(chain).into());
        self.root.add_child(where_);
        self
    }

    pub fn order_by(mut self, order: OrderBy) -> Self {
        let mut order_by = Token::noun(Noun::OrderBy);
        order_by.add_child(order.into());
        self.root.add_child(order_by);
        self
    }

    pub fn group_by(mut self, vars: impl IntoIterator<Item = Variable>) -> Self {
        let mut group_by = Token::noun(Noun::GroupBy);
        group_by.add_all_children(vars.into_iter().map(Token::from));
        self.root.add_child(group_by);
        self
    }

    /// The tree built so far.
    pub fn root(&self) -> &Token {
        &self.root
    }

    pub fn build(self) -> QueryResult<Token> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.root),
        }
    }

    fn check_select_item(&mut self, var: &Variable) {
        if self.root.iter().any(|c| c.is_noun(Noun::From)) {
            let found = Node::Variable(var.clone()).describe();
            self.record(QueryError::unsupported(Noun::Select, found));
        }
    }

    fn record(&mut self, err: QueryError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}

/// A pending JOIN waiting for its ON condition.
#[derive(Debug)]
pub struct Join {
    select: Select,
    token: Token,
}

impl Join {
    fn new(select: Select, table: Table, qualifiers: &[Noun]) -> Self {
        let mut token = Token::noun(Noun::Join);
        token.add_all_children(qualifiers.iter().map(|n| Token::noun(*n)));
        token.add_child(table.into());
        Self { select, token }
    }

    pub fn on(mut self, condition: impl Into<ExpressionChain>) -> Select {
        let mut on = Token::noun(Noun::On);
        on.add_child(Expression::Chain(condition.into()).into());
        self.token.add_child(on);
        self.finish()
    }

    /// Join without an ON condition.
    pub fn finish(mut self) -> Select {
        self.select.root.add_child(self.token);
        self.select
    }
}
