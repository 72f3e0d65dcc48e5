//! Helpers for building condition chains from many expressions.

use crate::ast::{Connector, Expression, ExpressionChain};

fn chain_of<E: Into<Expression>>(
    connector: Connector,
    exprs: impl IntoIterator<Item = E>,
) -> ExpressionChain {
    exprs
        .into_iter()
        .fold(ExpressionChain::default(), |chain, e| chain.push(connector, e))
}

/// `e1 AND e2 AND ...`
pub fn all_of<E: Into<Expression>>(exprs: impl IntoIterator<Item = E>) -> ExpressionChain {
    chain_of(Connector::And, exprs)
}

/// `e1 OR e2 OR ...`
pub fn any_of<E: Into<Expression>>(exprs: impl IntoIterator<Item = E>) -> ExpressionChain {
    chain_of(Connector::Or, exprs)
}

/// Wrap a chain so it renders in parentheses when nested in another chain.
pub fn group(chain: impl Into<ExpressionChain>) -> Expression {
    Expression::Chain(chain.into())
}
