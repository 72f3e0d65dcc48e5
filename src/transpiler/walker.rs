//! Decomposes a SELECT token tree into clauses and feeds them to a
//! [`SelectHandler`] in a fixed order: select list, FROM, each JOIN, WHERE,
//! ORDER BY, GROUP BY. Handlers may rely on FROM and JOIN having been seen
//! before WHERE.

use std::collections::HashMap;

use crate::ast::*;
use crate::error::{QueryError, QueryResult};

/// Receives the clauses of one SELECT statement.
pub trait SelectHandler {
    fn handle_select(
        &mut self,
        tables: &[Table],
        columns: &[Variable],
        distinct: bool,
        count: bool,
    ) -> QueryResult<()>;

    fn handle_from(&mut self, tables: &[Table]) -> QueryResult<()>;

    fn handle_join(
        &mut self,
        table: &Table,
        direction: JoinDirection,
        kind: JoinKind,
        on: Option<&ExpressionChain>,
    ) -> QueryResult<()>;

    fn handle_where(&mut self, chain: &ExpressionChain) -> QueryResult<()>;

    fn handle_order_by(&mut self, order: &OrderBy) -> QueryResult<()>;

    fn handle_group_by(&mut self, columns: &[Variable]) -> QueryResult<()>;
}

/// Clause markers grouped by kind, each list in document order.
pub type ClauseGroups<'t> = HashMap<Noun, Vec<&'t Token>>;

/// Collect the markers of the wanted kinds found on `root` or its direct
/// children. Clause markers never nest, so deeper levels are not searched.
pub fn classify<'t>(root: &'t Token, wanted: &[Noun]) -> ClauseGroups<'t> {
    let mut groups: ClauseGroups<'t> = HashMap::new();
    for token in std::iter::once(root).chain(root.iter()) {
        if let Some(noun) = token.as_noun()
            && wanted.contains(&noun)
        {
            groups.entry(noun).or_default().push(token);
        }
    }
    groups
}

/// The single marker of a clause that may appear once, if present.
pub fn expect_at_most_one<'t>(
    clause: Noun,
    tokens: Option<&Vec<&'t Token>>,
) -> QueryResult<Option<&'t Token>> {
    match tokens.map(|t| t.as_slice()) {
        None | Some([]) => Ok(None),
        Some([single]) => Ok(Some(*single)),
        Some(many) => Err(QueryError::ambiguous(clause, many.len())),
    }
}

const ROOT_CLAUSES: &[Noun] = &[
    Noun::Distinct,
    Noun::Count,
    Noun::From,
    Noun::Join,
    Noun::Where,
    Noun::OrderBy,
    Noun::GroupBy,
];

/// Walk a SELECT tree, dispatching every clause to `handler`.
pub fn walk<H: SelectHandler + ?Sized>(root: &Token, handler: &mut H) -> QueryResult<()> {
    if !root.is_noun(Noun::Select) {
        return Err(QueryError::unsupported(Noun::Select, root.node.describe()));
    }

    let groups = classify(root, ROOT_CLAUSES);
    check_root_children(root)?;

    let from = expect_at_most_one(Noun::From, groups.get(&Noun::From))?
        .ok_or_else(|| QueryError::missing(Noun::From, "statement has no FROM clause"))?;
    let from_tables = tables_of(from, Noun::From)?;
    if from_tables.is_empty() {
        return Err(QueryError::missing(Noun::From, "no tables given"));
    }

    let joins = groups
        .get(&Noun::Join)
        .map(|tokens| tokens.iter().map(|t| join_of(t)).collect::<QueryResult<Vec<_>>>())
        .transpose()?
        .unwrap_or_default();

    tracing::debug!(
        "walking SELECT: {} table(s), {} join(s)",
        from_tables.len(),
        joins.len()
    );

    // Select list: whole tables and columns named before FROM.
    let (mut tables, columns) = select_items(root);
    if tables.is_empty() && columns.is_empty() {
        tables.extend(from_tables.iter().cloned());
        tables.extend(joins.iter().map(|j| j.table.clone()));
    }
    handler.handle_select(
        &tables,
        &columns,
        groups.contains_key(&Noun::Distinct),
        groups.contains_key(&Noun::Count),
    )?;

    handler.handle_from(&from_tables)?;

    for join in &joins {
        handler.handle_join(&join.table, join.direction, join.kind, join.on.as_ref())?;
    }

    if let Some(where_) = expect_at_most_one(Noun::Where, groups.get(&Noun::Where))?
        && let Some(chain) = condition_of(where_, Noun::Where)?
    {
        handler.handle_where(&chain)?;
    }

    let order = match expect_at_most_one(Noun::OrderBy, groups.get(&Noun::OrderBy))? {
        Some(token) => order_of(token)?,
        None => OrderBy::default(),
    };
    handler.handle_order_by(&order)?;

    let group_by = match expect_at_most_one(Noun::GroupBy, groups.get(&Noun::GroupBy))? {
        Some(token) => variables_of(token, Noun::GroupBy)?,
        None => Vec::new(),
    };
    handler.handle_group_by(&group_by)
}

/// Only select items may precede FROM; after it only clause markers.
fn check_root_children(root: &Token) -> QueryResult<()> {
    let mut seen_from = false;
    for child in root {
        match &child.node {
            Node::Noun(noun) if ROOT_CLAUSES.contains(noun) => {
                seen_from |= *noun == Noun::From;
            }
            Node::Table(_) | Node::Variable(_) if !seen_from => {}
            other => return Err(QueryError::unsupported(Noun::Select, other.describe())),
        }
    }
    Ok(())
}

fn select_items(root: &Token) -> (Vec<Table>, Vec<Variable>) {
    let mut tables = Vec::new();
    let mut columns = Vec::new();
    for child in root.iter().take_while(|c| !c.is_noun(Noun::From)) {
        match &child.node {
            Node::Table(t) => tables.push(t.clone()),
            Node::Variable(v) => columns.push(v.clone()),
            _ => {}
        }
    }
    (tables, columns)
}

fn tables_of(token: &Token, clause: Noun) -> QueryResult<Vec<Table>> {
    token
        .iter()
        .map(|child| match &child.node {
            Node::Table(t) => Ok(t.clone()),
            other => Err(QueryError::unsupported(clause, other.describe())),
        })
        .collect()
}

fn variables_of(token: &Token, clause: Noun) -> QueryResult<Vec<Variable>> {
    token
        .iter()
        .map(|child| match &child.node {
            Node::Variable(v) => Ok(v.clone()),
            other => Err(QueryError::unsupported(clause, other.describe())),
        })
        .collect()
}

fn order_of(token: &Token) -> QueryResult<OrderBy> {
    let mut order = OrderBy::default();
    for child in token {
        match &child.node {
            Node::Order(o) => order.items.extend(o.items.iter().cloned()),
            other => return Err(QueryError::unsupported(Noun::OrderBy, other.describe())),
        }
    }
    Ok(order)
}

/// The condition held by a WHERE or ON marker. A marker without children
/// carries no condition.
fn condition_of(token: &Token, clause: Noun) -> QueryResult<Option<ExpressionChain>> {
    match token.children() {
        [] => Ok(None),
        [single] => match &single.node {
            Node::Expression(Expression::Chain(chain)) => Ok(Some(chain.clone())),
            Node::Expression(expr) => Ok(Some(ExpressionChain::new(expr.clone()))),
            other => Err(QueryError::unsupported(clause, other.describe())),
        },
        many => Err(QueryError::ambiguous(clause, many.len())),
    }
}

fn join_of(token: &Token) -> QueryResult<JoinStatement> {
    let mut direction = JoinDirection::None;
    let mut kind = JoinKind::None;
    let mut tables = Vec::new();
    let mut on = None;
    let mut seen_on = false;

    for child in token {
        match &child.node {
            Node::Noun(Noun::Left) => direction = JoinDirection::Left,
            Node::Noun(Noun::Right) => direction = JoinDirection::Right,
            Node::Noun(Noun::Inner) => kind = JoinKind::Inner,
            Node::Noun(Noun::Outer) => kind = JoinKind::Outer,
            Node::Noun(Noun::On) => {
                if seen_on {
                    return Err(QueryError::ambiguous(Noun::On, 2));
                }
                seen_on = true;
                on = condition_of(child, Noun::On)?;
            }
            Node::Table(t) => tables.push(t.clone()),
            other => return Err(QueryError::unsupported(Noun::Join, other.describe())),
        }
    }

    let table = match tables.len() {
        0 => return Err(QueryError::missing(Noun::Join, "join references no table")),
        1 => tables.remove(0),
        n => return Err(QueryError::ambiguous(Noun::Join, n)),
    };

    Ok(JoinStatement {
        table,
        direction,
        kind,
        on,
    })
}
