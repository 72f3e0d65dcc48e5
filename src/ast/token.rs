//! The token tree a statement is built into.
//!
//! A tree is append-only: children are added, never removed or moved, so a
//! node is reachable from exactly one parent.

use serde::{Deserialize, Serialize};

use crate::ast::{Expression, Noun, OrderBy, Table, Variable};

/// Payload of a tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Clause marker or keyword.
    Noun(Noun),
    Table(Table),
    Variable(Variable),
    Expression(Expression),
    Order(OrderBy),
}

impl Node {
    /// Short description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Node::Noun(n) => format!("keyword {}", n),
            Node::Table(t) => format!("table {}", t),
            Node::Variable(v) => format!("variable {}.{}", v.table, v.accessor),
            Node::Expression(Expression::Relation(_)) => "relation".to_string(),
            Node::Expression(Expression::Collection(_)) => "collection".to_string(),
            Node::Expression(Expression::Chain(_)) => "expression chain".to_string(),
            Node::Order(_) => "order specification".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub node: Node,
    #[serde(default)]
    children: Vec<Token>,
}

impl Token {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            children: Vec::new(),
        }
    }

    pub fn noun(noun: Noun) -> Self {
        Self::new(Node::Noun(noun))
    }

    pub fn add_child(&mut self, child: Token) {
        self.children.push(child);
    }

    /// Insert before every existing child (used for prefix markers like DISTINCT).
    pub fn add_child_first(&mut self, child: Token) {
        self.children.insert(0, child);
    }

    pub fn add_all_children(&mut self, children: impl IntoIterator<Item = Token>) {
        self.children.extend(children);
    }

    pub fn children(&self) -> &[Token] {
        &self.children
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.children.iter()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// The marker this token carries, if it is a noun.
    pub fn as_noun(&self) -> Option<Noun> {
        match self.node {
            Node::Noun(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_noun(&self, noun: Noun) -> bool {
        self.as_noun() == Some(noun)
    }
}

impl<'a> IntoIterator for &'a Token {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Table> for Token {
    fn from(t: Table) -> Self {
        Token::new(Node::Table(t))
    }
}

impl From<Variable> for Token {
    fn from(v: Variable) -> Self {
        Token::new(Node::Variable(v))
    }
}

impl From<Expression> for Token {
    fn from(e: Expression) -> Self {
        Token::new(Node::Expression(e))
    }
}

impl From<OrderBy> for Token {
    fn from(o: OrderBy) -> Self {
        Token::new(Node::Order(o))
    }
}
