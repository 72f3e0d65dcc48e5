use serde::{Deserialize, Serialize};

/// Clause markers and keywords that can appear in a token tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Noun {
    Select,
    From,
    Where,
    Join,
    On,
    OrderBy,
    GroupBy,
    Distinct,
    Count,
    Left,
    Right,
    Outer,
    Inner,
    /// Connector keywords. Chains carry their connectors as
    /// [`Connector`](crate::ast::Connector) values, so the builders never
    /// place these in a tree.
    And,
    Or,
}

impl Noun {
    /// Keyword text as it appears in rendered statements.
    pub fn keyword(&self) -> &'static str {
        match self {
            Noun::Select => "SELECT",
            Noun::From => "FROM",
            Noun::Where => "WHERE",
            Noun::Join => "JOIN",
            Noun::On => "ON",
            Noun::OrderBy => "ORDER BY",
            Noun::GroupBy => "GROUP BY",
            Noun::Distinct => "DISTINCT",
            Noun::Count => "COUNT",
            Noun::Left => "LEFT",
            Noun::Right => "RIGHT",
            Noun::Outer => "OUTER",
            Noun::Inner => "INNER",
            Noun::And => "AND",
            Noun::Or => "OR",
        }
    }
}

impl std::fmt::Display for Noun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
