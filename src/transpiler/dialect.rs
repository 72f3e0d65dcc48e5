use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::transpiler::grammar::{AnsiGrammar, Grammar, JpqlGrammar};

/// Supported query dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Plain SQL with native JOIN syntax.
    #[default]
    Sql,
    /// JPQL-like object query language; joins are folded into WHERE.
    Jpql,
}

impl Dialect {
    pub fn grammar(&self) -> Box<dyn Grammar> {
        match self {
            Dialect::Sql => Box::new(AnsiGrammar),
            Dialect::Jpql => Box::new(JpqlGrammar),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Sql => write!(f, "sql"),
            Dialect::Jpql => write!(f, "jpql"),
        }
    }
}

impl FromStr for Dialect {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sql" | "ansi" => Ok(Dialect::Sql),
            "jpql" => Ok(Dialect::Jpql),
            other => Err(QueryError::Config(format!("unknown dialect '{}'", other))),
        }
    }
}
