use super::Grammar;

/// Plain SQL.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiGrammar;

impl Grammar for AnsiGrammar {
    fn name(&self) -> &'static str {
        "sql"
    }

    fn lower(&self, expr: &str) -> String {
        format!("LOWER({})", expr)
    }

    fn pattern_operator(&self) -> &'static str {
        "SIMILAR TO"
    }
}
