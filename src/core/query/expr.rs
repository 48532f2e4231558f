use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::predicate::{Operator, Predicate};
use crate::models::{Field, Movie, ParseValueError};

// <field> <symbol> <query>   e.g. `year > 1990`, `title~star`
// <field> <word> <query>     e.g. `rating equals PG-13`
static EXPR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?is)^\s*(?P<field>[a-z_]+)(?:\s*(?P<sym>==|=|~|<|>)|\s+(?P<word>contains|equals|eq|lt|gt|less_than|greater_than)(?:\s|$))\s*(?P<query>.*?)\s*$"#,
    )
    .unwrap()
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    #[error("expected '<field> <operator> <query>', got '{0}'")]
    Malformed(String),

    #[error(transparent)]
    UnknownValue(#[from] ParseValueError),
}

/// A filter written as a single string, e.g. `rating > PG` or `actors contains "Hanks"`.
///
/// Only the shape of the expression is checked here; the query part is
/// kept as text and evaluated fail-soft by [`Predicate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpr {
    pub field: Field,
    pub op: Operator,
    pub query: String,
}

impl FilterExpr {
    pub fn to_predicate(&self) -> Predicate {
        Predicate::new(self.field, self.op, self.query.clone())
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        self.to_predicate().matches(movie)
    }
}

impl FromStr for FilterExpr {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = EXPR_RE
            .captures(s)
            .ok_or_else(|| ExprError::Malformed(s.to_string()))?;

        let field: Field = caps["field"].parse()?;
        let op: Operator = match caps.name("sym").or_else(|| caps.name("word")) {
            Some(m) => m.as_str().parse()?,
            None => return Err(ExprError::Malformed(s.to_string())),
        };
        let raw = caps.name("query").map_or("", |m| m.as_str());
        // `<>`, `=~` and friends are not operators; quote the value to search for them
        if caps.name("sym").is_some() && raw.starts_with(['=', '<', '>', '~', '!']) {
            return Err(ExprError::Malformed(s.to_string()));
        }
        let query = unquote(raw).to_string();

        Ok(Self { field, op, query })
    }
}

impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.field, self.op, self.query)
    }
}

fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> FilterExpr {
        s.parse().unwrap()
    }

    #[test]
    fn parses_symbolic_operators() {
        assert_eq!(
            parse("year > 1990"),
            FilterExpr { field: Field::Year, op: Operator::GreaterThan, query: "1990".into() }
        );
        assert_eq!(parse("title~star").op, Operator::Contains);
        assert_eq!(parse("rating == PG-13").query, "PG-13");
        assert_eq!(parse("media<DVD").op, Operator::LessThan);
    }

    #[test]
    fn parses_word_operators() {
        let expr = parse("Actors CONTAINS Tom Hanks");
        assert_eq!(expr.field, Field::Actors);
        assert_eq!(expr.op, Operator::Contains);
        assert_eq!(expr.query, "Tom Hanks");
        assert_eq!(parse("rating greater_than PG").op, Operator::GreaterThan);
    }

    #[test]
    fn strips_matching_quotes_only() {
        assert_eq!(parse(r#"title = "Star Wars""#).query, "Star Wars");
        assert_eq!(parse("title = 'Heat'").query, "Heat");
        assert_eq!(parse(r#"title = "Heat'"#).query, r#""Heat'"#);
    }

    #[test]
    fn allows_empty_query() {
        assert_eq!(parse("description contains").query, "");
        assert_eq!(parse("title ~ ").query, "");
    }

    #[test]
    fn rejects_malformed_expressions() {
        assert!(matches!("".parse::<FilterExpr>(), Err(ExprError::Malformed(_))));
        assert!(matches!("title".parse::<FilterExpr>(), Err(ExprError::Malformed(_))));
        assert!(matches!("title != x".parse::<FilterExpr>(), Err(ExprError::Malformed(_))));
        assert!(matches!(
            "runtime > 90".parse::<FilterExpr>(),
            Err(ExprError::UnknownValue(_))
        ));
    }

    #[test]
    fn rejects_compound_symbols() {
        for input in ["year<>1990", "title=~x", "year >= 1990", "title ~~ x", "year <! 5"] {
            assert!(
                matches!(input.parse::<FilterExpr>(), Err(ExprError::Malformed(_))),
                "{input}"
            );
        }
        assert_eq!(parse(r#"title = "=x""#).query, "=x");
        assert_eq!(parse("title contains <b>").query, "<b>");
    }
}
