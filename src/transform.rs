//! Derived columns from ordered conditional rules.

use polars::prelude::*;

use crate::error::PipelineResult;
use crate::log::{LogEntry, preview};
use crate::session::Session;

/// Name of the column added by [`categorize`].
pub const CATEGORY_COLUMN: &str = "Character_Category";

/// An ordered list of (predicate, value) rules with a fallback, evaluated
/// first-match-wins.
///
/// Compiles to a single `when/then/otherwise` expression; an earlier rule
/// shadows every later one, so rule order is significant.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<(Expr, Expr)>,
    fallback: Expr,
}

impl RuleSet {
    /// Create a rule set that yields `fallback` when no rule matches.
    pub fn new(fallback: Expr) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    /// Append a rule. Rules are tried in the order they were added.
    pub fn rule(mut self, predicate: Expr, value: Expr) -> Self {
        self.rules.push((predicate, value));
        self
    }

    /// Compile the rules into one expression.
    ///
    /// Folded from the back so the first rule becomes the outermost `when`.
    pub fn to_expr(&self) -> Expr {
        self.rules
            .iter()
            .rev()
            .fold(self.fallback.clone(), |acc, (predicate, value)| {
                when(predicate.clone()).then(value.clone()).otherwise(acc)
            })
    }
}

/// Add a `Character_Category` column derived from `ALIGN`.
///
/// `"Good Characters"` maps to `"Hero"`, `"Bad Characters"` to `"Villain"`,
/// anything else (including null) to `"Other"`. Every row receives exactly
/// one category.
///
/// Logs operation `"transform data"` with a preview of the first 10 rows.
pub fn categorize(session: &Session, dataset: &DataFrame) -> PipelineResult<DataFrame> {
    let rules = RuleSet::new(lit("Other"))
        .rule(col("ALIGN").eq(lit("Good Characters")), lit("Hero"))
        .rule(col("ALIGN").eq(lit("Bad Characters")), lit("Villain"));

    let out = dataset
        .clone()
        .lazy()
        .with_column(rules.to_expr().alias(CATEGORY_COLUMN))
        .collect()?;

    session.record(LogEntry::new("transform data", preview(&out)));

    Ok(out)
}
