//! Shared query fragments for the PostgreSQL adapters

use sea_orm::sea_query::{Expr, Func, IntoColumnRef, SimpleExpr};

/// LIKE pattern matching values that start with `term`, lower-cased.
/// `%`, `_` and `\` in the term are escaped so they match literally.
pub fn prefix_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 1);
    for ch in term.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// `LOWER(column) LIKE '<term>%'`
pub fn lower_starts_with<C: IntoColumnRef>(column: C, term: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).like(prefix_pattern(term))
}
