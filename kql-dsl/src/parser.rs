//! Recursive descent over the boolean filter grammar.
//!
//! Precedence, weakest first: `or` < `and` < `not` < terminal clause. Each
//! level splits at top level only (see [`crate::scanner`]) and hands the
//! unresolved segments down to the next level. The parser is a pure function
//! of its input; recursion depth follows the nesting depth of the query.

use regex::Regex;
use std::sync::OnceLock;

use crate::errors::TranslateError;
use crate::query::QueryNode;
use crate::scanner::{is_balanced, split_top_level};
use crate::term::classify_term;

static TERMS_REGEX: OnceLock<Regex> = OnceLock::new();

fn terms_regex() -> &'static Regex {
    // `field:(v1 or v2 or ...)` with no nested parentheses in the group.
    TERMS_REGEX.get_or_init(|| Regex::new(r"^([\w.@-]+):\(([^()]+)\)$").unwrap())
}

/// Parses one expression into a query node.
///
/// Connective keywords match literally: lowercase, padded by single spaces.
/// The caller has already collapsed whitespace runs, so ` and `/` or ` are
/// the only spellings that can split.
pub fn parse_expression(expr: &str) -> Result<QueryNode, TranslateError> {
    let mut expr = expr.trim();

    // Strip redundant outer parens one matched pair at a time. The pair is
    // only removable when its interior is balanced on its own; otherwise the
    // opening and closing paren belong to two separate groups.
    while expr.starts_with('(') && expr.ends_with(')') {
        let inner = &expr[1..expr.len() - 1];
        if is_balanced(inner) {
            expr = inner.trim();
        } else {
            break;
        }
    }

    let or_parts = split_top_level(expr, " or ");
    if or_parts.len() > 1 {
        let should = or_parts
            .into_iter()
            .map(parse_expression)
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(QueryNode::Bool {
            must: Vec::new(),
            should,
            must_not: Vec::new(),
        });
    }

    let and_parts = split_top_level(expr, " and ");
    if and_parts.len() > 1 {
        let must = and_parts
            .into_iter()
            .map(parse_expression)
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(QueryNode::Bool {
            must,
            should: Vec::new(),
            must_not: Vec::new(),
        });
    }

    if let Some(rest) = expr.strip_prefix("not ") {
        let negated = parse_expression(rest)?;
        return Ok(QueryNode::Bool {
            must: Vec::new(),
            should: Vec::new(),
            must_not: vec![negated],
        });
    }

    if let Some(caps) = terms_regex().captures(expr) {
        let field = caps[1].to_string();
        let values = split_top_level(&caps[2], " or ")
            .into_iter()
            .map(|v| v.trim_matches(|c| c == '"' || c == ' ').to_string())
            .collect();
        return Ok(QueryNode::Terms { field, values });
    }

    classify_term(expr)
}
