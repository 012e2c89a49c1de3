//! Classification of terminal clauses into leaf query nodes.

use regex::Regex;
use std::sync::OnceLock;

use crate::errors::TranslateError;
use crate::query::{QueryNode, RangeOp};

static RANGE_REGEX: OnceLock<Regex> = OnceLock::new();

fn range_regex() -> &'static Regex {
    RANGE_REGEX.get_or_init(|| {
        Regex::new(r#"^([\w.@-]+)\s*([><]=?)\s*("?[^"]+"?|\d+)$"#).unwrap()
    })
}

/// Classifies a terminal clause, already known to contain no top-level
/// boolean connective.
///
/// Recognized shapes, in order: range comparison, `_exists_` sentinel,
/// wildcard, quoted phrase, plain term. A quoted value containing `*` is a
/// wildcard, not a phrase, so the wildcard check runs before the quote
/// check. Anything else is a [`TranslateError::UnrecognizedExpression`].
pub fn classify_term(expr: &str) -> Result<QueryNode, TranslateError> {
    let expr = expr.trim();

    if let Some(caps) = range_regex().captures(expr) {
        let field = caps[1].to_string();
        let op = match &caps[2] {
            ">=" => RangeOp::Gte,
            "<=" => RangeOp::Lte,
            ">" => RangeOp::Gt,
            _ => RangeOp::Lt,
        };
        let value = caps[3].trim_matches('"').to_string();
        return Ok(QueryNode::Range { field, op, value });
    }

    if let Some((field, raw_value)) = expr.split_once(':') {
        let field = field.trim();
        let raw_value = raw_value.trim();
        let value = raw_value.trim_matches(|c| c == '"' || c == ' ');

        if field == "_exists_" {
            return Ok(QueryNode::Exists {
                field: value.to_string(),
            });
        }

        if value.contains('*') {
            return Ok(QueryNode::Wildcard {
                field: field.to_string(),
                value: value.to_string(),
            });
        }

        if raw_value.len() >= 2 && raw_value.starts_with('"') && raw_value.ends_with('"') {
            return Ok(QueryNode::MatchPhrase {
                field: field.to_string(),
                value: raw_value[1..raw_value.len() - 1].to_string(),
            });
        }

        return Ok(QueryNode::Term {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    log::debug!("clause matched no recognized shape: {}", expr);
    Err(TranslateError::UnrecognizedExpression(expr.to_string()))
}
