//! # KQL to Elasticsearch Query DSL translation
//!
//! `kql-dsl` turns a Kibana-style boolean filter string into a nested
//! [`QueryNode`] tree matching Elasticsearch's Query DSL. The supported
//! subset covers `field:value` terms, quoted phrases, wildcards, range
//! comparisons, the `field:(v1 or v2)` terms shorthand, the `_exists_`
//! sentinel, and `or`/`and`/`not` connectives with parentheses.
//!
//! Connective keywords are matched literally in lowercase with single-space
//! padding (`a or b`, not `a OR b`); whitespace runs in the input collapse
//! to single spaces before parsing, and a blank input translates to a
//! `match_all` query.
//!
//! ## Example
//! ```
//! use kql_dsl::translate;
//! use serde_json::json;
//!
//! let query = translate(r#"status:(500 or 503) and source.ip:"10.0.0.1""#).unwrap();
//! assert_eq!(
//!     query.to_json(),
//!     json!({
//!         "bool": {
//!             "must": [
//!                 { "terms": { "status": ["500", "503"] } },
//!                 { "match_phrase": { "source.ip": "10.0.0.1" } }
//!             ]
//!         }
//!     })
//! );
//! ```

use regex::Regex;
use std::sync::OnceLock;

mod errors;
mod parser;
mod query;
mod scanner;
mod term;

pub use errors::TranslateError;
pub use query::{QueryNode, RangeOp};

static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();

fn whitespace_regex() -> &'static Regex {
    WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Translates a KQL filter string into a query tree.
///
/// Blank input (empty or whitespace-only) yields [`QueryNode::MatchAll`].
/// The first terminal clause that matches no recognized shape aborts the
/// whole translation with [`TranslateError::UnrecognizedExpression`];
/// callers never receive a partial tree.
pub fn translate(kql: &str) -> Result<QueryNode, TranslateError> {
    // Collapse runs of whitespace so multiline queries parse like
    // single-line ones and connective padding is exactly one space.
    let kql = whitespace_regex().replace_all(kql, " ");
    let kql = kql.trim();

    if kql.is_empty() {
        log::debug!("blank filter, translating to match_all");
        return Ok(QueryNode::MatchAll);
    }

    log::debug!("translating filter: {}", kql);
    parser::parse_expression(kql)
}
