//! The query tree produced by translation, plus its Query DSL rendering.

use serde::ser::{Serialize, Serializer};
use serde_json::{json, Map, Value};

/// Comparator of a range clause, keyed `gt`/`gte`/`lt`/`lte` in the DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOp {
    Gt,
    Gte,
    Lt,
    Lte,
}

impl RangeOp {
    pub fn as_key(self) -> &'static str {
        match self {
            RangeOp::Gt => "gt",
            RangeOp::Gte => "gte",
            RangeOp::Lt => "lt",
            RangeOp::Lte => "lte",
        }
    }
}

/// A node of the translated query tree.
///
/// Leaves are the six terminal kinds, internal nodes are [`QueryNode::Bool`];
/// the tree is built bottom-up by the parser and never mutated afterwards.
/// Serializing a node yields the exact Query DSL document shape, for example
/// `{"term":{"status":"500"}}` or `{"bool":{"must":[...]}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryNode {
    /// Matches every document; produced only for blank input.
    MatchAll,
    /// Boolean combination. Each operator application populates exactly one
    /// of the three lists; a populated list is never empty.
    Bool {
        must: Vec<QueryNode>,
        should: Vec<QueryNode>,
        must_not: Vec<QueryNode>,
    },
    /// `field:(v1 or v2 or ...)` shorthand.
    Terms { field: String, values: Vec<String> },
    /// Comparison against a literal; values stay strings, never coerced.
    Range {
        field: String,
        op: RangeOp,
        value: String,
    },
    /// `_exists_:field` sentinel.
    Exists { field: String },
    /// Quoted value, quotes stripped.
    MatchPhrase { field: String, value: String },
    /// Value containing a `*` glyph.
    Wildcard { field: String, value: String },
    /// Fallback exact/keyword match.
    Term { field: String, value: String },
}

impl QueryNode {
    /// Renders this node as a Query DSL document.
    pub fn to_json(&self) -> Value {
        match self {
            QueryNode::MatchAll => json!({ "match_all": {} }),
            QueryNode::Bool {
                must,
                should,
                must_not,
            } => {
                let mut body = Map::new();
                if !must.is_empty() {
                    body.insert("must".to_string(), Self::render_list(must));
                }
                if !should.is_empty() {
                    body.insert("should".to_string(), Self::render_list(should));
                    body.insert("minimum_should_match".to_string(), json!(1));
                }
                if !must_not.is_empty() {
                    body.insert("must_not".to_string(), Self::render_list(must_not));
                }
                json!({ "bool": body })
            }
            QueryNode::Terms { field, values } => keyed("terms", field, json!(values)),
            QueryNode::Range { field, op, value } => {
                let mut bounds = Map::new();
                bounds.insert(op.as_key().to_string(), Value::String(value.clone()));
                keyed("range", field, Value::Object(bounds))
            }
            QueryNode::Exists { field } => json!({ "exists": { "field": field } }),
            QueryNode::MatchPhrase { field, value } => {
                keyed("match_phrase", field, Value::String(value.clone()))
            }
            QueryNode::Wildcard { field, value } => {
                keyed("wildcard", field, Value::String(value.clone()))
            }
            QueryNode::Term { field, value } => keyed("term", field, Value::String(value.clone())),
        }
    }

    fn render_list(nodes: &[QueryNode]) -> Value {
        Value::Array(nodes.iter().map(QueryNode::to_json).collect())
    }
}

/// Builds the `{kind: {field: value}}` shape shared by most leaf queries.
fn keyed(kind: &str, field: &str, value: Value) -> Value {
    let mut inner = Map::new();
    inner.insert(field.to_string(), value);
    let mut outer = Map::new();
    outer.insert(kind.to_string(), Value::Object(inner));
    Value::Object(outer)
}

impl Serialize for QueryNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}
