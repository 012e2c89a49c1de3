//! Quote- and depth-aware string scanning shared by every parsing level.
//!
//! Boolean connectives and parenthesized groups may appear inside quoted
//! values, so a naive `str::split` would tear clauses apart. Both helpers
//! here track the same two pieces of state: whether the scan position is
//! inside a double-quoted run, and the current parenthesis nesting depth.

/// Splits `input` on `delim`, honoring quotes and parenthesis nesting.
///
/// A delimiter occurrence counts as a split point only at depth 0 and
/// outside quotes. Segments are returned trimmed, in original order; if the
/// delimiter never matches at top level the whole trimmed input is the
/// single segment. A trailing delimiter does not produce an empty segment.
pub fn split_top_level<'a>(input: &'a str, delim: &str) -> Vec<&'a str> {
    let bytes = input.as_bytes();
    let delim_bytes = delim.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut depth = 0i32;
    let mut in_quote = false;

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => in_quote = !in_quote,
            b'(' if !in_quote => depth += 1,
            b')' if !in_quote => depth -= 1,
            _ => {}
        }

        if depth == 0 && !in_quote && bytes[i..].starts_with(delim_bytes) {
            // Both split points are on char boundaries: the delimiter is
            // pure ASCII and `start` always follows one.
            parts.push(input[start..i].trim());
            start = i + delim_bytes.len();
            i = start;
            continue;
        }
        i += 1;
    }

    if start < bytes.len() {
        parts.push(input[start..].trim());
    }
    parts
}

/// Returns true iff parentheses in `input` are balanced, ignoring any that
/// appear inside double quotes. Depth must never go negative, so the inner
/// part of `(a) and (b)` is correctly rejected when the outer pair is a
/// candidate for stripping.
pub fn is_balanced(input: &str) -> bool {
    let mut depth = 0i32;
    let mut in_quote = false;

    for c in input.chars() {
        if c == '"' {
            in_quote = !in_quote;
        } else if !in_quote {
            if c == '(' {
                depth += 1;
            } else if c == ')' {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
        }
    }
    depth == 0
}
