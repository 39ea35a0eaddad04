//! Path expression tokenizer.
//!
//! Splits `servers.[host=example.org].port` into
//! `["servers", "[host=example.org]", "port"]`. A `.` separates segments
//! unless it sits inside `[...]`. Brackets are tracked with a plain depth
//! counter; balance is never checked, so an unclosed `[` keeps every later
//! dot literal.
//!
//! Tokens borrow from the input: every token is the exact substring between
//! two splitting dots.

use resolv_ir::{Error, Result};

/// Split a path expression into raw segment tokens.
///
/// Total: never fails and always yields at least one token. `""` gives
/// `[""]`, and a trailing dot gives a trailing empty token. Whether a token
/// makes sense (valid index, well-formed filter) is decided during navigation.
pub fn parse_path(path: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    // '.', '[' and ']' are ASCII, so byte offsets are always char boundaries.
    for (i, byte) in path.bytes().enumerate() {
        match byte {
            b'[' => depth += 1,
            b']' => depth = depth.saturating_sub(1),
            b'.' if depth == 0 => {
                tokens.push(&path[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    tokens.push(&path[start..]);
    tokens
}

/// A parsed `[field=value]` filter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Filter<'a> {
    /// Field looked up in each sequence element (trimmed, non-empty).
    pub field: &'a str,
    /// Raw comparison value with one layer of matching quotes removed.
    pub value: &'a str,
}

/// Reports whether `token` looks like `[field=value]`.
pub fn is_filter_token(token: &str) -> bool {
    token.starts_with('[') && token.ends_with(']') && token.contains('=')
}

/// Parse a `[field=value]` token.
///
/// The first `=` separates field from value; both sides are trimmed. A value
/// wrapped in matching single or double quotes loses exactly one layer of
/// them, with no escape processing.
pub fn parse_filter_token(token: &str) -> Result<Filter<'_>> {
    let (field, value) = token
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .and_then(|inner| inner.split_once('='))
        .ok_or_else(|| Error::bad_path(format!("invalid filter token {token:?}")))?;

    let field = field.trim();
    if field.is_empty() {
        return Err(Error::bad_path(format!("empty field in filter {token:?}")));
    }

    Ok(Filter {
        field,
        value: strip_quotes(value.trim()),
    })
}

fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    match bytes {
        [first @ (b'"' | b'\''), .., last] if first == last => &value[1..value.len() - 1],
        _ => value,
    }
}

/// How a token reads when applied to a sequence.
///
/// Against a mapping every token is a key, so classification only matters
/// once the navigator reaches a sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A `[field=value]` token; its contents are parsed lazily.
    Filter(&'a str),
    /// A base-10 integer. Negative values are kept so the navigator can
    /// report them as out of bounds.
    Index(i64),
    /// Anything else.
    Key(&'a str),
}

impl<'a> Segment<'a> {
    pub fn classify(token: &'a str) -> Self {
        if is_filter_token(token) {
            Segment::Filter(token)
        } else if let Ok(index) = token.parse::<i64>() {
            Segment::Index(index)
        } else {
            Segment::Key(token)
        }
    }
}
