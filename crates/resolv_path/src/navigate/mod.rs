//! Tree walker for parsed path segments.
//!
//! One token is consumed per step against the current node:
//!
//! | current  | token            | action                                 |
//! |----------|------------------|----------------------------------------|
//! | mapping  | anything         | key lookup                             |
//! | sequence | `[field=value]`  | first element whose `field` matches    |
//! | sequence | integer          | positional lookup                      |
//! | sequence | anything else    | `BadPath`                              |
//! | scalar   | anything         | `NotFound`, nothing left to descend    |
//!
//! The walk stops at the first failure. Success returns a borrow of whatever
//! node the last token reached, container or scalar.

use resolv_ir::{Error, Result, Value};
use tracing::trace;

use crate::coerce::{coerce, equal_coerced};
use crate::parse::{parse_filter_token, Segment};

/// Walk `root` along `segments`.
///
/// `segments` are raw tokens as produced by [`parse_path`](crate::parse_path).
/// An empty slice returns `root` itself.
pub fn navigate<'v, S: AsRef<str>>(root: &'v Value, segments: &[S]) -> Result<&'v Value> {
    let mut current = root;
    for segment in segments {
        let token = segment.as_ref();
        trace!(token, node = current.type_name(), "path step");
        current = step(current, token)?;
    }
    Ok(current)
}

fn step<'v>(current: &'v Value, token: &str) -> Result<&'v Value> {
    match current {
        Value::Mapping(map) => map
            .get(token)
            .ok_or_else(|| Error::not_found(format!("key {token:?}"))),
        Value::Sequence(items) => match Segment::classify(token) {
            Segment::Filter(raw) => first_match(items, raw),
            Segment::Index(index) => usize::try_from(index)
                .ok()
                .and_then(|i| items.get(i))
                .ok_or_else(|| {
                    Error::not_found(format!(
                        "array index {index} out of bounds (length {})",
                        items.len()
                    ))
                }),
            Segment::Key(_) => Err(Error::bad_path(format!(
                "{token:?} is not a valid array index or filter"
            ))),
        },
        _ => Err(Error::not_found(format!(
            "path segment {token:?} not found on {}",
            current.type_name()
        ))),
    }
}

/// Linear scan in sequence order; non-mapping elements and elements missing
/// the field are skipped.
fn first_match<'v>(items: &'v [Value], token: &str) -> Result<&'v Value> {
    let filter = parse_filter_token(token)?;
    let want = coerce(filter.value);
    items
        .iter()
        .find(|item| {
            item.get(filter.field)
                .is_some_and(|got| equal_coerced(got, &want))
        })
        .ok_or_else(|| {
            Error::not_found(format!(
                "no array element where {}={}",
                filter.field, filter.value
            ))
        })
}

#[cfg(test)]
mod tests;
