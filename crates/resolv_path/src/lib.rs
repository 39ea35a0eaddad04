//! Path expressions over a [`Value`] tree.
//!
//! A path expression is a dotted string such as `servers.[host=example.org].port`.
//! Resolution happens in two steps:
//!
//! 1. [`parse_path`] splits the expression into raw segment tokens. It never
//!    fails; dots inside `[...]` are kept literal.
//! 2. [`navigate`] walks the tree one token at a time. Mapping tokens are keys;
//!    sequence tokens are either an index (`0`) or a filter (`[field=value]`)
//!    matched with [`equal_coerced`].
//!
//! ```
//! use resolv_ir::Value;
//! use resolv_path::select;
//!
//! let doc: Value = [(
//!     "servers",
//!     Value::from(vec![[("host", Value::from("example.org")), ("port", Value::from(443))]
//!         .into_iter()
//!         .collect::<Value>()]),
//! )]
//! .into_iter()
//! .collect();
//!
//! let port = select(&doc, "servers.[host=example.org].port").unwrap();
//! assert_eq!(port, &Value::Int(443));
//! ```

mod coerce;
mod navigate;
mod parse;

pub use coerce::{coerce, equal_coerced};
pub use navigate::navigate;
pub use parse::{is_filter_token, parse_filter_token, parse_path, Filter, Segment};

use resolv_ir::{Result, Value};

/// Parse `path` and navigate `root` with the resulting segments.
pub fn select<'v>(root: &'v Value, path: &str) -> Result<&'v Value> {
    navigate(root, &parse_path(path))
}
