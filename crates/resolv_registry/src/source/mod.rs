//! `path//keypath` handling shared by the file-backed resolvers.

use resolv_ir::{Error, Result};
use tracing::debug;

const KEY_DELIMITER: &str = "//";

/// Split a file-backed variable at the last `//`.
///
/// Returns `(path, keypath)`; `keypath` is empty when there is no `//`.
/// Splitting at the last occurrence keeps `//` inside the path usable
/// (`/mnt//share/app.json//server.port`).
pub fn split_source(value: &str) -> (&str, &str) {
    value.rsplit_once(KEY_DELIMITER).unwrap_or((value, ""))
}

/// Expand `$NAME` and `${NAME}` from the process environment.
pub fn expand_env(path: &str) -> String {
    expand_with(path, |name| std::env::var(name).ok())
}

/// Expand `$NAME` and `${NAME}` using `lookup`.
///
/// Names are ASCII letters, digits and `_`. Unknown names expand to the empty
/// string. A `$` that does not start a name is kept literally. An empty `${}`
/// and a `${` with no closing brace are dropped, like a shell's bad
/// substitution.
pub fn expand_with<F>(path: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(path.len());
    let mut rest = path;
    while let Some(dollar) = rest.find('$') {
        out.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];

        let (name, consumed) = if let Some(braced) = after.strip_prefix('{') {
            braced
                .find('}')
                .map_or(("", 1), |close| (&braced[..close], close + 2))
        } else {
            let len = after
                .bytes()
                .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
                .count();
            (&after[..len], len)
        };

        if consumed == 0 {
            out.push('$');
        } else if !name.is_empty() {
            out.push_str(&lookup(name).unwrap_or_default());
        }
        rest = &after[consumed..];
    }
    out.push_str(rest);
    out
}

/// Read a whole source file. I/O errors keep their kind and name the file.
pub(crate) fn read_source(path: &str, what: &str) -> Result<String> {
    debug!(path, what, "reading source");
    std::fs::read_to_string(path)
        .map_err(|err| Error::from(err).context(format!("read {what} {path:?}")))
}
