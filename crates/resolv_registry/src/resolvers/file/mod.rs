//! `file:path//KEY` over plain `KEY=VALUE` files.
//!
//! The line format is the one shell `.env` files use:
//!
//! ```text
//! # comment
//! export DB_HOST = db.internal   # trailing comment
//! DB_PASS="p#ss\tword"
//! GREETING='it\'s here'
//! ```

use std::borrow::Cow;

use resolv_ir::{Error, Result};

use crate::source::{expand_env, read_source, split_source};
use crate::Resolver;

const BOM: char = '\u{feff}';

/// Looks up a key in a `KEY=VALUE` file, or returns the whole file when no
/// key is given.
#[derive(Copy, Clone, Debug, Default)]
pub struct FileResolver;

impl Resolver for FileResolver {
    fn resolve(&self, value: &str) -> Result<String> {
        let (path, key) = split_source(value);
        let path = expand_env(path);
        if path.trim().is_empty() {
            return Err(Error::bad_path("empty file path"));
        }
        if key.is_empty() && value.ends_with("//") {
            return Err(Error::bad_path(format!("empty key after // in {value:?}")));
        }

        let text = read_source(&path, "file")?;
        let text = text.strip_prefix(BOM).unwrap_or(&text);
        if key.is_empty() {
            return Ok(text.trim().to_owned());
        }

        text.lines()
            .filter_map(parse_line)
            .find_map(|(k, v)| (k == key).then_some(v))
            .ok_or_else(|| Error::not_found(format!("key {key:?} in {path:?}")))
    }
}

/// Parse one line into `(key, value)`.
///
/// Returns `None` for blank lines, `#` comments, and lines without a
/// non-empty key before `=`. The value is trimmed again after unquoting, so
/// padding inside quotes does not survive.
pub fn parse_line(line: &str) -> Option<(&str, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").map_or(line, str::trim_start);
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    let value = cut_inline_comment(value.trim());
    Some((key, unquote(value).trim().to_owned()))
}

/// Drop a trailing comment: an unquoted `#` at the start or after whitespace.
fn cut_inline_comment(s: &str) -> &str {
    let (mut in_single, mut in_double) = (false, false);
    let mut after_space = true;
    for (i, c) in s.char_indices() {
        match c {
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            '#' if !in_single && !in_double && after_space => return s[..i].trim_end(),
            _ => {}
        }
        after_space = c.is_whitespace();
    }
    s
}

/// Strip one pair of matching quotes. Double-quoted values understand
/// `\n \r \t \\ \" \'`; single-quoted values only `\'`.
fn unquote(s: &str) -> Cow<'_, str> {
    if let Some(inner) = s.strip_prefix('"').and_then(|r| r.strip_suffix('"')) {
        Cow::Owned(unescape_double(inner))
    } else if let Some(inner) = s.strip_prefix('\'').and_then(|r| r.strip_suffix('\'')) {
        Cow::Owned(inner.replace("\\'", "'"))
    } else {
        Cow::Borrowed(s)
    }
}

fn unescape_double(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            // unknown escapes keep the escaped character; includes \\ \" \'
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
