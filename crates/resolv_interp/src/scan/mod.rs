//! Single-pass scanner over interpolation input.
//!
//! [`Scanner`] splits a string into [`Piece`]s: runs of literal text and
//! `${...}` tokens. It never allocates; every piece borrows from the input.
//! Only `$` immediately followed by `{` is interesting, so the scanner jumps
//! between `$` bytes with `memchr` and copies everything else as text.

use resolv_ir::{Error, Result};

/// One unit of scanner output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Literal text to copy verbatim. An escaped `\${` arrives as the text `${`.
    Text(&'a str),
    /// A `${content}` token. `offset` is the byte position of its `$`.
    Token { content: &'a str, offset: usize },
}

/// Iterator over the pieces of one interpolation pass.
///
/// Yields `Err` for a token with no closing `}` or with blank content, and
/// is fused after that.
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Scanner {
            src,
            pos: 0,
            failed: false,
        }
    }

    /// Byte position of the next `${` at or after the cursor.
    fn next_open(&self) -> Option<usize> {
        let bytes = self.src.as_bytes();
        memchr::memchr_iter(b'$', &bytes[self.pos..])
            .map(|rel| self.pos + rel)
            .find(|&dollar| bytes.get(dollar + 1) == Some(&b'{'))
    }

    fn fail(&mut self, err: Error) -> Option<Result<Piece<'a>>> {
        self.failed = true;
        Some(Err(err))
    }

    fn token(&mut self, dollar: usize) -> Option<Result<Piece<'a>>> {
        let start = dollar + 2;
        let Some(close) = memchr::memchr(b'}', &self.src.as_bytes()[start..]) else {
            return self.fail(Error::bad_path(format!(
                "missing closing '}}' at offset {dollar}"
            )));
        };
        let end = start + close;
        let content = &self.src[start..end];
        if content.trim().is_empty() {
            return self.fail(Error::bad_path(format!("empty ${{}} at offset {dollar}")));
        }
        self.pos = end + 1;
        Some(Ok(Piece::Token {
            content,
            offset: dollar,
        }))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Piece<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.src.len() {
            return None;
        }

        let Some(dollar) = self.next_open() else {
            let tail = &self.src[self.pos..];
            self.pos = self.src.len();
            return Some(Ok(Piece::Text(tail)));
        };

        let escaped = dollar > self.pos && self.src.as_bytes()[dollar - 1] == b'\\';
        let text_end = if escaped { dollar - 1 } else { dollar };
        if text_end > self.pos {
            let text = &self.src[self.pos..text_end];
            self.pos = text_end;
            return Some(Ok(Piece::Text(text)));
        }

        if escaped {
            // drop the backslash, keep `${` as text
            self.pos = dollar + 2;
            return Some(Ok(Piece::Text(&self.src[dollar..dollar + 2])));
        }
        self.token(dollar)
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}
