//! Multi-pass expansion driver.

use resolv_ir::{Error, Result};
use tracing::{trace, warn};

use crate::scan::{Piece, Scanner};

/// Passes run by [`Interpolator::default`] and [`resolve_string`].
pub const DEFAULT_MAX_PASSES: usize = 8;

/// The resolve capability consumed by the engine.
///
/// `content` is the raw text between `${` and `}`, conventionally
/// `scheme:rest`, and otherwise opaque to the engine.
pub trait TokenResolver {
    fn resolve_token(&self, content: &str) -> Result<String>;
}

impl<F> TokenResolver for F
where
    F: Fn(&str) -> Result<String>,
{
    fn resolve_token(&self, content: &str) -> Result<String> {
        self(content)
    }
}

/// Bounded multi-pass interpolation.
///
/// Each pass scans the current string left to right and replaces every
/// token. If a pass expanded nothing the string is final. Otherwise the
/// output becomes the input of the next pass, so a resolver may return text
/// that contains further tokens. When the pass budget runs out and `${` is
/// still present the call fails with `BadPath`, which is how resolution
/// cycles surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Interpolator {
    max_passes: usize,
}

impl Default for Interpolator {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpolator {
    pub const fn new() -> Self {
        Interpolator {
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Set the pass budget. Zero is treated as one.
    #[must_use]
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    pub fn max_passes(&self) -> usize {
        self.max_passes
    }

    /// Expand every token in `input` through `resolver`.
    ///
    /// Fails on the first malformed token or resolver error; a
    /// partially expanded string is never returned. Resolver errors are
    /// wrapped as `resolve ${content}: ...` and keep their kind.
    pub fn interpolate<R>(&self, input: &str, resolver: &R) -> Result<String>
    where
        R: TokenResolver + ?Sized,
    {
        let mut current = input.to_owned();
        for pass in 1..=self.max_passes {
            let (output, expanded) = expand_pass(&current, resolver)?;
            trace!(pass, expanded, "interpolation pass");
            if expanded == 0 {
                return Ok(output);
            }
            current = output;
        }

        if current.contains("${") {
            warn!(max_passes = self.max_passes, "interpolation depth exceeded");
            return Err(Error::bad_path("interpolation depth exceeded"));
        }
        Ok(current)
    }
}

/// Interpolate with the default pass budget.
pub fn resolve_string<R>(input: &str, resolver: &R) -> Result<String>
where
    R: TokenResolver + ?Sized,
{
    Interpolator::new().interpolate(input, resolver)
}

/// Run one pass. Returns the output and the number of tokens expanded.
fn expand_pass<R>(input: &str, resolver: &R) -> Result<(String, usize)>
where
    R: TokenResolver + ?Sized,
{
    let mut out = String::with_capacity(input.len());
    let mut expanded = 0;
    for piece in Scanner::new(input) {
        match piece? {
            Piece::Text(text) => out.push_str(text),
            Piece::Token { content, .. } => {
                let value = resolver
                    .resolve_token(content)
                    .map_err(|err| err.context(format!("resolve ${{{content}}}")))?;
                out.push_str(&value);
                expanded += 1;
            }
        }
    }
    Ok((out, expanded))
}
