//! `${...}` interpolation.
//!
//! A string such as `"host=${env:HOST} port=${json:cfg.json//port}"` is
//! expanded by handing each token's content (the text between `${` and `}`)
//! to a [`TokenResolver`] and splicing the replacement back in.
//!
//! - `\${` is an escape and produces a literal `${` without a lookup.
//! - A `$` not followed by `{` is an ordinary character.
//! - Replacement text may itself contain tokens; they are expanded by the
//!   next pass, up to [`DEFAULT_MAX_PASSES`] passes by default.
//!
//! ```
//! use resolv_interp::resolve_string;
//! use resolv_ir::Result;
//!
//! let upper = |content: &str| -> Result<String> { Ok(content.to_uppercase()) };
//! assert_eq!(resolve_string("a ${b} c", &upper).unwrap(), "a B c");
//! assert_eq!(resolve_string(r"a \${b} c", &upper).unwrap(), "a ${b} c");
//! ```
//!
//! The engine holds no state between calls; concurrency guarantees are
//! whatever the supplied resolver provides.

mod interpolate;
mod scan;

pub use interpolate::{resolve_string, Interpolator, TokenResolver, DEFAULT_MAX_PASSES};
pub use scan::{Piece, Scanner};
