//! Built-in scheme resolvers.

mod document;
mod env;
mod file;
mod ini;

pub use document::{DocumentResolver, Format};
pub use env::EnvResolver;
pub use file::{parse_line, FileResolver};
pub use ini::IniResolver;
