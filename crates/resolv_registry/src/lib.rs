//! Scheme registry for `${scheme:rest}` variables.
//!
//! A variable such as `json:/etc/app.json//server.port` is dispatched on its
//! scheme prefix (`json:`) to a [`Resolver`], which receives the rest of the
//! string. [`Registry::resolve_string`] runs the interpolation engine over a
//! whole string with the registry as its token resolver.
//!
//! # Built-in schemes
//!
//! | scheme | form | result |
//! |--------|------|--------|
//! | `env:` | `env:NAME` | environment variable |
//! | `file:` | `file:path[//KEY]` | value of `KEY` in a `KEY=VALUE` file, or the whole file |
//! | `json:` | `json:path[//keypath]` | selected value, or the whole file |
//! | `yaml:` | `yaml:path[//keypath]` | selected value, or the whole file |
//! | `toml:` | `toml:path[//keypath]` | selected value, or the whole file |
//! | `ini:` | `ini:path[//Section.Key]` | key in a section (`DEFAULT` without a dot), or the whole file |
//!
//! File paths may reference environment variables (`$HOME`, `${CONFIG_DIR}`).
//!
//! # Process-wide registry
//!
//! [`default_registry`] holds the built-in schemes and backs the free
//! functions in this crate. Independent registries come from
//! [`Registry::new`] or [`Registry::with_defaults`].

use std::sync::OnceLock;

use resolv_ir::Result;

mod registry;
mod resolvers;
mod source;

pub use registry::{Registry, Resolver, ResolverFn, UnknownSchemePolicy};
pub use resolvers::{
    parse_line, DocumentResolver, EnvResolver, FileResolver, Format, IniResolver,
};
pub use source::{expand_env, expand_with, split_source};

static DEFAULT_REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry, created with [`Registry::with_defaults`] on first use.
pub fn default_registry() -> &'static Registry {
    DEFAULT_REGISTRY.get_or_init(Registry::with_defaults)
}

/// Register `resolver` under `scheme` in the default registry.
pub fn register_resolver<R>(scheme: &str, resolver: R) -> Result<()>
where
    R: Resolver + 'static,
{
    default_registry().register(scheme, resolver)
}

/// Resolve one variable with the default registry.
pub fn resolve_variable(value: &str) -> Result<String> {
    default_registry().resolve_variable(value)
}

/// Interpolate `input` with the default registry.
pub fn resolve_string(input: &str) -> Result<String> {
    default_registry().resolve_string(input)
}

/// Resolve every variable with the default registry, failing on the first error.
pub fn resolve_all<S: AsRef<str>>(values: &[S]) -> Result<Vec<String>> {
    default_registry().resolve_all(values)
}
