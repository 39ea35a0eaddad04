//! `env:NAME`

use std::env::VarError;

use resolv_ir::{Error, Result};

use crate::Resolver;

/// Reads a process environment variable. Surrounding whitespace in the
/// name is ignored.
#[derive(Copy, Clone, Debug, Default)]
pub struct EnvResolver;

impl Resolver for EnvResolver {
    fn resolve(&self, value: &str) -> Result<String> {
        let name = value.trim();
        if name.is_empty() {
            return Err(Error::bad_path("empty environment variable name"));
        }
        if name.contains(['=', '\0']) {
            return Err(Error::bad_path(format!(
                "invalid environment variable name {name:?}"
            )));
        }
        match std::env::var(name) {
            Ok(v) => Ok(v),
            Err(VarError::NotPresent) => Err(Error::not_found(format!("env {name:?}"))),
            Err(err @ VarError::NotUnicode(_)) => {
                Err(Error::other(err).context(format!("env {name:?}")))
            }
        }
    }
}

#[cfg(test)]
mod tests;
