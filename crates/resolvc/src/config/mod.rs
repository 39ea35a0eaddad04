//! Command-line options shared by every subcommand.

use resolv_ir::{Error, ErrorKind, Result};
use resolv_registry::{Registry, UnknownSchemePolicy};

/// Environment variable consulted when `--max-passes` is not given.
pub const MAX_PASSES_ENV: &str = "RESOLV_MAX_PASSES";

/// Options that apply to every subcommand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Interpolation pass budget. `None` keeps the registry default.
    pub max_passes: Option<usize>,
    /// Fail on variables with no registered scheme.
    pub strict: bool,
    /// Enable debug logging when `RUST_LOG` is unset.
    pub verbose: bool,
}

impl CliConfig {
    /// Split `args` into options and positional arguments.
    ///
    /// Options may appear anywhere. `env` supplies the fallback for
    /// [`MAX_PASSES_ENV`]; pass `|k| std::env::var(k).ok()` for the
    /// process environment.
    pub fn parse<F>(args: &[String], env: F) -> Result<(CliConfig, Vec<String>)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CliConfig::default();
        let mut positional = Vec::new();

        for arg in args {
            if let Some(value) = arg.strip_prefix("--max-passes=") {
                config.max_passes = Some(parse_passes("--max-passes", value)?);
            } else if arg == "--strict" {
                config.strict = true;
            } else if arg == "--verbose" || arg == "-v" {
                config.verbose = true;
            } else if arg.starts_with("--") {
                return Err(Error::new(
                    ErrorKind::Other,
                    format!("unknown option '{arg}'"),
                ));
            } else {
                positional.push(arg.clone());
            }
        }

        if config.max_passes.is_none() {
            if let Some(value) = env(MAX_PASSES_ENV) {
                config.max_passes = Some(parse_passes(MAX_PASSES_ENV, &value)?);
            }
        }
        Ok((config, positional))
    }

    /// Build the registry the commands run against.
    pub fn registry(&self) -> Registry {
        let registry = Registry::with_defaults();
        if self.strict {
            registry.set_unknown_scheme_policy(UnknownSchemePolicy::ErrorOnUnknown);
        }
        if let Some(passes) = self.max_passes {
            registry.set_max_passes(passes);
        }
        registry
    }
}

fn parse_passes(source: &str, value: &str) -> Result<usize> {
    value.trim().parse().map_err(|err| {
        Error::new(ErrorKind::Other, format!("invalid {source} value '{value}'")).with_source(err)
    })
}
