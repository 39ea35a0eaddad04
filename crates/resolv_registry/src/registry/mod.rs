//! Scheme-prefix dispatch.
//!
//! A [`Registry`] maps scheme prefixes such as `env:` or `json:` to
//! [`Resolver`]s. Lookup walks schemes in registration order and hands the
//! first matching resolver the remainder of the variable.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use resolv_interp::{Interpolator, TokenResolver};
use resolv_ir::{Error, Result};
use tracing::debug;

use crate::resolvers::{DocumentResolver, EnvResolver, FileResolver, IniResolver};

/// Resolves one variable whose scheme prefix has already been removed.
pub trait Resolver: Send + Sync {
    fn resolve(&self, value: &str) -> Result<String>;
}

/// Adapter turning a closure into a [`Resolver`].
///
/// ```
/// use resolv_ir::Result;
/// use resolv_registry::{Registry, ResolverFn};
///
/// let registry = Registry::new();
/// let upper = |v: &str| -> Result<String> { Ok(v.to_uppercase()) };
/// registry.register("upper:", ResolverFn(upper)).unwrap();
/// assert_eq!(registry.resolve_variable("upper:abc").unwrap(), "ABC");
/// ```
pub struct ResolverFn<F>(pub F);

impl<F> Resolver for ResolverFn<F>
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn resolve(&self, value: &str) -> Result<String> {
        (self.0)(value)
    }
}

impl<F> fmt::Debug for ResolverFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ResolverFn(..)")
    }
}

/// What [`Registry::resolve_variable`] does with a variable no scheme matches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum UnknownSchemePolicy {
    /// Return the variable unchanged.
    #[default]
    PassThrough,
    /// Fail with `NotFound`.
    ErrorOnUnknown,
}

struct State {
    entries: Vec<(String, Arc<dyn Resolver>)>,
    policy: UnknownSchemePolicy,
    interpolator: Interpolator,
}

/// Ordered scheme table, safe to share between threads.
///
/// Reads take a shared lock only long enough to pick a resolver; the
/// resolver itself runs unlocked, so it may call back into the registry.
pub struct Registry {
    state: RwLock<State>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// An empty registry with the pass-through policy.
    pub fn new() -> Self {
        Self::from_entries(Vec::new())
    }

    /// A registry with the built-in schemes, in order:
    /// `env:`, `file:`, `json:`, `yaml:`, `toml:`, `ini:`.
    pub fn with_defaults() -> Self {
        let entries: Vec<(String, Arc<dyn Resolver>)> = vec![
            ("env:".to_owned(), Arc::new(EnvResolver)),
            ("file:".to_owned(), Arc::new(FileResolver)),
            ("json:".to_owned(), Arc::new(DocumentResolver::json())),
            ("yaml:".to_owned(), Arc::new(DocumentResolver::yaml())),
            ("toml:".to_owned(), Arc::new(DocumentResolver::toml())),
            ("ini:".to_owned(), Arc::new(IniResolver)),
        ];
        Self::from_entries(entries)
    }

    fn from_entries(entries: Vec<(String, Arc<dyn Resolver>)>) -> Self {
        Registry {
            state: RwLock::new(State {
                entries,
                policy: UnknownSchemePolicy::default(),
                interpolator: Interpolator::new(),
            }),
        }
    }

    /// Add `resolver` under `scheme`, or replace the resolver already there.
    ///
    /// `scheme` must end with `:` and name something before it (`"json:"`).
    /// A replaced scheme keeps its position in the lookup order.
    pub fn register<R>(&self, scheme: &str, resolver: R) -> Result<()>
    where
        R: Resolver + 'static,
    {
        validate_scheme(scheme)?;
        let resolver: Arc<dyn Resolver> = Arc::new(resolver);
        let mut state = self.state.write();
        if let Some(entry) = state.entries.iter_mut().find(|(s, _)| s == scheme) {
            debug!(scheme, "replacing resolver");
            entry.1 = resolver;
        } else {
            debug!(scheme, "registering resolver");
            state.entries.push((scheme.to_owned(), resolver));
        }
        Ok(())
    }

    /// Remove `scheme`. Returns `false` if it was not registered.
    pub fn unregister(&self, scheme: &str) -> bool {
        let mut state = self.state.write();
        let before = state.entries.len();
        state.entries.retain(|(s, _)| s != scheme);
        let removed = state.entries.len() != before;
        if removed {
            debug!(scheme, "unregistered resolver");
        }
        removed
    }

    /// Registered schemes in lookup order.
    pub fn schemes(&self) -> Vec<String> {
        self.state
            .read()
            .entries
            .iter()
            .map(|(s, _)| s.clone())
            .collect()
    }

    pub fn unknown_scheme_policy(&self) -> UnknownSchemePolicy {
        self.state.read().policy
    }

    pub fn set_unknown_scheme_policy(&self, policy: UnknownSchemePolicy) {
        self.state.write().policy = policy;
    }

    pub fn max_passes(&self) -> usize {
        self.state.read().interpolator.max_passes()
    }

    /// Pass budget used by [`resolve_string`](Self::resolve_string). Zero is treated as one.
    pub fn set_max_passes(&self, max_passes: usize) {
        let mut state = self.state.write();
        state.interpolator = state.interpolator.with_max_passes(max_passes);
    }

    /// Resolve a single `scheme:rest` variable.
    pub fn resolve_variable(&self, value: &str) -> Result<String> {
        let (matched, policy) = {
            let state = self.state.read();
            let matched = state.entries.iter().find_map(|(scheme, resolver)| {
                value
                    .strip_prefix(scheme.as_str())
                    .map(|rest| (scheme.clone(), rest, Arc::clone(resolver)))
            });
            (matched, state.policy)
        };

        match matched {
            Some((scheme, rest, resolver)) => {
                debug!(scheme = scheme.as_str(), "dispatching variable");
                resolver.resolve(rest)
            }
            None => match policy {
                UnknownSchemePolicy::PassThrough => Ok(value.to_owned()),
                UnknownSchemePolicy::ErrorOnUnknown => Err(Error::not_found(format!(
                    "no resolver registered for {value:?}"
                ))),
            },
        }
    }

    /// Expand every `${...}` token in `input` through this registry.
    pub fn resolve_string(&self, input: &str) -> Result<String> {
        let interpolator = self.state.read().interpolator;
        interpolator.interpolate(input, self)
    }

    /// Resolve each variable in order. Fails on the first error.
    pub fn resolve_all<S: AsRef<str>>(&self, values: &[S]) -> Result<Vec<String>> {
        values
            .iter()
            .map(|value| self.resolve_variable(value.as_ref()))
            .collect()
    }
}

impl TokenResolver for Registry {
    fn resolve_token(&self, content: &str) -> Result<String> {
        self.resolve_variable(content)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("Registry")
            .field(
                "schemes",
                &state.entries.iter().map(|(s, _)| s).collect::<Vec<_>>(),
            )
            .field("policy", &state.policy)
            .field("max_passes", &state.interpolator.max_passes())
            .finish()
    }
}

fn validate_scheme(scheme: &str) -> Result<()> {
    match scheme.strip_suffix(':') {
        Some(name) if !name.is_empty() => Ok(()),
        _ => Err(Error::bad_path(format!(
            "scheme {scheme:?} must be a name followed by ':'"
        ))),
    }
}
