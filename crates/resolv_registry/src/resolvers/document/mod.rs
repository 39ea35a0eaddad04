//! `json:`, `yaml:` and `toml:` resolvers.
//!
//! All three decode the file into a [`Value`] tree and select a key path
//! from it with [`resolv_path::select`]. String results are returned as-is;
//! anything else is re-encoded in the file's own format.

use resolv_ir::{Error, Result, Value};
use tracing::trace;

use crate::source::{expand_env, read_source, split_source};
use crate::Resolver;

/// Document format handled by a [`DocumentResolver`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
            Format::Toml => "TOML",
        }
    }

    /// Decode a whole document.
    pub fn decode(self, text: &str) -> Result<Value> {
        match self {
            Format::Json => serde_json::from_str(text).map_err(Error::other),
            Format::Yaml => serde_yaml::from_str(text).map_err(Error::other),
            Format::Toml => toml::from_str(text).map_err(Error::other),
        }
    }

    /// Encode `value` in this format, without surrounding whitespace.
    ///
    /// JSON is compact and YAML uses block style. A TOML mapping becomes a
    /// document; other TOML values use inline syntax (`[1, 2]`, `"x"`).
    pub fn render(self, value: &Value) -> Result<String> {
        let text = match self {
            Format::Json => serde_json::to_string(value).map_err(Error::other)?,
            Format::Yaml => serde_yaml::to_string(value).map_err(Error::other)?,
            Format::Toml => match value {
                Value::Mapping(_) => toml::to_string(value).map_err(Error::other)?,
                _ => toml::Value::try_from(value)
                    .map_err(Error::other)?
                    .to_string(),
            },
        };
        Ok(text.trim().to_owned())
    }
}

/// Reads a structured file and selects a value with a path expression:
/// `json:/etc/app.json//servers.[name=api].port`.
#[derive(Copy, Clone, Debug)]
pub struct DocumentResolver {
    format: Format,
}

impl DocumentResolver {
    pub const fn new(format: Format) -> Self {
        DocumentResolver { format }
    }

    pub const fn json() -> Self {
        Self::new(Format::Json)
    }

    pub const fn yaml() -> Self {
        Self::new(Format::Yaml)
    }

    pub const fn toml() -> Self {
        Self::new(Format::Toml)
    }

    pub fn format(&self) -> Format {
        self.format
    }
}

impl Resolver for DocumentResolver {
    fn resolve(&self, value: &str) -> Result<String> {
        let name = self.format.name();
        let (path, key_path) = split_source(value);
        let path = expand_env(path);
        if path.trim().is_empty() {
            return Err(Error::bad_path("empty file path"));
        }

        let text = read_source(&path, &format!("{name} file"))?;
        if key_path.is_empty() {
            return Ok(text.trim().to_owned());
        }

        let root = self
            .format
            .decode(&text)
            .map_err(|err| err.context(format!("parse {name} in {path:?}")))?;
        trace!(format = name, key_path, "selecting from document");
        let found = resolv_path::select(&root, key_path)
            .map_err(|err| err.context(format!("key path {key_path:?} in {name} {path:?}")))?;

        match found {
            Value::String(s) => Ok(s.clone()),
            other => self.format.render(other),
        }
    }
}
