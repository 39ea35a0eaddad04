//! `ini:path//Section.Key`
//!
//! A key with no dot is looked up in the `DEFAULT` section, which covers
//! both keys above the first header and an explicit `[DEFAULT]` block.
//! `Section.Key` splits at the first dot, so `db.pool.size` reads key
//! `pool.size` from `[db]`.

use ini::{Ini, Properties};
use resolv_ir::{Error, Result};
use tracing::trace;

use crate::source::{expand_env, read_source, split_source};
use crate::Resolver;

const DEFAULT_SECTION: &str = "DEFAULT";

/// Reads a key from an INI file, or the whole file when no key is given.
#[derive(Copy, Clone, Debug, Default)]
pub struct IniResolver;

impl Resolver for IniResolver {
    fn resolve(&self, value: &str) -> Result<String> {
        let (path, key_path) = split_source(value);
        let path = expand_env(path);
        if path.trim().is_empty() {
            return Err(Error::bad_path("empty INI file path"));
        }

        let text = read_source(&path, "INI file")?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
        if key_path.is_empty() {
            return Ok(text.trim().to_owned());
        }

        let (section, key) = key_path
            .split_once('.')
            .unwrap_or((DEFAULT_SECTION, key_path));
        if key.trim().is_empty() {
            return Err(Error::bad_path(format!("empty key in {key_path:?}")));
        }

        let ini = Ini::load_from_str(text)
            .map_err(|err| Error::other(err).context(format!("parse INI in {path:?}")))?;
        trace!(section, key, "selecting from INI");

        let candidates = sections(&ini, section);
        if candidates.is_empty() {
            return Err(Error::not_found(format!("section {section:?} in {path:?}")));
        }
        candidates
            .iter()
            .find_map(|props| props.get(key))
            .map(str::to_owned)
            .ok_or_else(|| {
                Error::not_found(format!("key {key:?} in section {section:?} of {path:?}"))
            })
    }
}

/// Sections searched for `name`. `DEFAULT` is the unnamed top block first,
/// then any explicit `[DEFAULT]` header.
fn sections<'a>(ini: &'a Ini, name: &str) -> Vec<&'a Properties> {
    if name == DEFAULT_SECTION {
        [ini.section(None::<String>), ini.section(Some(DEFAULT_SECTION))]
            .into_iter()
            .flatten()
            .collect()
    } else {
        ini.section(Some(name)).into_iter().collect()
    }
}
