//! Configuration access: the `~/.write.conf` file and the three-tier
//! resolver for connection settings.
//!
//! A setting is looked up through up to three sources, in order:
//!
//! 1. a host session variable (`mediawiki_editor_<key>`), which is where
//!    prompt answers are cached for the rest of the process,
//! 2. the `[wiki]` section of the config file,
//! 3. an interactive prompt, whose answer is written back to the host
//!    variable so it is never asked again.
//!
//! Credentials never reach tier three: they are read from the config file or
//! the command fails.

use crate::error::{MwError, Result};
use crate::host::EditorHost;
use ini::Ini;
use std::path::{Path, PathBuf};

const CONF_FILENAME: &str = ".write.conf";
const WIKI_SECTION: &str = "wiki";

/// Prefix for host session variables owned by this tool.
pub const VAR_PREFIX: &str = "mediawiki_editor_";

const URL_PROMPT: &str = "Mediawiki URL, like 'en.wikipedia.org': ";

/// Read-only view of the persisted config file.
pub struct WriteConf {
    ini: Ini,
}

impl WriteConf {
    /// `~/.write.conf`, or `None` when no home directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(CONF_FILENAME))
    }

    /// Load the config file. A missing file is an empty config, not an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::empty());
        }
        let ini = Ini::load_from_file(path).map_err(|e| MwError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { ini })
    }

    pub fn empty() -> Self {
        Self { ini: Ini::new() }
    }

    /// A value from the `[wiki]` section.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.ini.get_from(Some(WIKI_SECTION), key)
    }

    /// A required value from the `[wiki]` section. Used for credentials,
    /// which deliberately have no prompt fallback.
    pub fn require(&self, key: &'static str) -> Result<String> {
        self.get(key)
            .map(str::to_string)
            .ok_or(MwError::MissingKey(key))
    }
}

/// Three-tier lookup: host variable, config file, then prompt-and-cache.
/// An empty prompt answer means `default`.
pub fn resolve<H: EditorHost>(
    host: &mut H,
    conf: &WriteConf,
    key: &str,
    prompt: &str,
    default: &str,
) -> Result<String> {
    let var = format!("{}{}", VAR_PREFIX, key);
    if let Some(value) = host.var(&var) {
        return Ok(value);
    }
    if let Some(value) = conf.get(key) {
        return Ok(value.to_string());
    }

    let answer = host.prompt(prompt, default)?;
    let value = if answer.is_empty() {
        default.to_string()
    } else {
        answer
    };
    host.set_var(&var, &value);
    Ok(value)
}

/// Two-tier lookup for settings that must never prompt (`uri_scheme`,
/// `minor_edit`).
pub fn resolve_setting<H: EditorHost>(host: &H, conf: &WriteConf, key: &str) -> Option<String> {
    let var = format!("{}{}", VAR_PREFIX, key);
    host.var(&var).or_else(|| conf.get(key).map(str::to_string))
}

/// The wiki host name, shared by session construction and the browse
/// command.
pub fn base_url<H: EditorHost>(host: &mut H, conf: &WriteConf) -> Result<String> {
    resolve(host, conf, "url", URL_PROMPT, "")
}
