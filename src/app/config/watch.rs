// SPDX-License-Identifier: MPL-2.0
//! Detection of settings edited while the daemon runs.

use super::{config_path, Config};
use std::fs;
use std::path::PathBuf;

/// Remembers the last seen contents of `settings.toml` and reports changes.
///
/// Contents are compared rather than modification times, so two edits within
/// the same timestamp tick are still seen.
#[derive(Debug)]
pub struct SettingsWatcher {
    path: Option<PathBuf>,
    last: Option<String>,
}

impl SettingsWatcher {
    /// Watches `path`, taking its current contents as already applied.
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        let last = path.as_ref().and_then(|path| fs::read_to_string(path).ok());
        Self { path, last }
    }

    /// Watches the resolved config file location.
    #[must_use]
    pub fn at_config_path() -> Self {
        Self::new(config_path())
    }

    /// Returns the new configuration if the file changed since the last poll.
    ///
    /// A deleted file means defaults. A file that no longer parses is
    /// reported once and otherwise ignored, keeping the running settings.
    pub fn poll(&mut self) -> Option<Config> {
        let path = self.path.as_ref()?;
        let current = fs::read_to_string(path).ok();
        if current == self.last {
            return None;
        }
        self.last.clone_from(&current);

        match current {
            None => {
                tracing::info!(path = %path.display(), "settings file removed, using defaults");
                Some(Config::default())
            }
            Some(text) => match toml::from_str::<Config>(&text) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "settings reloaded");
                    Some(config)
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "ignoring unreadable settings edit");
                    None
                }
            },
        }
    }
}
