// SPDX-License-Identifier: MPL-2.0
//! XDG autostart entry, so the island comes back after login.
//!
//! `--enable` installs `~/.config/autostart/dev.iced_island.desktop` pointing
//! at the running binary and `--disable` removes it.

use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name of the autostart entry.
pub const ENTRY_FILE: &str = "dev.iced_island.desktop";

/// Returns the per-user autostart directory, usually `~/.config/autostart`.
#[must_use]
pub fn autostart_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("autostart"))
}

/// Writes the entry for the current executable into the default directory.
pub fn install() -> Result<PathBuf> {
    let dir = autostart_dir()
        .ok_or_else(|| Error::Config("no autostart directory on this system".into()))?;
    let exe = std::env::current_exe()?;
    install_in(&dir, &exe)
}

/// Removes the entry from the default directory.
///
/// Returns false if there was nothing to remove.
pub fn remove() -> Result<bool> {
    match autostart_dir() {
        Some(dir) => remove_from(&dir),
        None => Ok(false),
    }
}

/// Writes an entry launching `exe` into `dir`, creating `dir` if needed.
pub fn install_in(dir: &Path, exe: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(ENTRY_FILE);
    fs::write(&path, desktop_entry(exe))?;
    tracing::info!(path = %path.display(), "autostart entry installed");
    Ok(path)
}

/// Deletes the entry from `dir`. Returns false if it did not exist.
pub fn remove_from(dir: &Path) -> Result<bool> {
    let path = dir.join(ENTRY_FILE);
    match fs::remove_file(&path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "autostart entry removed");
            Ok(true)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}

fn desktop_entry(exe: &Path) -> String {
    format!(
        "[Desktop Entry]\n\
         Type=Application\n\
         Name=Iced Island\n\
         Comment=Floating notification island\n\
         Exec={}\n\
         Terminal=false\n\
         NoDisplay=true\n\
         X-GNOME-Autostart-enabled=true\n",
        exec_argument(exe)
    )
}

/// Quotes a path for the `Exec` key when it holds reserved characters.
fn exec_argument(exe: &Path) -> String {
    let raw = exe.to_string_lossy();
    let reserved = |c: char| c.is_whitespace() || "\"'\\$`<>~|&;*?#()".contains(c);
    if !raw.contains(reserved) {
        return raw.into_owned();
    }
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for c in raw.chars() {
        if matches!(c, '"' | '`' | '$' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
