// SPDX-License-Identifier: MPL-2.0
//! Application lookup through XDG desktop entries.
//!
//! A package such as `org.gnome.Evolution` maps to
//! `applications/org.gnome.Evolution.desktop` under each XDG data directory.
//! The entry's `Name` and `Icon` keys give the display identity; icon names
//! are looked up in the hicolor theme and in `pixmaps`.

use crate::application::port::{AppIdentity, AppResolver, ResolveError};
use crate::domain::notification::IconSource;
use std::fs;
use std::path::{Path, PathBuf};

const ICON_SIZES: [&str; 5] = ["scalable", "128x128", "64x64", "48x48", "32x32"];
const ICON_EXTENSIONS: [&str; 2] = ["svg", "png"];

/// Resolver reading `.desktop` files from XDG data directories.
#[derive(Debug, Clone)]
pub struct DesktopEntryResolver {
    roots: Vec<PathBuf>,
}

impl DesktopEntryResolver {
    /// Uses `$XDG_DATA_HOME` and `$XDG_DATA_DIRS`, in that order.
    #[must_use]
    pub fn from_environment() -> Self {
        let mut roots: Vec<PathBuf> = dirs::data_dir().into_iter().collect();
        let system = std::env::var("XDG_DATA_DIRS")
            .ok()
            .filter(|dirs| !dirs.is_empty())
            .unwrap_or_else(|| "/usr/local/share:/usr/share".to_string());
        roots.extend(system.split(':').filter(|d| !d.is_empty()).map(PathBuf::from));
        Self { roots }
    }

    /// Uses exactly the given data directories.
    #[must_use]
    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    fn find_entry(&self, package: &str) -> Option<PathBuf> {
        let file_names = [format!("{package}.desktop"), format!("{}.desktop", package.to_lowercase())];
        self.roots.iter().find_map(|root| {
            file_names
                .iter()
                .map(|name| root.join("applications").join(name))
                .find(|path| path.is_file())
        })
    }

    fn find_icon(&self, name: &str) -> Option<PathBuf> {
        for root in &self.roots {
            for size in ICON_SIZES {
                for ext in ICON_EXTENSIONS {
                    let path = root
                        .join("icons/hicolor")
                        .join(size)
                        .join("apps")
                        .join(format!("{name}.{ext}"));
                    if path.is_file() {
                        return Some(path);
                    }
                }
            }
            for ext in ICON_EXTENSIONS {
                let path = root.join("pixmaps").join(format!("{name}.{ext}"));
                if path.is_file() {
                    return Some(path);
                }
            }
        }
        None
    }
}

impl AppResolver for DesktopEntryResolver {
    fn resolve(&self, package: &str) -> Result<AppIdentity, ResolveError> {
        let path = self
            .find_entry(package)
            .ok_or_else(|| ResolveError::NotFound(package.to_string()))?;
        let text = fs::read_to_string(&path)
            .map_err(|err| ResolveError::Unreadable(format!("{}: {err}", path.display())))?;
        let entry = parse_entry(&text);
        let name = entry
            .name
            .ok_or_else(|| ResolveError::Unreadable(format!("{}: no Name", path.display())))?;
        let icon = entry.icon.and_then(|icon| self.resolve_icon(&icon));
        Ok(AppIdentity { name, icon })
    }

    fn resolve_icon(&self, hint: &str) -> Option<IconSource> {
        let hint = hint.strip_prefix("file://").unwrap_or(hint);
        let direct = Path::new(hint);
        if direct.is_absolute() {
            return direct.is_file().then(|| IconSource::from_path(direct.to_path_buf()));
        }
        self.find_icon(hint).map(IconSource::from_path)
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct EntryFields {
    name: Option<String>,
    icon: Option<String>,
}

/// Extracts the unlocalized `Name` and `Icon` of the `[Desktop Entry]` group.
fn parse_entry(text: &str) -> EntryFields {
    let mut fields = EntryFields::default();
    let mut in_main_group = false;
    for line in text.lines().map(str::trim) {
        if line.starts_with('[') {
            in_main_group = line == "[Desktop Entry]";
            continue;
        }
        if !in_main_group || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match key.trim() {
            "Name" => fields.name = Some(value.to_string()),
            "Icon" => fields.icon = Some(value.to_string()),
            _ => {}
        }
    }
    fields
}
