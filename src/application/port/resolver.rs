// SPDX-License-Identifier: MPL-2.0
//! Application identity resolution port.
//!
//! Turns a package identifier into something presentable: a human-readable
//! name and, when available, an icon.

use crate::domain::notification::IconSource;
use std::fmt;

/// Errors that can occur while resolving an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No installed application matches the package.
    NotFound(String),

    /// The application metadata exists but could not be read.
    Unreadable(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NotFound(package) => write!(f, "no application for {package}"),
            ResolveError::Unreadable(msg) => write!(f, "unreadable application entry: {msg}"),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Display identity of an installed application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    pub name: String,
    pub icon: Option<IconSource>,
}

/// Port for looking up application names and icons.
pub trait AppResolver {
    /// Resolves the display identity of a package.
    ///
    /// # Errors
    ///
    /// Returns an error if the package is unknown or its metadata is broken.
    fn resolve(&self, package: &str) -> Result<AppIdentity, ResolveError>;

    /// Resolves an icon name or path supplied by a notification sender.
    fn resolve_icon(&self, hint: &str) -> Option<IconSource>;
}
