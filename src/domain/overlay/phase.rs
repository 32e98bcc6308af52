// SPDX-License-Identifier: MPL-2.0
//! Overlay phase.

use std::fmt;

/// Visual state of the overlay.
///
/// A view is attached to the compositor if and only if the phase is not
/// [`Phase::Hidden`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing on screen.
    #[default]
    Hidden,
    /// The compact pill.
    Collapsed,
    /// The full card with body and actions.
    Expanded,
}

impl Phase {
    /// Returns true if a view is on screen in this phase.
    #[must_use]
    pub fn is_visible(self) -> bool {
        !matches!(self, Phase::Hidden)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Hidden => "hidden",
            Phase::Collapsed => "collapsed",
            Phase::Expanded => "expanded",
        };
        f.write_str(name)
    }
}
