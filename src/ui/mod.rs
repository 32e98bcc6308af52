// SPDX-License-Identifier: MPL-2.0
//! User interface for the island.
//!
//! Follows the Elm-style "state down, messages up" pattern: the widget renders
//! the frame and content it is handed and reports pointer input.
//!
//! - [`island`] - Collapsed pill and expanded card
//! - [`styles`] - Container and text styles for the island surface
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod island;
pub mod styles;
