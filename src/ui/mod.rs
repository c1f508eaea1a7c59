// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`catalog`] - The service-catalog page and its cards
//! - [`tilt`] - Per-card pointer-tracking tilt state
//! - [`icons`] - Keyword-based service icon mapping
//! - [`widgets`] - Custom Iced widgets (loading spinner)
//! - [`styles`] - Centralized styling (buttons, panels, cards)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod catalog;
pub mod design_tokens;
pub mod icons;
pub mod styles;
pub mod tilt;
pub mod widgets;
