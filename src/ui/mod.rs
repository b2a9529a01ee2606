// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern: view
//! functions borrow application state, and the only thing flowing back up
//! is a component message.
//!
//! # Components
//!
//! - [`artwork_panel`] - Card displaying a single artwork's image, title,
//!   and description
//! - [`controls`] - "Previous"/"Next" navigation buttons with position
//!   counter
//! - [`layout`] - Portrait and landscape screen compositions
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod artwork_panel;
pub mod controls;
pub mod design_tokens;
pub mod layout;
pub mod styles;
pub mod theming;
