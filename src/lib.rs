// SPDX-License-Identifier: MPL-2.0
//! `art_space` is a small rotating artwork gallery built with the Iced GUI framework.
//!
//! A fixed catalog of artworks bundled into the binary is shown one at a
//! time with wrap-around "Previous"/"Next" navigation, and the screen
//! adapts its composition to the window's portrait or landscape
//! orientation. Localization is handled with Fluent and user preferences
//! are read from a small TOML file.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod navigation;
pub mod orientation;
pub mod ui;
