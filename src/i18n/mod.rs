// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent
//! localization system. It handles language detection and translation
//! lookup over `.ftl` resources embedded in the binary.

pub mod fluent;
