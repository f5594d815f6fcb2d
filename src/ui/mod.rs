// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`page`] - The scrolling portfolio page, one fixed-height block per section
//! - [`navbar`] - Fixed navigation bar with scroll-spy highlight
//! - [`gallery`] - Carousel and lightbox views over the rotation state
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state management (section tracker, gallery interval)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod navbar;
pub mod page;
pub mod state;
pub mod styles;
pub mod theming;
