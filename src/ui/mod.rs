// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Elm-style "state down, messages up": screens expose a `Message` enum, a
//! `view` function, and leave side effects to the application root.
//!
//! # Screens
//!
//! - [`demo`] - Pop-up toast demo buttons
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast queue, lifecycle, bridge, and rendering
//! - [`styles`] - Centralized widget styling
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod demo;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
