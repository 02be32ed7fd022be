// SPDX-License-Identifier: MPL-2.0
//! `toast_showcase` is a small UI showcase built with the Iced GUI framework.
//!
//! Its centerpiece is a toast notification queue: any part of the application
//! raises a toast through a registration bridge, and a single manager owned by
//! the application root animates each toast through enter, hold, and exit
//! phases before removing it.

pub mod app;
pub mod error;
pub mod ui;
