// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record and the `Category` enum
//! used throughout the notification system.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    ///
    /// IDs come from a process-wide monotonic counter, so two notifications
    /// created back to back never share an identity.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Category determines the visual treatment of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    /// Operation completed successfully.
    #[default]
    Success,
    /// Something went wrong.
    Error,
    /// Neutral informational message.
    Default,
}

impl Category {
    /// Resolves a category by name.
    ///
    /// Unknown names degrade to [`Category::Default`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Category::Success,
            "error" => Category::Error,
            _ => Category::Default,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Success => "success",
            Category::Error => "error",
            Category::Default => "default",
        }
    }

    /// Returns the background color of toasts in this category.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Category::Success => palette::TOAST_SUCCESS,
            Category::Error => palette::TOAST_ERROR,
            Category::Default => palette::TOAST_DEFAULT,
        }
    }

    /// Leading glyph shown before the message.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Category::Success => "✓",
            Category::Error => "!",
            Category::Default => "i",
        }
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A notification to be displayed to the user.
///
/// Immutable once created; the lifecycle state lives beside it in the manager.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    message: String,
    category: Category,
}

impl Notification {
    /// Creates a new notification with a fresh identity.
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            message: message.into(),
            category,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Category::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Category::Error, message)
    }

    /// Creates a notification with the default presentation.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Category::Default, message)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }
}
