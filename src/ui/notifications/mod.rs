// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Transient, auto-dismissing messages stacked at the top of the window.
//! Each toast fades in, holds, fades out, and then removes itself.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record and `Category`
//! - [`lifecycle`] - Per-toast `Enter → Hold → Exit → Removed` state machine
//! - [`manager`] - `Manager` owning the ordered collection of active toasts
//! - [`bridge`] - Registration slot letting any caller reach the mounted manager
//! - [`toast`] - Toast widget rendering
//!
//! # Usage
//!
//! ```
//! use toast_showcase::ui::notifications::{bridge, Bridge, Category, Manager};
//!
//! let bridge = Bridge::new();
//! let mut manager = Manager::new();
//! manager.mount(&bridge);
//!
//! // Anywhere else in the application
//! bridge.notify("Image saved", Category::Success);
//!
//! // In the update loop
//! manager.pump();
//! assert_eq!(manager.len(), 1);
//!
//! // Without a mounted manager the request is dropped
//! manager.unmount();
//! bridge.notify("lost", Category::Error);
//! # let _ = bridge::global();
//! ```

pub mod bridge;
pub mod lifecycle;
mod manager;
mod notification;
mod toast;

pub use bridge::{notify, notify_success, Bridge, Registration};
pub use lifecycle::{Lifecycle, Phase, Timings, Visual};
pub use manager::{Entry, Manager};
pub use notification::{Category, Notification, NotificationId};
pub use toast::Toast;
