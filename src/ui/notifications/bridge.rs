// SPDX-License-Identifier: MPL-2.0
//! Registration bridge between toast callers and the mounted manager.
//!
//! A [`Bridge`] is a single slot. Mounting a [`Manager`](super::Manager)
//! fills it with the sending half of a request channel; dropping the returned
//! [`Registration`] empties it again. Callers only ever see the bridge, so they
//! can raise toasts from anywhere (including other threads) without holding a
//! reference to the manager.
//!
//! Requests sent while the slot is empty are dropped. They are not buffered
//! for a manager that mounts later.
//!
//! Most of the application goes through the process-wide bridge returned by
//! [`global`], via the [`notify`] and [`notify_success`] shorthands.

use super::notification::Category;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// A show request travelling from a caller to the manager.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub message: String,
    pub category: Category,
}

struct Slot {
    generation: u64,
    sender: UnboundedSender<Request>,
}

#[derive(Default)]
struct Inner {
    slot: Mutex<Option<Slot>>,
    generations: AtomicU64,
}

/// Cloneable handle to a single registration slot.
#[derive(Clone, Default)]
pub struct Bridge {
    inner: Arc<Inner>,
}

impl fmt::Debug for Bridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bridge")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

impl Bridge {
    /// Creates a bridge with an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills the slot with a fresh channel and returns the receiving side.
    ///
    /// A previous registration, if any, is replaced; it stops receiving
    /// requests and dropping it later leaves the new registration in place.
    pub fn register(&self) -> Registration {
        let generation = self.inner.generations.fetch_add(1, Ordering::Relaxed);
        let (sender, receiver) = mpsc::unbounded_channel();

        let previous = self.slot().replace(Slot { generation, sender });
        if previous.is_some() {
            tracing::warn!(generation, "toast bridge registration replaced an active one");
        } else {
            tracing::info!(generation, "toast bridge registered");
        }

        Registration {
            bridge: self.clone(),
            generation,
            receiver,
        }
    }

    /// Returns whether a manager is currently registered.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.slot().is_some()
    }

    /// Asks the mounted manager to show a toast.
    ///
    /// Fire-and-forget: when nothing is mounted the message is dropped.
    pub fn notify(&self, message: impl Into<String>, category: Category) {
        let request = Request {
            message: message.into(),
            category,
        };

        let slot = self.slot();
        match slot.as_ref() {
            Some(slot) => {
                if let Err(err) = slot.sender.send(request) {
                    tracing::debug!(text = %err.0.message, "toast dropped, manager is gone");
                }
            }
            None => {
                tracing::debug!(text = %request.message, %category, "toast dropped, no manager mounted");
            }
        }
    }

    fn clear(&self, generation: u64) {
        let mut slot = self.slot();
        if slot.as_ref().is_some_and(|s| s.generation == generation) {
            *slot = None;
            tracing::info!(generation, "toast bridge unregistered");
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<Slot>> {
        self.inner
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Receiving side of a bridge registration. Dropping it unmounts.
pub struct Registration {
    bridge: Bridge,
    generation: u64,
    receiver: UnboundedReceiver<Request>,
}

impl Registration {
    /// Takes the next pending request, if any.
    pub fn try_recv(&mut self) -> Option<Request> {
        self.receiver.try_recv().ok()
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("generation", &self.generation)
            .finish()
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.bridge.clear(self.generation);
    }
}

static GLOBAL: OnceLock<Bridge> = OnceLock::new();

/// Returns the process-wide bridge.
pub fn global() -> &'static Bridge {
    GLOBAL.get_or_init(Bridge::new)
}

/// Shows a toast through the process-wide bridge.
pub fn notify(message: impl Into<String>, category: Category) {
    global().notify(message, category);
}

/// Shows a success toast through the process-wide bridge.
pub fn notify_success(message: impl Into<String>) {
    notify(message, Category::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bridge_is_not_mounted() {
        assert!(!Bridge::new().is_mounted());
    }

    #[test]
    fn registration_mounts_and_drop_unmounts() {
        let bridge = Bridge::new();
        let registration = bridge.register();
        assert!(bridge.is_mounted());

        drop(registration);
        assert!(!bridge.is_mounted());
    }

    #[test]
    fn requests_arrive_in_order() {
        let bridge = Bridge::new();
        let mut registration = bridge.register();

        bridge.notify("first", Category::Success);
        bridge.notify("second", Category::Error);

        let first = registration.try_recv().expect("first request");
        let second = registration.try_recv().expect("second request");
        assert_eq!(first.message, "first");
        assert_eq!(second.category, Category::Error);
        assert!(registration.try_recv().is_none());
    }

    #[test]
    fn notify_without_manager_is_dropped() {
        let bridge = Bridge::new();
        bridge.notify("lost", Category::Error);

        let mut registration = bridge.register();
        assert!(registration.try_recv().is_none());
    }

    #[test]
    fn clones_share_the_slot() {
        let bridge = Bridge::new();
        let caller = bridge.clone();
        let mut registration = bridge.register();

        caller.notify("from clone", Category::Default);

        assert!(caller.is_mounted());
        assert_eq!(
            registration.try_recv().map(|r| r.message),
            Some("from clone".to_string())
        );
    }

    #[test]
    fn stale_registration_does_not_clear_newer_one() {
        let bridge = Bridge::new();
        let old = bridge.register();
        let mut new = bridge.register();

        drop(old);
        assert!(bridge.is_mounted());

        bridge.notify("still delivered", Category::Success);
        assert!(new.try_recv().is_some());
    }

    #[test]
    fn notify_from_another_thread() {
        let bridge = Bridge::new();
        let mut registration = bridge.register();

        let caller = bridge.clone();
        std::thread::spawn(move || caller.notify("background", Category::Default))
            .join()
            .expect("thread panicked");

        assert_eq!(
            registration.try_recv().map(|r| r.message),
            Some("background".to_string())
        );
    }
}
