// SPDX-License-Identifier: MPL-2.0
//! Toast queue management.
//!
//! The `Manager` owns the ordered collection of active toasts. New toasts are
//! appended at the tail and every toast carries its own [`Lifecycle`]. A toast
//! leaves the collection only when its lifecycle reports the end of the exit
//! phase; there is no manual dismiss and no capacity limit.

use super::bridge::{Bridge, Registration};
use super::lifecycle::{Lifecycle, Phase, Timings, Visual};
use super::notification::{Category, Notification, NotificationId};
use std::time::{Duration, Instant};

/// An active toast: the immutable record plus its lifecycle state.
#[derive(Debug, Clone)]
pub struct Entry {
    notification: Notification,
    lifecycle: Lifecycle,
    /// Instant this entry was last charged up to; `None` until its first tick.
    last_tick: Option<Instant>,
}

impl Entry {
    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.notification.id()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    #[must_use]
    pub fn visual(&self) -> Visual {
        self.lifecycle.visual()
    }
}

/// Holds the active toasts in insertion order.
#[derive(Debug, Default)]
pub struct Manager {
    active: Vec<Entry>,
    timings: Timings,
    registration: Option<Registration>,
}

impl Manager {
    /// Creates an empty, unmounted manager with default timings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty, unmounted manager with custom timings.
    #[must_use]
    pub fn with_timings(timings: Timings) -> Self {
        Self {
            timings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Registers this manager as the target of `bridge`.
    ///
    /// Mounting again first releases the previous registration.
    pub fn mount(&mut self, bridge: &Bridge) {
        self.registration = None;
        self.registration = Some(bridge.register());
    }

    /// Releases the bridge registration. Pending requests are discarded.
    pub fn unmount(&mut self) {
        self.registration = None;
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.registration.is_some()
    }

    /// Appends a new toast at the tail and returns its identity.
    pub fn enqueue(&mut self, message: impl Into<String>, category: Category) -> NotificationId {
        let notification = Notification::new(category, message);
        let id = notification.id();
        tracing::debug!(%id, %category, "toast enqueued");

        self.active.push(Entry {
            notification,
            lifecycle: Lifecycle::new(self.timings),
            last_tick: None,
        });
        id
    }

    /// Removes the toast with `id`, wherever it sits in the collection.
    ///
    /// Returns `false` and leaves the collection untouched if `id` is absent.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        match self.active.iter().position(|entry| entry.id() == id) {
            Some(pos) => {
                self.active.remove(pos);
                tracing::debug!(%id, "toast removed");
                true
            }
            None => false,
        }
    }

    /// Enqueues every request received through the bridge since the last call.
    ///
    /// Returns the number of toasts added.
    pub fn pump(&mut self) -> usize {
        let Some(registration) = self.registration.as_mut() else {
            return 0;
        };

        let mut requests = Vec::new();
        while let Some(request) = registration.try_recv() {
            requests.push(request);
        }

        let count = requests.len();
        for request in requests {
            self.enqueue(request.message, request.category);
        }
        count
    }

    /// Advances every lifecycle by `delta` and evicts the toasts whose exit
    /// phase completed. Returns the number of toasts removed.
    pub fn advance(&mut self, delta: Duration) -> usize {
        let finished: Vec<NotificationId> = self
            .active
            .iter_mut()
            .filter_map(|entry| entry.lifecycle.advance(delta).then(|| entry.id()))
            .collect();

        self.evict(finished)
    }

    /// Advances lifecycles by the wall-clock time elapsed since each toast's
    /// previous tick.
    ///
    /// Every toast keeps its own clock, started by the first tick after it was
    /// enqueued, so no toast is charged for time before it existed.
    pub fn tick(&mut self, now: Instant) -> usize {
        let finished: Vec<NotificationId> = self
            .active
            .iter_mut()
            .filter_map(|entry| {
                let delta = entry
                    .last_tick
                    .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
                entry.last_tick = Some(now);
                entry.lifecycle.advance(delta).then(|| entry.id())
            })
            .collect();

        self.evict(finished)
    }

    fn evict(&mut self, finished: Vec<NotificationId>) -> usize {
        finished.into_iter().filter(|id| self.remove(*id)).count()
    }

    /// Returns the active toasts in insertion order.
    pub fn active(&self) -> impl Iterator<Item = &Entry> {
        self.active.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns whether any toast is still animating.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn messages(manager: &Manager) -> Vec<&str> {
        manager
            .active()
            .map(|entry| entry.notification().message())
            .collect()
    }

    #[test]
    fn new_manager_is_empty_and_unmounted() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert!(!manager.has_notifications());
        assert!(!manager.is_mounted());
    }

    #[test]
    fn enqueue_appends_in_order() {
        let mut manager = Manager::new();
        manager.enqueue("a", Category::Success);
        manager.enqueue("b", Category::Error);
        manager.enqueue("c", Category::Default);

        assert_eq!(messages(&manager), ["a", "b", "c"]);
    }

    #[test]
    fn identical_toasts_are_not_coalesced() {
        let mut manager = Manager::new();
        let first = manager.enqueue("Saved", Category::Success);
        let second = manager.enqueue("Saved", Category::Success);

        assert_ne!(first, second);
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn remove_from_middle_keeps_order() {
        let mut manager = Manager::new();
        manager.enqueue("a", Category::Success);
        let b = manager.enqueue("b", Category::Success);
        manager.enqueue("c", Category::Success);

        assert!(manager.remove(b));
        assert_eq!(messages(&manager), ["a", "c"]);
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut manager = Manager::new();
        let id = manager.enqueue("a", Category::Success);
        manager.enqueue("b", Category::Success);

        assert!(manager.remove(id));
        assert!(!manager.remove(id));
        assert!(!manager.remove(NotificationId::new()));
        assert_eq!(messages(&manager), ["b"]);
    }

    #[test]
    fn advance_evicts_after_full_lifecycle() {
        let mut manager = Manager::new();
        manager.enqueue("done", Category::Success);
        let total = manager.timings().total();

        assert_eq!(manager.advance(total - ms(1)), 0);
        assert_eq!(manager.len(), 1);

        assert_eq!(manager.advance(ms(1)), 1);
        assert!(manager.is_empty());
    }

    #[test]
    fn staggered_toasts_leave_independently() {
        let mut manager = Manager::new();
        manager.enqueue("first", Category::Success);
        manager.advance(ms(1000));
        manager.enqueue("second", Category::Error);

        let total = manager.timings().total();
        manager.advance(total - ms(1000));
        assert_eq!(messages(&manager), ["second"]);

        manager.advance(ms(1000));
        assert!(manager.is_empty());
    }

    #[test]
    fn out_of_order_completion_is_supported() {
        let mut manager = Manager::with_timings(Timings {
            enter: ms(10),
            hold: ms(100),
            exit: ms(10),
        });
        manager.enqueue("slow", Category::Success);

        manager.timings = Timings {
            enter: ms(10),
            hold: ms(10),
            exit: ms(10),
        };
        manager.enqueue("fast", Category::Success);

        manager.advance(ms(30));
        assert_eq!(messages(&manager), ["slow"]);
    }

    #[test]
    fn pump_without_mount_does_nothing() {
        let mut manager = Manager::new();
        assert_eq!(manager.pump(), 0);
    }

    #[test]
    fn pump_drains_bridge_requests() {
        let bridge = Bridge::new();
        let mut manager = Manager::new();
        manager.mount(&bridge);

        bridge.notify("one", Category::Success);
        bridge.notify("two", Category::Error);
        assert!(manager.is_empty());

        assert_eq!(manager.pump(), 2);
        assert_eq!(messages(&manager), ["one", "two"]);
    }

    #[test]
    fn unmount_clears_bridge_and_discards_pending() {
        let bridge = Bridge::new();
        let mut manager = Manager::new();
        manager.mount(&bridge);

        bridge.notify("pending", Category::Success);
        manager.unmount();
        assert!(!bridge.is_mounted());

        manager.mount(&bridge);
        assert_eq!(manager.pump(), 0);
    }

    #[test]
    fn dropping_manager_unmounts() {
        let bridge = Bridge::new();
        let mut manager = Manager::new();
        manager.mount(&bridge);
        drop(manager);

        assert!(!bridge.is_mounted());
    }

    #[test]
    fn tick_measures_time_between_calls() {
        let mut manager = Manager::new();
        manager.enqueue("timed", Category::Success);
        let start = Instant::now();

        manager.tick(start);
        assert_eq!(manager.active().next().map(Entry::phase), Some(Phase::Enter));

        manager.tick(start + manager.timings().total());
        assert!(manager.is_empty());
    }

    #[test]
    fn idle_time_is_not_charged_to_later_toast() {
        let mut manager = Manager::new();
        let start = Instant::now();
        manager.tick(start);

        manager.enqueue("late", Category::Success);
        manager.tick(start + Duration::from_secs(60));

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.active().next().map(Entry::phase), Some(Phase::Enter));
    }

    #[test]
    fn toast_after_removal_starts_hidden() {
        let mut manager = Manager::new();
        manager.enqueue("first", Category::Success);
        let start = Instant::now();
        let removed_at = start + manager.timings().total();

        manager.tick(start);
        assert_eq!(manager.tick(removed_at), 1);
        assert!(manager.is_empty());

        manager.enqueue("second", Category::Success);
        manager.tick(removed_at + ms(250));

        let entry = manager.active().next().expect("second toast");
        assert_eq!(entry.phase(), Phase::Enter);
        assert_eq!(entry.visual(), Visual::HIDDEN);
    }

    #[test]
    fn toast_enqueued_mid_frame_keeps_its_own_clock() {
        let mut manager = Manager::new();
        manager.enqueue("early", Category::Success);
        let start = Instant::now();
        manager.tick(start);

        manager.enqueue("mid", Category::Error);
        manager.tick(start + ms(100));

        let visuals: Vec<Visual> = manager.active().map(Entry::visual).collect();
        assert_ne!(visuals[0], Visual::HIDDEN);
        assert_eq!(visuals[1], Visual::HIDDEN);

        manager.tick(start + manager.timings().total());
        assert_eq!(messages(&manager), ["mid"]);
    }
}
