use std::collections::HashMap;

use super::queue::{Toast, ToastId, ToastOptions, ToastQueue, ToastSeverity};
use crate::shared::delayed_task::DelayedTask;

/// A pending expiry that can be called off.
pub trait ExpiryTimer {
    fn cancel(self);
}

impl ExpiryTimer for DelayedTask {
    fn cancel(self) {
        DelayedTask::cancel(self)
    }
}

/// Live toasts plus the expiry timer of each timed one.
///
/// A toast owns at most one timer. Dismissal cancels it; a timer firing for
/// a toast that is already gone changes nothing.
#[derive(Debug)]
pub struct ToastLedger<T> {
    queue: ToastQueue,
    timers: HashMap<ToastId, T>,
}

impl<T> Default for ToastLedger<T> {
    fn default() -> Self {
        Self {
            queue: ToastQueue::new(),
            timers: HashMap::new(),
        }
    }
}

impl<T: ExpiryTimer> ToastLedger<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a toast; `schedule` is called once with its id and duration when
    /// the toast is timed.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: ToastSeverity,
        options: ToastOptions,
        schedule: impl FnOnce(ToastId, u32) -> T,
    ) -> ToastId {
        let toast = self.queue.push(message, severity, options);
        let (id, duration_ms) = (toast.id, toast.duration_ms);
        if let Some(delay) = duration_ms {
            if let Some(stale) = self.timers.insert(id, schedule(id, delay)) {
                stale.cancel();
            }
        }
        id
    }

    /// Removes a toast on user request and cancels its timer.
    pub fn dismiss(&mut self, id: ToastId) -> Option<Toast> {
        if let Some(timer) = self.timers.remove(&id) {
            timer.cancel();
        }
        self.queue.remove(id)
    }

    /// Handles a timer that went off. The spent handle is dropped, not
    /// cancelled.
    pub fn fire(&mut self, id: ToastId) -> Option<Toast> {
        self.timers.remove(&id);
        self.queue.remove(id)
    }

    pub fn clear(&mut self) -> Vec<Toast> {
        for (_, timer) in self.timers.drain() {
            timer.cancel();
        }
        self.queue.clear()
    }

    pub fn queue(&self) -> &ToastQueue {
        &self.queue
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, HashSet};
    use std::rc::Rc;

    #[derive(Default)]
    struct Clock {
        /// (due time, id) of every timer ever scheduled
        scheduled: Vec<(u64, ToastId)>,
        cancelled: HashSet<ToastId>,
    }

    struct VirtualTimer {
        id: ToastId,
        clock: Rc<RefCell<Clock>>,
    }

    impl ExpiryTimer for VirtualTimer {
        fn cancel(self) {
            self.clock.borrow_mut().cancelled.insert(self.id);
        }
    }

    fn show_at(
        ledger: &mut ToastLedger<VirtualTimer>,
        clock: &Rc<RefCell<Clock>>,
        now: u64,
        options: ToastOptions,
    ) -> ToastId {
        ledger.show("saved", ToastSeverity::Success, options, |id, delay| {
            clock.borrow_mut().scheduled.push((now + u64::from(delay), id));
            VirtualTimer {
                id,
                clock: Rc::clone(clock),
            }
        })
    }

    #[test]
    fn dismiss_cancels_timer_and_late_fire_is_a_no_op() {
        let clock = Rc::new(RefCell::new(Clock::default()));
        let mut ledger = ToastLedger::new();
        let dismissed = show_at(&mut ledger, &clock, 0, ToastOptions::default());
        let kept = show_at(&mut ledger, &clock, 0, ToastOptions::default());

        assert!(ledger.dismiss(dismissed).is_some());
        assert!(clock.borrow().cancelled.contains(&dismissed));
        assert_eq!(ledger.pending_timers(), 1);

        assert!(ledger.fire(dismissed).is_none());
        assert!(ledger.dismiss(dismissed).is_none());
        assert_eq!(ledger.queue().len(), 1);
        assert!(ledger.queue().contains(kept));
    }

    #[test]
    fn sticky_toasts_get_no_timer() {
        let clock = Rc::new(RefCell::new(Clock::default()));
        let mut ledger = ToastLedger::new();
        let id = show_at(&mut ledger, &clock, 0, ToastOptions::sticky());
        assert!(clock.borrow().scheduled.is_empty());
        assert_eq!(ledger.pending_timers(), 0);
        assert!(ledger.queue().contains(id));
    }

    /// Five toasts with staggered durations, one dismissed early; every
    /// scheduled timer is then delivered in due order, including the one
    /// that was cancelled.
    #[test]
    fn each_toast_leaves_once_and_not_before_its_duration() {
        let clock = Rc::new(RefCell::new(Clock::default()));
        let mut ledger = ToastLedger::new();
        let durations = [300u32, 100, 250, 50, 400];
        let mut shown: BTreeMap<ToastId, (u64, u32)> = BTreeMap::new();
        for (step, duration) in durations.into_iter().enumerate() {
            let now = step as u64 * 20;
            let id = show_at(&mut ledger, &clock, now, ToastOptions::default().with_duration(duration));
            shown.insert(id, (now, duration));
        }
        assert_eq!(ledger.pending_timers(), durations.len());

        let early = *shown.keys().nth(2).unwrap();
        let mut left: Vec<(ToastId, u64)> = Vec::new();
        if ledger.dismiss(early).is_some() {
            left.push((early, 90));
        }

        let mut due = clock.borrow().scheduled.clone();
        due.sort();
        for (at, id) in due {
            if let Some(toast) = ledger.fire(id) {
                left.push((toast.id, at));
            }
        }

        assert!(ledger.queue().is_empty());
        assert_eq!(ledger.pending_timers(), 0);
        assert_eq!(left.len(), durations.len());
        let mut seen = HashSet::new();
        for (id, at) in &left {
            assert!(seen.insert(*id), "{id} left twice");
            if *id != early {
                let (shown_at, duration) = shown[id];
                assert!(*at >= shown_at + u64::from(duration));
            }
        }
        assert_eq!(clock.borrow().cancelled.len(), 1);
    }

    #[test]
    fn clear_cancels_every_pending_timer() {
        let clock = Rc::new(RefCell::new(Clock::default()));
        let mut ledger = ToastLedger::new();
        let a = show_at(&mut ledger, &clock, 0, ToastOptions::default());
        let b = show_at(&mut ledger, &clock, 0, ToastOptions::default());
        show_at(&mut ledger, &clock, 0, ToastOptions::sticky());

        assert_eq!(ledger.clear().len(), 3);
        assert_eq!(clock.borrow().cancelled, HashSet::from([a, b]));
        assert!(ledger.fire(a).is_none());
    }
}
