//! Cancellable one-shot timers for a single-threaded event loop.
//!
//! Nothing runs in the background: the host loop calls [`Timers::run_due`]
//! and due tasks fire synchronously, in deadline order. A task cancelled
//! through its [`TimerHandle`] before it fires is removed from the queue, so
//! it can never run afterwards.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::{SlotMap, new_key_type};
use web_time::{Duration, Instant};

use crate::{Clock, Dispose, SystemClock};

new_key_type! {
    pub struct TimerId;
}

struct Pending {
    deadline: Instant,
    // insertion order breaks deadline ties
    seq: u64,
    task: Box<dyn FnOnce()>,
}

struct TimerQueue {
    clock: Rc<dyn Clock>,
    pending: SlotMap<TimerId, Pending>,
    next_seq: u64,
}

#[derive(Clone)]
pub struct Timers {
    inner: Rc<RefCell<TimerQueue>>,
}

impl Default for Timers {
    fn default() -> Self {
        Self::system()
    }
}

impl Timers {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(TimerQueue {
                clock,
                pending: SlotMap::with_key(),
                next_seq: 0,
            })),
        }
    }

    pub fn system() -> Self {
        Self::new(Rc::new(SystemClock))
    }

    pub fn now(&self) -> Instant {
        self.inner.borrow().clock.now()
    }

    /// Run `task` once, `delay` from now.
    pub fn schedule(&self, delay: Duration, task: impl FnOnce() + 'static) -> TimerHandle {
        let mut q = self.inner.borrow_mut();
        let deadline = q.clock.now() + delay;
        let seq = q.next_seq;
        q.next_seq += 1;
        let id = q.pending.insert(Pending {
            deadline,
            seq,
            task: Box::new(task),
        });
        log::trace!("timer {id:?} scheduled in {delay:?}");
        TimerHandle {
            id,
            queue: Rc::downgrade(&self.inner),
        }
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner
            .borrow()
            .pending
            .values()
            .map(|p| p.deadline)
            .min()
    }

    /// Time left until the earliest pending task, zero if one is already due.
    pub fn time_until_next(&self) -> Option<Duration> {
        let now = self.now();
        self.next_deadline()
            .map(|d| d.saturating_duration_since(now))
    }

    /// Fire every task whose deadline has passed. Returns how many fired.
    ///
    /// Tasks scheduled by a firing task wait for the next call.
    pub fn run_due(&self) -> usize {
        let due = {
            let q = self.inner.borrow();
            let now = q.clock.now();
            let mut due: Vec<(Instant, u64, TimerId)> = q
                .pending
                .iter()
                .filter(|(_, p)| p.deadline <= now)
                .map(|(id, p)| (p.deadline, p.seq, id))
                .collect();
            due.sort_unstable_by_key(|&(deadline, seq, _)| (deadline, seq));
            due
        };

        let mut fired = 0;
        for (_, _, id) in due {
            // an earlier task may have cancelled this one
            let task = self.inner.borrow_mut().pending.remove(id);
            if let Some(p) = task {
                log::trace!("timer {id:?} fired");
                (p.task)();
                fired += 1;
            }
        }
        fired
    }
}

/// Handle to a scheduled task.
#[derive(Debug)]
pub struct TimerHandle {
    id: TimerId,
    queue: Weak<RefCell<TimerQueue>>,
}

impl TimerHandle {
    /// Remove the task from the queue. Returns `false` if it already fired or
    /// was cancelled.
    pub fn cancel(&self) -> bool {
        let Some(q) = self.queue.upgrade() else {
            return false;
        };
        let removed = q.borrow_mut().pending.remove(self.id);
        if removed.is_some() {
            log::trace!("timer {:?} cancelled", self.id);
        }
        removed.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.queue
            .upgrade()
            .is_some_and(|q| q.borrow().pending.contains_key(self.id))
    }

    /// Cancellation as a cleanup guard, for use with [`effect`](crate::effect).
    pub fn into_dispose(self) -> Dispose {
        Dispose::new(move || {
            self.cancel();
        })
    }
}
