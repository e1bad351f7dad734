//! Deferred actions
//!
//! A virtual-clock timer queue. Callers schedule an action after a delay,
//! keep the returned handle, and may cancel it until it fires. The host
//! drives time forward with [`TimerQueue::advance`].

/// Handle to a scheduled action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Pending<A> {
    due: u64,
    handle: TimerHandle,
    action: A,
}

/// Queue of actions due at a point in virtual time (milliseconds)
#[derive(Debug)]
pub struct TimerQueue<A> {
    now: u64,
    next_handle: u64,
    pending: Vec<Pending<A>>,
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> TimerQueue<A> {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_handle: 0,
            pending: Vec::new(),
        }
    }

    /// Current virtual time
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Schedules `action` to fire `delay_ms` from now
    pub fn schedule(&mut self, delay_ms: u64, action: A) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(Pending {
            due: self.now + delay_ms,
            handle,
            action,
        });
        handle
    }

    /// Cancels a pending action. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Moves time forward and returns the actions that came due, in due
    /// order (ties in scheduling order)
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<(TimerHandle, A)> {
        self.now += elapsed_ms;
        let now = self.now;

        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = rest;

        due.sort_by_key(|p| (p.due, p.handle));
        due.into_iter().map(|p| (p.handle, p.action)).collect()
    }

    /// Drops every pending action
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
