use alloc::vec::Vec;

use swiper::{Timer, TimerKind};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Entry {
    due_ms: u64,
    seq: u64,
    timer: Timer,
}

/// A cancellable, clock-agnostic timer queue.
///
/// Holds at most one timer per [`TimerKind`]: scheduling a kind that is already pending replaces
/// it. Nothing here sleeps; the owner polls [`TimerQueue::pop_due`] from its own frame loop or
/// host timer.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms `timer` to fire at `now_ms + delay_ms`. Returns `true` if a pending timer of the same
    /// kind was replaced.
    pub fn schedule(&mut self, timer: Timer, now_ms: u64, delay_ms: u64) -> bool {
        let replaced = self.cancel(timer.kind());
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.entries.push(Entry {
            due_ms: now_ms.saturating_add(delay_ms),
            seq,
            timer,
        });
        replaced
    }

    /// Returns `true` if a pending timer was removed.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.timer.kind() != kind);
        self.entries.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.entries.iter().any(|e| e.timer.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The earliest deadline, if any timer is pending. Useful to sleep a host loop precisely.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.due_ms).min()
    }

    /// Removes and returns the earliest timer due at `now_ms`.
    ///
    /// Timers with equal deadlines come out in scheduling order.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Timer> {
        let (i, _) = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_ms <= now_ms)
            .min_by_key(|(_, e)| (e.due_ms, e.seq))?;
        Some(self.entries.swap_remove(i).timer)
    }
}
