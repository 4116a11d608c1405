use std::collections::BTreeMap;

use gatekeeper_core::Msg;

/// Virtual-clock queue of scheduled messages. Entries with the same due time
/// come out in scheduling order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_seq: u64,
    pending: BTreeMap<(u64, u64), Msg>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn schedule(&mut self, delay_ms: u32, msg: Msg) {
        let due = self.now_ms + u64::from(delay_ms);
        self.next_seq += 1;
        self.pending.insert((due, self.next_seq), msg);
    }

    /// Pops the earliest message due at or before `until_ms`, moving the clock
    /// to its due time.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Msg> {
        let (&(due, seq), _) = self.pending.first_key_value()?;
        if due > until_ms {
            return None;
        }
        self.now_ms = self.now_ms.max(due);
        self.pending.remove(&(due, seq))
    }

    /// Moves the clock forward without firing anything. Never moves it back.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_due_then_schedule_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(20, Msg::AlertExpired { alert: 1 });
        timers.schedule(10, Msg::AlertExpired { alert: 2 });
        timers.schedule(10, Msg::AlertExpired { alert: 3 });

        assert_eq!(timers.pop_due(5), None);
        assert_eq!(timers.pop_due(15), Some(Msg::AlertExpired { alert: 2 }));
        assert_eq!(timers.now_ms(), 10);
        assert_eq!(timers.pop_due(15), Some(Msg::AlertExpired { alert: 3 }));
        assert_eq!(timers.pop_due(15), None);
        assert_eq!(timers.len(), 1);

        timers.set_now(15);
        timers.schedule(0, Msg::NotificationExpired { id: 7 });
        assert_eq!(timers.pop_due(15), Some(Msg::NotificationExpired { id: 7 }));
        assert_eq!(timers.pop_due(20), Some(Msg::AlertExpired { alert: 1 }));
        assert!(timers.is_empty());
    }
}
