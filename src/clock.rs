//! Post id and timestamp source

use chrono::{DateTime, Utc};

use crate::state::PostId;

/// Id and creation time handed to a new post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub id: PostId,
    pub at: DateTime<Utc>,
}

pub trait Clock {
    /// Issue a stamp. Successive stamps must be non-decreasing in time.
    fn issue(&mut self) -> Stamp;
}

/// Wall-clock source; ids are epoch milliseconds
///
/// Two posts in the same millisecond would share an id, so the id is bumped
/// past the last one issued whenever the clock has not moved on.
#[derive(Debug, Default)]
pub struct SystemClock {
    last_millis: Option<i64>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_millis(&mut self, now_millis: i64) -> i64 {
        let millis = match self.last_millis {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last_millis = Some(millis);
        millis
    }
}

impl Clock for SystemClock {
    fn issue(&mut self) -> Stamp {
        let at = Utc::now();
        let millis = self.next_millis(at.timestamp_millis());
        Stamp {
            id: PostId::new(millis.to_string()),
            at,
        }
    }
}

/// Deterministic clock that advances one second per stamp
#[cfg(test)]
#[derive(Debug)]
pub struct ManualClock {
    next: DateTime<Utc>,
}

#[cfg(test)]
impl ManualClock {
    pub fn starting_at(epoch_secs: i64) -> Self {
        use chrono::TimeZone;

        Self {
            next: Utc
                .timestamp_opt(epoch_secs, 0)
                .single()
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn issue(&mut self) -> Stamp {
        let at = self.next;
        self.next += chrono::Duration::seconds(1);
        Stamp {
            id: PostId::new(at.timestamp_millis().to_string()),
            at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_ids_are_unique() {
        let mut clock = SystemClock::new();
        let ids: Vec<PostId> = (0..100).map(|_| clock.issue().id).collect();

        let mut deduped = ids.clone();
        deduped.sort_by_key(|id| id.as_str().parse::<i64>().unwrap_or_default());
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_next_millis_bumps_on_same_tick() {
        let mut clock = SystemClock::new();
        assert_eq!(clock.next_millis(1_000), 1_000);
        assert_eq!(clock.next_millis(1_000), 1_001);
        assert_eq!(clock.next_millis(999), 1_002);
        assert_eq!(clock.next_millis(5_000), 5_000);
    }

    #[test]
    fn test_system_clock_timestamps_non_decreasing() {
        let mut clock = SystemClock::new();
        let first = clock.issue();
        let second = clock.issue();
        assert!(second.at >= first.at);
    }

    #[test]
    fn test_manual_clock_advances() {
        let mut clock = ManualClock::starting_at(1_700_000_000);
        let first = clock.issue();
        let second = clock.issue();

        assert_eq!(first.id.as_str(), "1700000000000");
        assert_eq!(second.id.as_str(), "1700000001000");
        assert_eq!((second.at - first.at).num_seconds(), 1);
    }
}
