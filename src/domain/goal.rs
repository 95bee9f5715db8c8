use chrono::{DateTime, Duration, Utc};

use crate::common::money::Money;

/// A consultant's total crossed their daily target on an entry edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalAchieved {
    pub consultant_id: String,
    pub total: Money,
    pub target: Money,
    pub at: DateTime<Utc>,
}

/// Holds the goal event currently on display. A newer announcement
/// replaces the older one and restarts the lifetime.
#[derive(Debug, Clone)]
pub struct Celebration {
    lifetime: Duration,
    current: Option<GoalAchieved>,
}

impl Default for Celebration {
    fn default() -> Self {
        Self::new(Duration::seconds(5))
    }
}

impl Celebration {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            current: None,
        }
    }

    pub fn announce(&mut self, event: GoalAchieved) {
        self.current = Some(event);
    }

    /// An event whose expiry falls past the end of representable time never
    /// expires.
    pub fn active(&self, now: DateTime<Utc>) -> Option<&GoalAchieved> {
        self.current.as_ref().filter(|event| {
            event
                .at
                .checked_add_signed(self.lifetime)
                .is_none_or(|expires| now < expires)
        })
    }

    pub fn clear_expired(&mut self, now: DateTime<Utc>) {
        if self.active(now).is_none() {
            self.current = None;
        }
    }
}
