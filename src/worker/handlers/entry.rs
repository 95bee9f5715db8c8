use chrono::{DateTime, Utc};

use crate::{
    common::{error::LedgerError, money::Money},
    domain::{aggregate::total_of, goal::GoalAchieved, ledger::Ledger, segment::Segment},
};

/// Sets one segment cell for a consultant, replacing the previous value.
///
/// Returns a [`GoalAchieved`] only when this edit moves the consultant's
/// total from below their daily target to at or above it.
pub fn handle(
    ledger: &mut Ledger,
    consultant: &str,
    segment: &str,
    amount: Money,
    at: DateTime<Utc>,
) -> Result<Option<GoalAchieved>, LedgerError> {
    // resolve both keys before touching anything
    let idx = Segment::position(segment)?;
    let c = ledger.consultant_mut(consultant)?;

    let before = total_of(c);
    c.entries.replace(idx, amount.non_negative());
    let after = total_of(c);

    if before < c.daily_target && after >= c.daily_target {
        tracing::info!(
            consultant = %c.id,
            total = %after,
            target = %c.daily_target,
            "daily goal achieved"
        );
        return Ok(Some(GoalAchieved {
            consultant_id: c.id.clone(),
            total: after,
            target: c.daily_target,
            at,
        }));
    }
    Ok(None)
}
