use crate::{
    common::{error::LedgerError, money::Money},
    domain::ledger::Ledger,
};

/// Replaces a consultant's daily target. Never fires a goal event, even if
/// the new target is already met.
pub fn handle_consultant(
    ledger: &mut Ledger,
    consultant: &str,
    target: Money,
) -> Result<(), LedgerError> {
    let c = ledger.consultant_mut(consultant)?;
    c.daily_target = target.non_negative();
    tracing::debug!(consultant, target = %c.daily_target, "consultant target updated");
    Ok(())
}

pub fn handle_store(ledger: &mut Ledger, target: Money) {
    ledger.set_store_target(target.non_negative());
    tracing::debug!(target = %ledger.store_target(), "store target updated");
}
