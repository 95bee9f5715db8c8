use crate::{common::error::LedgerError, domain::ledger::Ledger};

/// Makes `consultant` active and moves them to the top of the roster.
pub fn select(ledger: &mut Ledger, consultant: &str) -> Result<(), LedgerError> {
    ledger.mark_active(consultant)?;
    ledger.move_to_front(consultant)
}

/// Clears the active consultant. The roster keeps its current order.
pub fn deselect(ledger: &mut Ledger) {
    ledger.clear_active();
}
