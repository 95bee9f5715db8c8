use crate::{
    common::{error::LedgerError, money::Money},
    domain::{consultant::Consultant, ledger::Ledger, segment::SegmentEntries},
};

/// A consultant's total: every segment except those excluded from totals.
///
/// This is the only place the total is computed; store figures and exports
/// go through it.
pub fn total_of(consultant: &Consultant) -> Money {
    consultant
        .entries
        .iter()
        .filter(|(segment, _)| !segment.exclude_from_total)
        .map(|(_, amount)| amount)
        .sum()
}

pub fn store_total(ledger: &Ledger) -> Money {
    ledger.consultants().iter().map(total_of).sum()
}

/// Percentage of `target` reached, clamped to 100.
///
/// Over-achievement is not visible here; use [`goal_reached`] for that.
///
/// # Errors
///
/// Returns [`LedgerError::InvalidTarget`] when `target` is zero or negative.
///
/// # Examples
///
/// ```
/// use sales_tracker::common::money::Money;
/// use sales_tracker::domain::aggregate::progress;
///
/// let p = progress(Money::from_units(250), Money::from_units(1000)).unwrap();
/// assert_eq!(p, 25.0);
/// assert_eq!(progress(Money::from_units(3000), Money::from_units(1000)).unwrap(), 100.0);
/// assert!(progress(Money::from_units(10), Money::zero()).is_err());
/// ```
pub fn progress(current: Money, target: Money) -> Result<f64, LedgerError> {
    if !target.is_positive() {
        return Err(LedgerError::InvalidTarget(target));
    }
    Ok((current.ratio_to(target) * 100.0).min(100.0))
}

pub fn goal_reached(consultant: &Consultant) -> bool {
    total_of(consultant) >= consultant.daily_target
}

pub fn store_goal_reached(ledger: &Ledger) -> bool {
    store_total(ledger) >= ledger.store_target()
}

/// Recorded amount per segment across the whole roster. Excluded segments
/// are summed too; they are only left out of totals.
pub fn segment_totals(ledger: &Ledger) -> SegmentEntries {
    let mut sums = SegmentEntries::new();
    for consultant in ledger.consultants() {
        sums.accumulate(&consultant.entries);
    }
    sums
}
