use std::io::Write;

use crate::{
    common::money::Money,
    domain::{
        aggregate::{
            goal_reached, progress, segment_totals, store_goal_reached, store_total, total_of,
        },
        ledger::Ledger,
        segment::SEGMENTS,
    },
};

/// Id used for the store-wide summary row.
pub const STORE_ROW_ID: &str = "store";

/// One decimal place, as shown on the dashboard. Empty when the target is
/// zero and progress is undefined.
fn progress_cell(current: Money, target: Money) -> String {
    progress(current, target)
        .map(|p| format!("{p:.1}"))
        .unwrap_or_default()
}

/// Writes today's standings as CSV.
///
/// Header: `id,name,<segment names...>,total,target,progress,goal_reached,active`.
/// One row per consultant in roster order, followed by a `store` row with
/// per-segment sums, the store total and the store target. Monetary fields
/// are formatted with 4 decimal places.
///
/// # Errors
///
/// Returns a `csv::Error` if writing any record fails.
///
/// # Examples
///
/// ```
/// use sales_tracker::domain::ledger::Ledger;
/// use sales_tracker::io::writer::write_standings;
///
/// let ledger = Ledger::default();
/// let mut out = Vec::new();
/// write_standings(&mut out, &ledger).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("id,name,Air Bank,"));
/// assert!(s.contains("\nconsultant-0,Petr Michal,"));
/// assert!(s.trim_end().lines().last().unwrap().starts_with("store,"));
/// ```
pub fn write_standings<W: Write>(writer: W, ledger: &Ledger) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    let mut header = vec!["id", "name"];
    header.extend(SEGMENTS.iter().map(|s| s.name));
    header.extend(["total", "target", "progress", "goal_reached", "active"]);
    wtr.write_record(&header)?;

    for c in ledger.consultants() {
        let total = total_of(c);
        let mut record = vec![c.id.clone(), c.name.clone()];
        record.extend(c.entries.iter().map(|(_, amount)| amount.to_string_4dp()));
        record.extend([
            total.to_string_4dp(),
            c.daily_target.to_string_4dp(),
            progress_cell(total, c.daily_target),
            goal_reached(c).to_string(),
            (ledger.active() == Some(c.id.as_str())).to_string(),
        ]);
        wtr.write_record(&record)?;
    }

    let total = store_total(ledger);
    let mut record = vec![STORE_ROW_ID.to_string(), "Store".to_string()];
    record.extend(
        segment_totals(ledger)
            .iter()
            .map(|(_, amount)| amount.to_string_4dp()),
    );
    record.extend([
        total.to_string_4dp(),
        ledger.store_target().to_string_4dp(),
        progress_cell(total, ledger.store_target()),
        store_goal_reached(ledger).to_string(),
        false.to_string(),
    ]);
    wtr.write_record(&record)?;

    wtr.flush()?;
    Ok(())
}
