use crate::common::{event::LedgerCommand, money::Money};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the input headers. Columns a
/// command does not use are left blank.
struct CsvRow {
    command: String,
    consultant: Option<String>,
    segment: Option<String>,
    amount: Option<String>,
}

/// Non-numeric amounts count as zero, the same way the entry form treats
/// them.
fn lenient_amount(raw: &str, line: usize) -> Money {
    Money::from_str(raw).unwrap_or_else(|e| {
        tracing::warn!(line, amount = raw, error = %e, "amount is not a number, using 0");
        Money::zero()
    })
}

/// Reads ledger commands from a CSV reader.
///
/// Supported headers: `command,consultant,segment,amount`.
/// The `command` field is trimmed and lowercased. Errors name the offending
/// data line (1-based, header excluded).
///
/// # Examples
///
/// ```
/// use sales_tracker::io::reader::read_commands;
/// use sales_tracker::common::event::LedgerCommand;
/// use csv::ReaderBuilder;
///
/// let data = "command,consultant,segment,amount\n\
/// select,consultant-0,,\n\
/// entry,consultant-0,TV,250\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let commands: Vec<_> = read_commands(&mut rdr).collect();
///
/// assert!(matches!(commands[0], Ok(LedgerCommand::Select { .. })));
/// assert!(matches!(commands[1], Ok(LedgerCommand::SetEntry { .. })));
/// ```
pub fn read_commands<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<LedgerCommand, String>> + '_ {
    rdr.deserialize::<CsvRow>()
        .enumerate()
        .map(|(i, res)| -> Result<LedgerCommand, String> {
            let line = i + 1;
            let row = res.map_err(|e| e.to_string())?;
            let kind = row.command.trim().to_ascii_lowercase();

            let required = |field: Option<String>, name: &str| {
                field
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
                    .ok_or_else(|| format!("{kind} missing {name} on line {line}"))
            };

            match kind.as_str() {
                "entry" => {
                    let consultant = required(row.consultant, "consultant")?;
                    let segment = required(row.segment, "segment")?;
                    let amount = required(row.amount, "amount")?;
                    Ok(LedgerCommand::SetEntry {
                        consultant,
                        segment,
                        amount: lenient_amount(&amount, line),
                    })
                }
                "target" => {
                    let consultant = required(row.consultant, "consultant")?;
                    let amount = required(row.amount, "amount")?;
                    Ok(LedgerCommand::SetConsultantTarget {
                        consultant,
                        target: lenient_amount(&amount, line),
                    })
                }
                "store_target" => {
                    let amount = required(row.amount, "amount")?;
                    Ok(LedgerCommand::SetStoreTarget {
                        target: lenient_amount(&amount, line),
                    })
                }
                "select" => Ok(LedgerCommand::Select {
                    consultant: required(row.consultant, "consultant")?,
                }),
                "deselect" => Ok(LedgerCommand::Deselect),
                other => Err(format!("unknown command: {other} on line {line}")),
            }
        })
}
