use crate::{common::error::LedgerError, domain::ledger::Ledger, io::avatar::AvatarRef};

pub fn handle(
    ledger: &mut Ledger,
    consultant: &str,
    avatar: AvatarRef,
) -> Result<(), LedgerError> {
    ledger.consultant_mut(consultant)?.avatar = Some(avatar);
    Ok(())
}
