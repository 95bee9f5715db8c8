use crate::{
    common::{
        clock::{Clock, SystemClock},
        error::LedgerError,
        event::LedgerCommand,
    },
    domain::{
        goal::{Celebration, GoalAchieved},
        ledger::Ledger,
    },
    worker::handlers::{avatar, entry, selection, target},
};

/// Applies commands to a ledger, stamping and announcing goal events.
#[derive(Debug, Default)]
pub struct Processor<C = SystemClock> {
    clock: C,
    celebration: Celebration,
}

impl Processor<SystemClock> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> Processor<C> {
    pub fn with_clock(clock: C, celebration: Celebration) -> Self {
        Self { clock, celebration }
    }

    /// Runs one command. On error the ledger is unchanged.
    pub fn process(
        &mut self,
        ledger: &mut Ledger,
        command: LedgerCommand,
    ) -> Result<Option<GoalAchieved>, LedgerError> {
        match command {
            LedgerCommand::SetEntry {
                consultant,
                segment,
                amount,
            } => {
                let now = self.clock.now();
                let event = entry::handle(ledger, &consultant, &segment, amount, now)?;
                if let Some(event) = &event {
                    self.celebration.announce(event.clone());
                }
                return Ok(event);
            }
            LedgerCommand::SetConsultantTarget { consultant, target } => {
                target::handle_consultant(ledger, &consultant, target)?;
            }
            LedgerCommand::SetStoreTarget { target } => {
                target::handle_store(ledger, target);
            }
            LedgerCommand::Select { consultant } => {
                selection::select(ledger, &consultant)?;
            }
            LedgerCommand::Deselect => {
                selection::deselect(ledger);
            }
            LedgerCommand::SetAvatar {
                consultant,
                avatar: reference,
            } => {
                avatar::handle(ledger, &consultant, reference)?;
            }
        }
        Ok(None)
    }

    /// The goal event to display right now, if one is still live.
    pub fn active_celebration(&mut self) -> Option<&GoalAchieved> {
        let now = self.clock.now();
        self.celebration.clear_expired(now);
        self.celebration.active(now)
    }
}
