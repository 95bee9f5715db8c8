use crate::{
    common::{error::LedgerError, money::Money},
    config::SessionConfig,
    domain::consultant::Consultant,
};

/// Today's numbers for the whole store. Owned by the session and mutated
/// only through the command handlers.
#[derive(Debug, Clone)]
pub struct Ledger {
    /// Most recently selected consultant first.
    consultants: Vec<Consultant>,
    store_target: Money,
    active: Option<String>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl Ledger {
    pub fn new(config: &SessionConfig) -> Self {
        let target = config.consultant_target();
        let consultants = config
            .roster
            .iter()
            .enumerate()
            .map(|(index, name)| Consultant::new(format!("consultant-{index}"), name, target))
            .collect();
        Self::from_parts(consultants, config.store_target())
    }

    pub fn from_parts(consultants: Vec<Consultant>, store_target: Money) -> Self {
        Self {
            consultants,
            store_target,
            active: None,
        }
    }

    pub fn consultants(&self) -> &[Consultant] {
        &self.consultants
    }

    pub fn consultant(&self, id: &str) -> Result<&Consultant, LedgerError> {
        self.consultants
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| LedgerError::UnknownConsultant(id.to_string()))
    }

    pub fn consultant_mut(&mut self, id: &str) -> Result<&mut Consultant, LedgerError> {
        self.consultants
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| LedgerError::UnknownConsultant(id.to_string()))
    }

    pub fn store_target(&self) -> Money {
        self.store_target
    }

    pub(crate) fn set_store_target(&mut self, target: Money) {
        self.store_target = target;
    }

    /// Id of the consultant currently using the tracker, if any.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn mark_active(&mut self, id: &str) -> Result<(), LedgerError> {
        self.consultant(id)?;
        self.active = Some(id.to_string());
        Ok(())
    }

    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// Stable partition: `id` first, everyone else in their prior order.
    pub fn move_to_front(&mut self, id: &str) -> Result<(), LedgerError> {
        let pos = self
            .consultants
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| LedgerError::UnknownConsultant(id.to_string()))?;
        self.consultants[..=pos].rotate_right(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(ledger: &Ledger) -> Vec<&str> {
        ledger.consultants().iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn default_ledger_has_fixed_roster() {
        let ledger = Ledger::default();
        assert_eq!(ledger.consultants().len(), 12);
        assert_eq!(ledger.store_target(), Money::from_units(5000));
        assert_eq!(ledger.active(), None);

        let first = &ledger.consultants()[0];
        assert_eq!(first.id, "consultant-0");
        assert_eq!(first.name, "Petr Michal");
        assert_eq!(first.daily_target, Money::from_units(1000));
        assert_eq!(ledger.consultants()[11].id, "consultant-11");
    }

    #[test]
    fn lookup_reports_unknown_consultant() {
        let ledger = Ledger::default();
        assert!(ledger.consultant("consultant-3").is_ok());
        assert_eq!(
            ledger.consultant("nobody").unwrap_err(),
            LedgerError::UnknownConsultant("nobody".into())
        );
    }

    #[test]
    fn move_to_front_is_a_stable_partition() {
        let mut ledger = Ledger::default();
        ledger.move_to_front("consultant-3").unwrap();

        let order = ids(&ledger);
        assert_eq!(
            order[..5],
            [
                "consultant-3",
                "consultant-0",
                "consultant-1",
                "consultant-2",
                "consultant-4"
            ]
        );
        assert_eq!(order.len(), 12);
    }

    #[test]
    fn move_to_front_of_first_is_a_no_op() {
        let mut ledger = Ledger::default();
        let before: Vec<String> = ids(&ledger).into_iter().map(String::from).collect();
        ledger.move_to_front("consultant-0").unwrap();
        assert_eq!(ids(&ledger), before);
    }

    #[test]
    fn move_to_front_unknown_leaves_order() {
        let mut ledger = Ledger::default();
        let err = ledger.move_to_front("ghost").unwrap_err();
        assert_eq!(err, LedgerError::UnknownConsultant("ghost".into()));
        assert_eq!(ids(&ledger)[0], "consultant-0");
    }

    #[test]
    fn mark_active_does_not_reorder() {
        let mut ledger = Ledger::default();
        ledger.mark_active("consultant-5").unwrap();
        assert_eq!(ledger.active(), Some("consultant-5"));
        assert_eq!(ids(&ledger)[0], "consultant-0");

        ledger.clear_active();
        assert_eq!(ledger.active(), None);
    }
}
