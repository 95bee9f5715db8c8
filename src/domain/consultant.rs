use crate::{common::money::Money, domain::segment::SegmentEntries, io::avatar::AvatarRef};

#[derive(Debug, Clone)]
pub struct Consultant {
    /// Stable for the whole session.
    pub id: String,
    pub name: String,
    pub daily_target: Money,
    /// Today's amount per segment.
    pub entries: SegmentEntries,
    /// Opaque display reference from the avatar store.
    pub avatar: Option<AvatarRef>,
}

impl Consultant {
    pub fn new(id: impl Into<String>, name: impl Into<String>, daily_target: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            daily_target,
            entries: SegmentEntries::new(),
            avatar: None,
        }
    }

    /// Up to two initials, shown in place of a missing avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_consultant_starts_empty() {
        let c = Consultant::new("consultant-0", "Petr Michal", Money::from_units(1000));
        assert_eq!(c.daily_target, Money::from_units(1000));
        assert_eq!(c.entries, SegmentEntries::new());
        assert!(c.avatar.is_none());
    }

    #[test]
    fn initials_take_first_two_words() {
        let c = Consultant::new("c", "Michael Arnošt Beneš", Money::zero());
        assert_eq!(c.initials(), "MA");

        let c = Consultant::new("c", "Šárka", Money::zero());
        assert_eq!(c.initials(), "Š");
    }
}
