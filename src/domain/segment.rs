use crate::common::{error::LedgerError, money::Money};

/// A product line sales are booked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub name: &'static str,
    /// Recorded per consultant but never counted towards any total.
    pub exclude_from_total: bool,
}

const fn counted(name: &'static str) -> Segment {
    Segment {
        name,
        exclude_from_total: false,
    }
}

pub const SEGMENT_COUNT: usize = 8;

/// The fixed segment catalog. Order here is display and export order.
pub static SEGMENTS: [Segment; SEGMENT_COUNT] = [
    counted("Air Bank"),
    counted("Postpaid"),
    counted("IND"),
    counted("TV"),
    counted("Campra"),
    counted("HW"),
    Segment {
        name: "ICO",
        exclude_from_total: true,
    },
    counted("Zbytek"),
];

impl Segment {
    /// Position of `name` in [`SEGMENTS`].
    pub fn position(name: &str) -> Result<usize, LedgerError> {
        SEGMENTS
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| LedgerError::UnknownSegment(name.to_string()))
    }
}

/// One amount per catalog segment, indexed by catalog position, so an
/// entry for a segment outside the catalog cannot exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentEntries([Money; SEGMENT_COUNT]);

impl SegmentEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, segment: &str) -> Result<Money, LedgerError> {
        Ok(self.0[Segment::position(segment)?])
    }

    /// Replaces the amount at catalog position `idx` and returns the old one.
    pub(crate) fn replace(&mut self, idx: usize, amount: Money) -> Money {
        std::mem::replace(&mut self.0[idx], amount)
    }

    /// Pairs every catalog segment with its amount, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static Segment, Money)> + '_ {
        SEGMENTS.iter().zip(self.0.iter().copied())
    }

    pub(crate) fn accumulate(&mut self, other: &SegmentEntries) {
        for (slot, amount) in self.0.iter_mut().zip(other.0.iter()) {
            *slot += *amount;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_unique() {
        for (i, a) in SEGMENTS.iter().enumerate() {
            for b in &SEGMENTS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn only_ico_is_excluded() {
        let excluded: Vec<_> = SEGMENTS
            .iter()
            .filter(|s| s.exclude_from_total)
            .map(|s| s.name)
            .collect();
        assert_eq!(excluded, vec!["ICO"]);
    }

    #[test]
    fn position_rejects_unknown_names() {
        assert_eq!(Segment::position("Air Bank"), Ok(0));
        assert_eq!(Segment::position("Zbytek"), Ok(7));
        assert_eq!(
            Segment::position("air bank"),
            Err(LedgerError::UnknownSegment("air bank".into()))
        );
    }

    #[test]
    fn entries_default_to_zero_for_every_segment() {
        let entries = SegmentEntries::new();
        assert_eq!(entries.iter().count(), SEGMENT_COUNT);
        assert!(entries.iter().all(|(_, amount)| amount == Money::zero()));
    }

    #[test]
    fn replace_returns_previous_amount() {
        let mut entries = SegmentEntries::new();
        let tv = Segment::position("TV").unwrap();

        assert_eq!(entries.replace(tv, Money::from_units(5)), Money::zero());
        assert_eq!(entries.replace(tv, Money::from_units(7)), Money::from_units(5));
        assert_eq!(entries.get("TV"), Ok(Money::from_units(7)));
    }
}
