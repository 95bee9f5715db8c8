use crate::{common::money::Money, io::avatar::AvatarRef};

/// A command sent from the presentation layer (or the CSV reader) to the
/// processor. Amounts are passed through as given; handlers normalize them.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerCommand {
    SetEntry {
        consultant: String,
        segment: String,
        amount: Money,
    },
    SetConsultantTarget { consultant: String, target: Money },
    SetStoreTarget { target: Money },
    Select { consultant: String },
    Deselect,
    SetAvatar { consultant: String, avatar: AvatarRef },
}
