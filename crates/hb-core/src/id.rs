//! Typed identifiers for catalog entries.
//!
//! Every catalog table is keyed by a small integer ID. The newtypes below
//! keep an item ID from being confused with a quest ID at compile time.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }
    };
}

define_id!(
    /// Identifier of an [`Item`](crate::Item) in the catalog.
    ItemId
);
define_id!(
    /// Identifier of a [`MonsterTemplate`](crate::MonsterTemplate) in the catalog.
    MonsterId
);
define_id!(
    /// Identifier of a [`Quest`](crate::Quest) in the catalog.
    QuestId
);
define_id!(
    /// Identifier of a [`Location`](crate::Location) in the catalog.
    LocationId
);
