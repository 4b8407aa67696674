use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Canonical supplier identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierId {
    Acme,
    Patagonia,
    Paperflies,
}

impl SupplierId {
    /// All suppliers in the fixed ingestion order.
    ///
    /// Merge ties are broken by arrival order, so this order is part of the
    /// observable contract, not an implementation detail.
    pub const ALL: [Self; 3] = [Self::Acme, Self::Patagonia, Self::Paperflies];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Acme => "acme",
            Self::Patagonia => "patagonia",
            Self::Paperflies => "paperflies",
        }
    }
}

impl Display for SupplierId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
