//! Commodity catalog
//!
//! The fixed set of commodities a user can flag for analysis. The catalog is
//! compiled in and immutable for the lifetime of a session.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Commodity {
    /// Stable identifier used in selections
    pub id: &'static str,
    /// Display name
    pub label: &'static str,
}

/// All commodities, in declared (sidebar) order
pub const CATALOG: [Commodity; 6] = [
    Commodity {
        id: "steel",
        label: "Steel",
    },
    Commodity {
        id: "gold",
        label: "Gold",
    },
    Commodity {
        id: "iron-ore",
        label: "Iron ore",
    },
    Commodity {
        id: "coal",
        label: "Coal",
    },
    Commodity {
        id: "freight",
        label: "Freight",
    },
    Commodity {
        id: "fertilizers",
        label: "Fertilizers",
    },
];

/// Look up a commodity by id
pub fn find(id: &str) -> Option<&'static Commodity> {
    CATALOG.iter().find(|c| c.id == id)
}

/// Whether `id` names a catalog entry
pub fn contains(id: &str) -> bool {
    find(id).is_some()
}

/// Display label for an id, falling back to the raw id for unknown entries
pub fn label_for(id: &str) -> &str {
    find(id).map(|c| c.label).unwrap_or(id)
}

/// How `toggle` treats ids that are not in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogValidation {
    /// Accept any id into the selection
    #[default]
    Permissive,
    /// Reject ids that are not catalog entries
    Strict,
}

impl CatalogValidation {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogValidation::Permissive => "permissive",
            CatalogValidation::Strict => "strict",
        }
    }
}

impl fmt::Display for CatalogValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CatalogValidation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "permissive" => Ok(CatalogValidation::Permissive),
            "strict" => Ok(CatalogValidation::Strict),
            _ => Err(format!("Unknown catalog validation: {}", s)),
        }
    }
}
