//! Shared data model.

use serde::{Deserialize, Serialize};

/// One video card scraped from the catalog listing.
///
/// Fields the markup does not provide come back as empty strings rather than
/// options; API consumers render them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Numeric site ID, the digits from the card's video link.
    pub id: String,
    /// Short release code shown on the card, e.g. `MR-048`.
    pub code: String,
    pub title: String,
    pub thumbnail: String,
    /// Display duration like `12:34`.
    pub duration: String,
    /// Quality badge like `HD`.
    pub quality: String,
}
