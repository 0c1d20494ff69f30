// ── Search criteria ──

use serde::{Deserialize, Serialize};

/// Transient, non-persisted filter values applied to the listing
/// collection. A field is "supplied" only when it is present and not
/// blank; criteria with no supplied field match every listing.
///
/// The star-rating field stays free text on purpose: the search form
/// submits it as a string and the match is a loose numeric comparison
/// (see `search::matches`), which is visible product behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub star_rating: Option<String>,
}

impl SearchCriteria {
    /// Treat blank / whitespace-only values as not supplied.
    pub(crate) fn supplied(field: Option<&String>) -> Option<&str> {
        field.map(String::as_str).filter(|s| !s.trim().is_empty())
    }

    pub fn name(&self) -> Option<&str> {
        Self::supplied(self.name.as_ref())
    }

    pub fn city(&self) -> Option<&str> {
        Self::supplied(self.city.as_ref())
    }

    pub fn country(&self) -> Option<&str> {
        Self::supplied(self.country.as_ref())
    }

    pub fn star_rating(&self) -> Option<&str> {
        Self::supplied(self.star_rating.as_ref())
    }

    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name().is_none()
            && self.city().is_none()
            && self.country().is_none()
            && self.star_rating().is_none()
    }
}
