// ── Core identity type ──
//
// The booking service issues opaque ObjectId-style strings for both
// hotels and bookings. EntityId wraps them so ids never get mixed up
// with other string data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque identifier for any booking-service entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short prefix for display (booking reference style). The cut
    /// lands on a character boundary, since ids are opaque backend
    /// strings that need not be ASCII.
    pub fn short(&self) -> &str {
        self.0
            .char_indices()
            .nth(8)
            .map_or(self.0.as_str(), |(idx, _)| &self.0[..idx])
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_roundtrips_display() {
        let id = EntityId::from("507f1f77bcf86cd799439011");
        assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn entity_id_from_str() {
        let id: EntityId = "b-001".parse().unwrap();
        assert_eq!(id.as_str(), "b-001");
    }

    #[test]
    fn short_truncates_long_ids() {
        let id = EntityId::from("507f1f77bcf86cd799439011");
        assert_eq!(id.short(), "507f1f77");
    }

    #[test]
    fn short_keeps_short_ids_whole() {
        let id = EntityId::from("b-1");
        assert_eq!(id.short(), "b-1");
    }

    #[test]
    fn short_respects_char_boundaries() {
        // Eight bytes into "€€€€" falls inside the third character.
        let id = EntityId::from("€€€€");
        assert_eq!(id.short(), "€€€€");

        let long = EntityId::from("é".repeat(12));
        assert_eq!(long.short(), "é".repeat(8));
    }
}
