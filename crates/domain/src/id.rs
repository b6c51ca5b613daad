//! Synthesized loan identifier.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Identifier attached to every outbound payload.
///
/// The upstream schema requires a key column, so one is generated per
/// request, sent, and discarded. Collision resistance comes from the random
/// suffix alone; nothing stores or checks these ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanId(String);

impl LoanId {
    /// Generate a fresh id: `AUTO-<YYYYMMDDHHMMSS>-<hex8>` (UTC, second
    /// precision, 8 random lowercase hex chars).
    pub fn generate() -> Self {
        Self::at(Utc::now())
    }

    fn at(now: DateTime<Utc>) -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!("AUTO-{}-{}", now.format("%Y%m%d%H%M%S"), &suffix[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for LoanId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<LoanId> for String {
    fn from(id: LoanId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn generated_id_matches_the_expected_shape() {
        let id = LoanId::generate();
        let parts: Vec<&str> = id.as_str().split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "AUTO");
        assert_eq!(parts[1].len(), 14);
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 8);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn timestamp_is_utc_with_second_precision() {
        let now = Utc.with_ymd_and_hms(2024, 2, 29, 12, 34, 56).unwrap();
        let id = LoanId::at(now);
        assert!(id.as_str().starts_with("AUTO-20240229123456-"));
    }

    #[test]
    fn consecutive_ids_differ() {
        assert_ne!(LoanId::generate(), LoanId::generate());
    }
}
