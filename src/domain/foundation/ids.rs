//! Strongly-typed identifier value objects.
//!
//! Reference datasets key every entity by a numeric surrogate identifier.
//! Wrapping them keeps a member id from being passed where a survey id is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a panel member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(i64);

impl MemberId {
    /// Creates a MemberId from its raw value.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MemberId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Identifier of a survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyId(i64);

impl SurveyId {
    /// Creates a SurveyId from its raw value.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for SurveyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SurveyId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Opaque identifier of a participation status.
///
/// Never interpreted directly; resolve a [`StatusKind`](super::StatusKind)
/// to find the identifier of a well-known status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusId(i64);

impl StatusId {
    /// Creates a StatusId from its raw value.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for StatusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_id_parses_from_path_segment() {
        let id: MemberId = "42".parse().unwrap();
        assert_eq!(id, MemberId::new(42));
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn survey_id_rejects_non_numeric_input() {
        assert!("abc".parse::<SurveyId>().is_err());
        assert!("".parse::<SurveyId>().is_err());
    }

    #[test]
    fn ids_display_raw_value() {
        assert_eq!(MemberId::new(7).to_string(), "7");
        assert_eq!(SurveyId::new(-3).to_string(), "-3");
        assert_eq!(StatusId::new(1).to_string(), "1");
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&SurveyId::new(12)).unwrap();
        assert_eq!(json, "12");

        let id: MemberId = serde_json::from_str("99").unwrap();
        assert_eq!(id, MemberId::new(99));
    }

    #[test]
    fn ids_order_numerically() {
        let mut ids = vec![MemberId::new(10), MemberId::new(2), MemberId::new(5)];
        ids.sort();
        assert_eq!(ids, vec![MemberId::new(2), MemberId::new(5), MemberId::new(10)]);
    }
}
