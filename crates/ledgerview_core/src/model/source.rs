use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Statement format a transaction was imported from.
///
/// The set is closed: the backend only accepts uploads for these sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementSource {
    AppleCard,
    BoaCredit,
}

impl StatementSource {
    pub const ALL: [StatementSource; 2] = [StatementSource::AppleCard, StatementSource::BoaCredit];

    /// Wire name, as used in the backend's `source` column
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementSource::AppleCard => "apple_card",
            StatementSource::BoaCredit => "boa_credit",
        }
    }
}

impl fmt::Display for StatementSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown statement source: {0}")]
pub struct UnknownSource(pub String);

impl FromStr for StatementSource {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatementSource::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| UnknownSource(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_names() {
        assert_eq!(
            "apple_card".parse::<StatementSource>(),
            Ok(StatementSource::AppleCard)
        );
        assert_eq!(
            "boa_credit".parse::<StatementSource>(),
            Ok(StatementSource::BoaCredit)
        );
        assert!("chase".parse::<StatementSource>().is_err());
        // Wire names are exact
        assert!("Apple_Card".parse::<StatementSource>().is_err());
    }

    #[test]
    fn test_display_matches_wire_name() {
        for source in StatementSource::ALL {
            assert_eq!(source.to_string().parse::<StatementSource>(), Ok(source));
        }
    }
}
