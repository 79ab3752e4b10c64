//! Defines the accounts a payment can be funded from.

use serde::Deserialize;
use serde::Serialize;

/// The currency account a payment is drawn from.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum SourceAccount {
    BTC, // Bitcoin
    ETH, // Ether
}

impl SourceAccount {
    /// Returns the ticker code (e.g., "BTC"). Also the value sent on the wire.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BTC => "Bitcoin",
            Self::ETH => "Ether",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(SourceAccount::from_str("btc"), Ok(SourceAccount::BTC));
        assert_eq!(SourceAccount::from_str("ETH"), Ok(SourceAccount::ETH));
        assert!(SourceAccount::from_str("DOGE").is_err());
    }

    #[test]
    fn offers_exactly_two_accounts() {
        let codes: Vec<_> = SourceAccount::iter().map(|a| a.code()).collect();
        assert_eq!(codes, vec!["BTC", "ETH"]);
    }
}
