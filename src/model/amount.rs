use rust_decimal::Decimal;
use std::fmt;

/// Number of fractional digits in one BTC, i.e. satoshis are `10^-8` BTC.
pub(crate) const BITCOIN_DIGITS: u32 = 8;

/// Unit label appended to every formatted amount.
pub(crate) const BITCOIN_UNIT: &str = "BTC";

/// A non-negative Bitcoin amount with exact satoshi precision.
#[derive(Copy, Clone, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct BitcoinAmount(Decimal);

impl BitcoinAmount {
    /// Create an amount from a count of satoshis.
    pub fn from_sats(sats: u64) -> Self {
        Self(Decimal::from_i128_with_scale(sats.into(), BITCOIN_DIGITS))
    }

    /// Create an amount from the magnitude of a signed satoshi delta.
    pub fn from_sats_abs(sats: i64) -> Self {
        Self::from_sats(sats.unsigned_abs())
    }
}

impl fmt::Display for BitcoinAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = BITCOIN_DIGITS as usize;

        write!(f, "{amount:.precision$} {BITCOIN_UNIT}", amount = self.0)
    }
}

/// Format a satoshi amount as BTC with exactly 8 fractional digits, e.g. `0.00150000 BTC`.
pub fn format_currency(sats: u64) -> String {
    BitcoinAmount::from_sats(sats).to_string()
}
