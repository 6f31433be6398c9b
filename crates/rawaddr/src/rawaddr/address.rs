//! Wallet address ledgers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ledger summary and transaction history for a single wallet address.
///
/// All amounts are denominated in satoshis.
#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
pub struct Address {
    /// The address as echoed by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Total number of transactions involving this address.
    pub n_tx: u64,

    /// Current balance.
    pub final_balance: u64,

    /// Sum of all amounts ever received.
    pub total_received: u64,

    /// Sum of all amounts ever sent.
    pub total_sent: u64,

    /// Transactions in server order, typically newest first.
    pub txs: Vec<Transaction>,
}

/// A transaction as seen from the perspective of one address.
#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
pub struct Transaction {
    /// Transaction hash.
    pub hash: String,

    /// Time the transaction was first seen by the server.
    #[serde(deserialize_with = "from_timestamp", serialize_with = "to_timestamp")]
    pub time: DateTime<Utc>,

    /// Net effect on the address balance. Positive when received, negative when sent.
    pub result: i64,

    /// Number of blocks mined on top of the transaction's block.
    #[serde(default)]
    pub confirmations: Option<u64>,

    /// Height of the block containing the transaction.
    ///
    /// `None` when the transaction has not been mined yet.
    #[serde(default)]
    pub block_height: Option<u64>,
}

/// Earliest accepted transaction time, `0001-01-02T00:00:00Z`.
///
/// Together with [`MAX_TIMESTAMP`] this keeps a day of margin inside years `1..=9999`, so the
/// time renders with a four digit year in every time zone.
pub const MIN_TIMESTAMP: i64 = -62_135_510_400;

/// Latest accepted transaction time, `9999-12-30T23:59:59Z`.
pub const MAX_TIMESTAMP: i64 = 253_402_214_399;

fn from_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_i64(TimestampVisitor)
}

fn to_timestamp<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_i64(value.timestamp())
}

struct TimestampVisitor;

impl serde::de::Visitor<'_> for TimestampVisitor {
    type Value = DateTime<Utc>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a Unix timestamp in seconds")
    }

    fn visit_i64<E>(self, value: i64) -> Result<DateTime<Utc>, E>
    where
        E: serde::de::Error,
    {
        (MIN_TIMESTAMP..=MAX_TIMESTAMP)
            .contains(&value)
            .then(|| DateTime::from_timestamp(value, 0))
            .flatten()
            .ok_or_else(|| {
                E::invalid_value(
                    serde::de::Unexpected::Signed(value),
                    &"a timestamp within years 1 to 9999",
                )
            })
    }

    fn visit_u64<E>(self, value: u64) -> Result<DateTime<Utc>, E>
    where
        E: serde::de::Error,
    {
        let value = i64::try_from(value).map_err(|_| {
            E::invalid_value(
                serde::de::Unexpected::Unsigned(value),
                &"a timestamp within years 1 to 9999",
            )
        })?;

        self.visit_i64(value)
    }
}
