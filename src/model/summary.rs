use crate::model::amount::{format_currency, BitcoinAmount};
use crate::model::time::format_time_in;
use chrono::{Local, TimeZone};
use rawaddr::rawaddr::{Address, Transaction};
use serde::Serialize;
use std::fmt;

/// Display-ready summary of a wallet address.
///
/// Built once per successful lookup and never mutated.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct WalletSummary {
    pub transaction_count: u64,
    pub current_balance: String,
    pub total_received: String,
    pub total_sent: String,

    /// One record per raw transaction, in the order the server returned them.
    pub transactions: Vec<TransactionRecord>,
}

/// Display-ready view of a single transaction.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TransactionRecord {
    pub hash: String,
    pub time: String,

    /// Magnitude of the balance change. See `direction` for the sign.
    pub amount: String,
    pub direction: Direction,
    pub confirmations: u64,
    pub block_height: BlockHeight,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Received,
    Sent,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockHeight {
    Mined(u64),

    /// Not yet included in a block.
    Pending,
}

impl WalletSummary {
    /// Summarize a raw address ledger, formatting timestamps in the local time zone.
    pub fn from_raw(raw: Address) -> Self {
        Self::from_raw_in(raw, &Local)
    }

    /// Summarize a raw address ledger, formatting timestamps in the given time zone.
    pub fn from_raw_in<Tz>(raw: Address, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let transactions = raw
            .txs
            .into_iter()
            .map(|tx| TransactionRecord::from_raw_in(tx, tz))
            .collect();

        Self {
            transaction_count: raw.n_tx,
            current_balance: format_currency(raw.final_balance),
            total_received: format_currency(raw.total_received),
            total_sent: format_currency(raw.total_sent),
            transactions,
        }
    }
}

impl TransactionRecord {
    pub fn from_raw_in<Tz>(tx: Transaction, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self {
            time: format_time_in(tx.time, tz),
            amount: BitcoinAmount::from_sats_abs(tx.result).to_string(),
            direction: Direction::from_result(tx.result),
            confirmations: tx.confirmations.unwrap_or_default(),
            block_height: tx
                .block_height
                .map_or(BlockHeight::Pending, BlockHeight::Mined),
            hash: tx.hash,
        }
    }

    /// The first 8 characters of the hash, for headings.
    pub fn short_hash(&self) -> &str {
        self.hash
            .char_indices()
            .nth(8)
            .map_or(self.hash.as_str(), |(i, _)| &self.hash[..i])
    }
}

impl Direction {
    /// A positive net result credits the address; zero or negative debits it.
    pub fn from_result(result: i64) -> Self {
        if result > 0 {
            Self::Received
        } else {
            Self::Sent
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Received => write!(f, "received"),
            Self::Sent => write!(f, "sent"),
        }
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mined(height) => write!(f, "{height}"),
            Self::Pending => write!(f, "pending"),
        }
    }
}
