use crate::model::{AddressError, WalletAddress, WalletSummary};
use chrono::TimeZone;
use rawaddr::rawaddr::Address;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

pub mod blockchain_info;

/// The public interface for the client API.
///
/// Exists as a trait so that unit tests can mock the client responses.
pub trait ClientApi {
    /// Get the raw ledger of a wallet address with a single request.
    fn get_address(&self, address: &WalletAddress) -> Result<Address, FetchError>;
}

/// Failure of a single lookup. None of these are retried.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum FetchError {
    #[error("Invalid wallet address")]
    Input(#[from] AddressError),

    #[error("Unable to build request: {0}")]
    Request(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Server responded with HTTP {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

/// Validate the address and fetch its raw ledger.
///
/// Invalid input is rejected before the client is called.
pub fn fetch<C>(client: &C, address: &str) -> Result<Address, FetchError>
where
    C: ClientApi + ?Sized,
{
    let address = address.parse::<WalletAddress>().inspect_err(|err| {
        warn!("Rejected wallet address: {err}");
    })?;

    client.get_address(&address)
}

/// Fetch and summarize a wallet address, formatting timestamps in the local time zone.
pub fn lookup<C>(client: &C, address: &str) -> Result<WalletSummary, FetchError>
where
    C: ClientApi + ?Sized,
{
    let raw = fetch(client, address)?;
    debug!("Summarizing {} transactions", raw.txs.len());

    Ok(WalletSummary::from_raw(raw))
}

/// Fetch and summarize a wallet address, formatting timestamps in the given time zone.
pub fn lookup_in<C, Tz>(client: &C, address: &str, tz: &Tz) -> Result<WalletSummary, FetchError>
where
    C: ClientApi + ?Sized,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let raw = fetch(client, address)?;
    debug!("Summarizing {} transactions", raw.txs.len());

    Ok(WalletSummary::from_raw_in(raw, tz))
}
