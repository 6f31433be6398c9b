use super::{ClientApi, FetchError};
use crate::{config::Config, model::WalletAddress};
use rawaddr::rawaddr::{Address, RawAddr};
use std::time::Instant;
use thiserror::Error;
use tracing::{info, trace, warn};
use ureq::tls::{TlsConfig, TlsProvider};
use ureq::{http::StatusCode, Agent};

/// Longest part of an error response body that is kept for the error message.
const MAX_ERROR_MESSAGE_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum BlockchainInfoClientError {
    #[error("Invalid rawaddr API URI")]
    Uri(#[from] rawaddr::Error),
}

/// A blocking client for the `rawaddr` API of `blockchain.info` and compatible explorers.
///
/// Every lookup is exactly one request. Nothing is cached or retried.
pub struct BlockchainInfoClient {
    agent: Agent,
    rawaddr: RawAddr,
    max_body_size: u64,
}

impl BlockchainInfoClient {
    /// Create a new client from the API server URI and request timeout in `config`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn main() -> Result<(), addrscan::client::blockchain_info::BlockchainInfoClientError> {
    /// # use addrscan::{client::blockchain_info::BlockchainInfoClient, config::Config};
    /// let client = BlockchainInfoClient::new(&Config::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: &Config) -> Result<Self, BlockchainInfoClientError> {
        let agent = Agent::from(
            Agent::config_builder()
                // Error statuses are inspected here to keep the server's message.
                .http_status_as_error(false)
                .timeout_global(Some(config.timeout))
                .tls_config(
                    TlsConfig::builder()
                        .provider(TlsProvider::NativeTls)
                        .build(),
                )
                .build(),
        );
        let rawaddr = RawAddr::new(config.api_url.as_str())?;

        Ok(Self {
            agent,
            rawaddr,
            max_body_size: config.max_body_size,
        })
    }
}

impl ClientApi for BlockchainInfoClient {
    fn get_address(&self, address: &WalletAddress) -> Result<Address, FetchError> {
        info!("Fetching address `{address}` from {}", self.rawaddr.uri());

        let start = Instant::now();
        let req = self
            .rawaddr
            .get_address(address.as_str())
            .map_err(request_error)?;
        let mut resp = self.agent.run(req).map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.body_mut().read_to_string().unwrap_or_default();
            warn!("Address `{address}` rejected with HTTP {status}");

            return Err(FetchError::Remote {
                status: status.as_u16(),
                message: remote_message(status, &body),
            });
        }

        let body = resp
            .body_mut()
            .with_config()
            .limit(self.max_body_size)
            .read_to_string()
            .map_err(body_error)?;
        let raw: Address =
            serde_json::from_str(&body).map_err(|err| FetchError::Decode(err.to_string()))?;
        let dur = start.elapsed();

        info!("Address `{address}` received in {dur:?}");
        trace!("{raw:#?}");

        Ok(raw)
    }
}

fn transport_error(err: ureq::Error) -> FetchError {
    FetchError::Transport(err.to_string())
}

/// A body past the size limit arrived intact but cannot be decoded here.
fn body_error(err: ureq::Error) -> FetchError {
    match err {
        ureq::Error::BodyExceedsLimit(limit) => {
            FetchError::Decode(format!("response body is larger than {limit} bytes"))
        }
        err => transport_error(err),
    }
}

/// Unreachable with a validated [`WalletAddress`] and an API URI checked by [`RawAddr::new`].
fn request_error(err: rawaddr::Error) -> FetchError {
    FetchError::Request(err.to_string())
}

/// The first line of the response body, or the canonical reason phrase if the body is empty.
fn remote_message(status: StatusCode, body: &str) -> String {
    let line = body.trim().lines().next().unwrap_or_default().trim();
    if line.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("Unknown status")
            .to_string();
    }

    line.chars().take(MAX_ERROR_MESSAGE_CHARS).collect()
}
