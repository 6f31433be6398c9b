//! A client for the `rawaddr` address lookup API, [sans I/O]. (Bring your own sync/async HTTP
//! client!)
//!
//! This library handles the protocol-layer aspects of the `rawaddr` endpoint exposed by public
//! blockchain explorers such as `blockchain.info`, including ser-de and request building.
//!
//! [sans I/O]: https://sans-io.readthedocs.io/how-to-sans-io.html
//!
//! # Sync example with `ureq`
//!
//! ```no_run
//! use rawaddr::rawaddr::{Address, RawAddr};
//!
//! fn main() -> anyhow::Result<()> {
//!     let agent = ureq::agent();
//!     let rawaddr = RawAddr::new("https://blockchain.info")?;
//!
//!     let mut resp = agent.run(rawaddr.get_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa")?)?;
//!
//!     let address: Address = resp.body_mut().read_json()?;
//!
//!     println!("{address:#?}");
//!
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

pub use chrono;
pub use http;

use thiserror::Error;

pub mod rawaddr;

pub type Req = http::Request<()>;

/// Request building errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The request or one of its URI components is invalid.
    #[error("Invalid request")]
    Http(#[from] http::Error),

    /// The API server URI is missing a scheme or host component.
    #[error("API server URI must have a scheme and host: `{0}`")]
    NotAbsolute(http::Uri),
}

/// Append a path to the request.
pub(crate) fn append_path(req: &mut Req, path: String) -> Result<(), Error> {
    // The `http` crate has really bad ergonomics for updating paths.
    // SEE: https://github.com/hyperium/http/issues/594
    let req_uri = req.uri_mut();
    let mut uri_parts = req_uri.clone().into_parts();
    let root = req_uri.path().trim_end_matches('/');
    uri_parts.path_and_query = Some(
        format!("{root}/{path}")
            .parse()
            .map_err(http::Error::from)?,
    );
    *req_uri = http::Uri::from_parts(uri_parts).map_err(http::Error::from)?;

    Ok(())
}
