//! An implementation of the `rawaddr` protocol. The main type is the [`RawAddr`] client.

pub use self::address::{Address, Transaction, MAX_TIMESTAMP, MIN_TIMESTAMP};
use crate::{append_path, Error, Req};
use http::{Request, Uri};

mod address;

/// The main `rawaddr` client.
#[derive(Clone, Debug)]
pub struct RawAddr {
    req: Req,
}

impl RawAddr {
    /// `rawaddr` client constructor.
    ///
    /// The API endpoint string must be a valid [`Uri`] with both a scheme and host component.
    /// Relative URIs like `/hello/world` and non-network URIs like `data:` are rejected.
    ///
    /// # Example
    ///
    /// ```
    /// # use rawaddr::rawaddr::RawAddr;
    /// # fn main() -> anyhow::Result<()> {
    /// let rawaddr = RawAddr::new("https://blockchain.info")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new<U>(api: U) -> Result<Self, Error>
    where
        U: TryInto<Uri>,
        <U as TryInto<Uri>>::Error: Into<http::Error>,
    {
        let req = Request::get(api).body(())?;
        if req.uri().scheme().is_none() || req.uri().host().is_none() {
            return Err(Error::NotAbsolute(req.uri().clone()));
        }

        Ok(Self { req })
    }

    /// Get the ledger summary and transaction history of a wallet address.
    ///
    /// Returns a [`Req`] which can be sent by your preferred HTTP client.
    ///
    /// The response can be deserialized from JSON into an [`Address`].
    pub fn get_address(&self, address: &str) -> Result<Req, Error> {
        let mut req = self.req.clone();
        append_path(&mut req, format!("rawaddr/{address}"))?;

        Ok(req)
    }

    /// The API server URI this client builds requests against.
    pub fn uri(&self) -> &Uri {
        self.req.uri()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_address() {
        let client = RawAddr::new("https://blockchain.info").unwrap();
        let req = client
            .get_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa")
            .unwrap();
        let uri = req.uri();

        assert_eq!(req.method(), http::Method::GET);
        assert_eq!(uri.scheme_str(), Some("https"));
        assert_eq!(uri.host(), Some("blockchain.info"));
        assert_eq!(uri.path(), "/rawaddr/1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa");
        assert!(uri.query().is_none());
    }

    #[test]
    fn test_nested_path() {
        let client = RawAddr::new("https://explorer.example.com/btc/api/").unwrap();
        let req = client
            .get_address("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq")
            .unwrap();
        let uri = req.uri();

        assert_eq!(uri.host(), Some("explorer.example.com"));
        assert_eq!(
            uri.path(),
            "/btc/api/rawaddr/bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq"
        );
    }

    #[test]
    fn test_port() {
        let client = RawAddr::new("http://localhost:3001").unwrap();
        let req = client.get_address("abc123").unwrap();
        let uri = req.uri();

        assert_eq!(uri.scheme_str(), Some("http"));
        assert_eq!(uri.host(), Some("localhost"));
        assert_eq!(uri.port_u16(), Some(3001));
        assert_eq!(uri.path(), "/rawaddr/abc123");
    }

    #[test]
    fn test_invalid_address_path() {
        let client = RawAddr::new("https://blockchain.info").unwrap();

        assert!(client.get_address("has space").is_err());
    }

    #[test]
    fn test_relative_uri() {
        assert!(matches!(
            RawAddr::new("/hello/world"),
            Err(Error::NotAbsolute(_))
        ));
        assert!(RawAddr::new("not a uri").is_err());
    }
}
