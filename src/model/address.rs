use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Address input errors. These are raised before any network request is made.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum AddressError {
    #[error("Please enter a wallet address")]
    Empty,

    #[error("Wallet address contains an invalid character: {0:?}")]
    InvalidChar(char),
}

/// A wallet address as entered by the user.
///
/// Only the shape needed to build a request path is checked here: surrounding whitespace is
/// trimmed, and the address must be non-empty ASCII alphanumerics. Whether it is a real address is
/// up to the remote service.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for WalletAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let address = s.trim();
        if address.is_empty() {
            return Err(AddressError::Empty);
        }
        if let Some(ch) = address.chars().find(|ch| !ch.is_ascii_alphanumeric()) {
            return Err(AddressError::InvalidChar(ch));
        }

        Ok(Self(address.to_string()))
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WalletAddress> for String {
    fn from(value: WalletAddress) -> Self {
        value.0
    }
}

impl AsRef<str> for WalletAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        let address: WalletAddress = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".parse().unwrap();
        assert_eq!(address.as_str(), "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa");

        let address: WalletAddress = "  bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq\n"
            .parse()
            .unwrap();
        assert_eq!(address.to_string(), "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq");
    }

    #[test]
    fn test_empty_address() {
        assert_eq!("".parse::<WalletAddress>(), Err(AddressError::Empty));
        assert_eq!(" \t\n".parse::<WalletAddress>(), Err(AddressError::Empty));
    }

    #[test]
    fn test_invalid_char() {
        assert_eq!(
            "1A1z P1eP5".parse::<WalletAddress>(),
            Err(AddressError::InvalidChar(' '))
        );
        assert_eq!(
            "../rawaddr".parse::<WalletAddress>(),
            Err(AddressError::InvalidChar('.'))
        );
        assert_eq!(
            "abc?limit=1".parse::<WalletAddress>(),
            Err(AddressError::InvalidChar('?'))
        );
    }

    #[test]
    fn test_serde() {
        let address: WalletAddress = serde_json::from_str(r#""abc123""#).unwrap();
        assert_eq!(serde_json::to_string(&address).unwrap(), r#""abc123""#);

        assert!(serde_json::from_str::<WalletAddress>(r#""""#).is_err());
    }
}
