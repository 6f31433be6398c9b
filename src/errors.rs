pub use crate::client::blockchain_info::BlockchainInfoClientError;
pub use crate::client::FetchError;
pub use crate::config::ConfigError;
pub use crate::model::AddressError;
