pub mod cid;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod layout;
pub mod link;
pub mod provider;
pub mod resolver;

pub use config::RegistryConfig;
pub use error::RegistryError;
pub use fetcher::{AccountFetcher, AccountFilter, RawAccountRecord};
pub use layout::TokenLayout;
pub use provider::TokenListProvider;
pub use resolver::TokenMetadata;
