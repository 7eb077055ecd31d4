use log::info;

use super::config::RegistryConfig;
use super::error::RegistryError;
use super::fetcher::{AccountFetcher, AccountFilter, RawAccountRecord};
use super::link::build_gateway_link;
use super::resolver::{resolve_record, resolve_records, TokenMetadata};

/// Fetches the registry program's accounts and resolves them into token metadata and links.
pub struct TokenListProvider<F: AccountFetcher> {
    fetcher: F,
    config: RegistryConfig,
}

impl<F: AccountFetcher> TokenListProvider<F> {
    pub fn new(fetcher: F, config: RegistryConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn format_token_data(
        &self,
        record: &RawAccountRecord,
    ) -> Result<TokenMetadata, RegistryError> {
        resolve_record(record)
    }

    pub async fn get_token_list(&self) -> Result<Vec<TokenMetadata>, RegistryError> {
        let filter = AccountFilter::token_layout(self.config.commitment);
        let records = self
            .fetcher
            .fetch_accounts(&self.config.program_id, &filter)
            .await?;
        let token_list = resolve_records(&records)?;
        info!("Resolved {} registry entries", token_list.len());
        Ok(token_list)
    }

    pub async fn get_token_links(&self) -> Result<Vec<String>, RegistryError> {
        Ok(self
            .get_token_list()
            .await?
            .iter()
            .map(|metadata| build_gateway_link(&self.config.gateway_base, metadata))
            .collect())
    }
}
