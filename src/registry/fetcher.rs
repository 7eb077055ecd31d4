use async_trait::async_trait;
use log::info;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_client::rpc_filter::RpcFilterType;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

use super::error::RegistryError;
use crate::common::token_layout::TOKEN_LAYOUT_SIZE;
use crate::common::typedefs::rpc_client_with_uri::RpcClientWithUri;
use crate::common::typedefs::serializable_pubkey::SerializablePubkey;

/// Account data as returned by the ledger, before any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAccountRecord {
    pub pubkey: SerializablePubkey,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountFilter {
    pub data_size: u64,
    pub commitment: CommitmentConfig,
}

impl AccountFilter {
    pub fn token_layout(commitment: CommitmentConfig) -> Self {
        AccountFilter {
            data_size: TOKEN_LAYOUT_SIZE as u64,
            commitment,
        }
    }
}

#[async_trait]
pub trait AccountFetcher: Send + Sync {
    /// All accounts owned by `program_id` that match `filter`, in ledger result order.
    async fn fetch_accounts(
        &self,
        program_id: &Pubkey,
        filter: &AccountFilter,
    ) -> Result<Vec<RawAccountRecord>, RegistryError>;
}

#[async_trait]
impl AccountFetcher for RpcClientWithUri {
    async fn fetch_accounts(
        &self,
        program_id: &Pubkey,
        filter: &AccountFilter,
    ) -> Result<Vec<RawAccountRecord>, RegistryError> {
        info!("Fetching accounts for program {} from {}", program_id, self.uri);
        let config = RpcProgramAccountsConfig {
            filters: Some(vec![RpcFilterType::DataSize(filter.data_size)]),
            account_config: RpcAccountInfoConfig {
                commitment: Some(filter.commitment),
                ..RpcAccountInfoConfig::default()
            },
            ..RpcProgramAccountsConfig::default()
        };
        let accounts = self
            .client
            .get_program_accounts_with_config(program_id, config)
            .await
            .map_err(|e| {
                RegistryError::FetchError(format!(
                    "Failed to fetch program accounts from {}: {}",
                    self.uri, e
                ))
            })?;
        info!("Found {} accounts", accounts.len());

        Ok(accounts
            .into_iter()
            .map(|(pubkey, account)| RawAccountRecord {
                pubkey: pubkey.into(),
                data: account.data,
            })
            .collect())
    }
}
