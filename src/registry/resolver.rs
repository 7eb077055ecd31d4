use log::debug;
use serde::{Deserialize, Serialize};

use super::cid::reconstruct_cid;
use super::error::RegistryError;
use super::fetcher::RawAccountRecord;
use super::layout::TokenLayout;
use crate::common::typedefs::serializable_pubkey::SerializablePubkey;

/// Registry entry for a single token mint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    /// The token mint this entry describes
    pub mint_account: SerializablePubkey,
    /// Whether the registry authority approved the entry
    pub approved: bool,
    /// IPFS content identifier of the off-chain metadata
    pub cid: String,
}

impl From<TokenLayout> for TokenMetadata {
    fn from(layout: TokenLayout) -> Self {
        TokenMetadata {
            cid: reconstruct_cid(&layout.info1, &layout.info2),
            mint_account: layout.mint_account,
            approved: layout.approved,
        }
    }
}

pub fn resolve_record(record: &RawAccountRecord) -> Result<TokenMetadata, RegistryError> {
    TokenLayout::decode(&record.data).map(TokenMetadata::from)
}

/// Resolve a fetch result in order. The first malformed record fails the whole batch.
pub fn resolve_records(
    records: &[RawAccountRecord],
) -> Result<Vec<TokenMetadata>, RegistryError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            resolve_record(record).map_err(|e| {
                debug!(
                    "Failed to resolve record {} ({}): {}",
                    index, record.pubkey, e
                );
                RegistryError::Record {
                    index,
                    pubkey: record.pubkey,
                    source: Box::new(e),
                }
            })
        })
        .collect()
}
