use std::str::FromStr;

use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

use super::error::RegistryError;

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
pub const DEFAULT_PROGRAM_ID: &str = "J7EQ8XVBcaKb1E4GgwnXiMnfGmuS97PiWXb4G4qoLNZw";
pub const DEFAULT_IPFS_GATEWAY: &str = "https://cloudflare-ipfs.com/ipfs";
pub const DEFAULT_COMMITMENT: &str = "confirmed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub rpc_url: String,
    /// Registry program whose accounts are scanned
    pub program_id: Pubkey,
    /// Gateway base without a trailing slash
    pub gateway_base: String,
    pub commitment: CommitmentConfig,
}

impl RegistryConfig {
    pub fn from_parts(
        rpc_url: String,
        program_id: &str,
        gateway_base: String,
        commitment: &str,
    ) -> Result<Self, RegistryError> {
        let program_id = Pubkey::from_str(program_id).map_err(|e| {
            RegistryError::InvalidConfig(format!("program id '{}': {}", program_id, e))
        })?;
        let commitment = CommitmentConfig::from_str(commitment).map_err(|e| {
            RegistryError::InvalidConfig(format!("commitment '{}': {}", commitment, e))
        })?;
        Ok(Self {
            rpc_url,
            program_id,
            gateway_base,
            commitment,
        })
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            program_id: Pubkey::from_str(DEFAULT_PROGRAM_ID).unwrap_or_default(),
            gateway_base: DEFAULT_IPFS_GATEWAY.to_string(),
            commitment: CommitmentConfig::confirmed(),
        }
    }
}
