use std::time::Duration;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;

// Keeps the endpoint next to the client so fetch errors can name it.
pub struct RpcClientWithUri {
    pub client: RpcClient,
    pub uri: String,
}

impl RpcClientWithUri {
    pub fn new(uri: String, commitment: CommitmentConfig) -> Self {
        let client = RpcClient::new_with_timeout_and_commitment(
            uri.clone(),
            Duration::from_secs(10),
            commitment,
        );
        Self { client, uri }
    }
}
