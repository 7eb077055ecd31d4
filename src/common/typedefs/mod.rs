pub mod rpc_client_with_uri;
pub mod serializable_pubkey;
