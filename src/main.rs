use anyhow::Context;
use clap::Parser;
use log::info;
use road_registry::common::typedefs::rpc_client_with_uri::RpcClientWithUri;
use road_registry::common::{setup_logging, LoggingFormat};
use road_registry::registry::config::{
    DEFAULT_COMMITMENT, DEFAULT_IPFS_GATEWAY, DEFAULT_PROGRAM_ID, DEFAULT_RPC_URL,
};
use road_registry::registry::{RegistryConfig, TokenListProvider};

/// ROAD registry: resolves token metadata entries stored by the registry program
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// URL of the RPC server
    #[arg(short, long, default_value = DEFAULT_RPC_URL)]
    rpc_url: String,

    /// Registry program whose accounts are scanned
    #[arg(short, long, default_value = DEFAULT_PROGRAM_ID)]
    program_id: String,

    /// IPFS gateway base used to build links
    #[arg(short, long, default_value = DEFAULT_IPFS_GATEWAY)]
    gateway: String,

    /// Commitment level for the account fetch (processed, confirmed, finalized)
    #[arg(short, long, default_value = DEFAULT_COMMITMENT)]
    commitment: String,

    /// Logging format
    #[arg(short, long, default_value_t = LoggingFormat::Standard)]
    logging_format: LoggingFormat,

    /// Print one gateway link per line instead of the metadata list
    #[arg(long, action = clap::ArgAction::SetTrue)]
    links: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.logging_format);

    let config =
        RegistryConfig::from_parts(args.rpc_url, &args.program_id, args.gateway, &args.commitment)
            .context("Invalid registry configuration")?;
    let rpc_client = RpcClientWithUri::new(config.rpc_url.clone(), config.commitment);
    let provider = TokenListProvider::new(rpc_client, config);

    info!(
        "Resolving registry entries for program {}",
        provider.config().program_id
    );
    if args.links {
        let links = provider
            .get_token_links()
            .await
            .context("Failed to resolve token links")?;
        for link in links {
            println!("{}", link);
        }
    } else {
        let token_list = provider
            .get_token_list()
            .await
            .context("Failed to resolve token list")?;
        println!("{}", serde_json::to_string_pretty(&token_list)?);
    }
    Ok(())
}
