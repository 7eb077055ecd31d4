use super::resolver::TokenMetadata;

/// Gateway URL for the metadata's content identifier. No reachability or emptiness checks.
pub fn build_gateway_link(gateway_base: &str, metadata: &TokenMetadata) -> String {
    gateway_link_for_cid(gateway_base, &metadata.cid)
}

pub fn gateway_link_for_cid(gateway_base: &str, cid: &str) -> String {
    format!("{}/{}", gateway_base, cid)
}
