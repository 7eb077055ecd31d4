use crate::utils::*;
use insta::assert_json_snapshot;
use road_registry::common::token_layout::TOKEN_LAYOUT_SIZE;
use road_registry::registry::{RegistryError, TokenListProvider};
use solana_sdk::commitment_config::CommitmentConfig;

#[tokio::test]
async fn test_get_token_list() {
    let provider = setup(vec![
        build_record([1u8; 32], 1, CID_A),
        build_record([2u8; 32], 0, CID_B),
    ]);

    let token_list = provider.get_token_list().await.unwrap();

    assert_json_snapshot!(token_list, @r###"
    [
      {
        "mintAccount": "4vJ9JU1bJJE96FWSJKvHsmmFADCg4gpZQff4P3bkLKi",
        "approved": true,
        "cid": "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG"
      },
      {
        "mintAccount": "8qbHbw2BbbTHBW1sbeqakYXVKRQM8Ne7pLK7m6CVfeR",
        "approved": false,
        "cid": "QmT78zSuBmuS4z925WZfrqQ1qHaJ56DQaTfyMUF7F8ff5o"
      }
    ]
    "###);
}

#[tokio::test]
async fn test_fetch_uses_size_filter_and_commitment() {
    let provider = setup(vec![]);
    provider.get_token_list().await.unwrap();

    let requests = provider.fetcher().requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (program_id, filter) = requests[0];
    assert_eq!(program_id, provider.config().program_id);
    assert_eq!(filter.data_size, TOKEN_LAYOUT_SIZE as u64);
    assert_eq!(filter.commitment, CommitmentConfig::confirmed());
}

#[tokio::test]
async fn test_get_token_links_preserves_order() {
    let provider = setup(vec![
        build_record([3u8; 32], 1, CID_B),
        build_record([4u8; 32], 1, CID_A),
        build_record([5u8; 32], 0, CID_B),
    ]);

    let links = provider.get_token_links().await.unwrap();

    assert_eq!(
        links,
        vec![
            format!("https://example/ipfs/{}", CID_B),
            format!("https://example/ipfs/{}", CID_A),
            format!("https://example/ipfs/{}", CID_B),
        ]
    );
}

#[tokio::test]
async fn test_empty_registry() {
    let provider = setup(vec![]);
    assert!(provider.get_token_list().await.unwrap().is_empty());
    assert!(provider.get_token_links().await.unwrap().is_empty());
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[tokio::test]
async fn test_malformed_record_fails_batch(#[case] bad_index: usize) {
    let mut records = vec![
        build_record([1u8; 32], 1, CID_A),
        build_record([2u8; 32], 1, CID_B),
        build_record([3u8; 32], 1, CID_A),
    ];
    records[bad_index].data.extend_from_slice(&[0u8; 8]);
    let bad_pubkey = records[bad_index].pubkey;
    let provider = setup(records);

    let err = provider.get_token_list().await.unwrap_err();

    assert_eq!(err.record_index(), Some(bad_index));
    match err {
        RegistryError::Record { pubkey, source, .. } => {
            assert_eq!(pubkey, bad_pubkey);
            assert_eq!(
                *source,
                RegistryError::MalformedRecord {
                    expected: TOKEN_LAYOUT_SIZE,
                    actual: TOKEN_LAYOUT_SIZE + 8,
                }
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(provider.get_token_links().await.is_err());
}

#[tokio::test]
async fn test_fetch_error_propagates() {
    run_one_time_setup();
    let provider =
        TokenListProvider::new(MockFetcher::failing("connection refused"), test_config());

    let err = provider.get_token_list().await.unwrap_err();

    assert_eq!(
        err,
        RegistryError::FetchError("connection refused".to_string())
    );
}

#[test]
fn test_format_token_data() {
    let provider = setup(vec![]);
    let record = build_record([1u8; 32], 255, CID_A);

    let metadata = provider.format_token_data(&record).unwrap();

    assert!(metadata.approved);
    assert_eq!(metadata.cid, CID_A);
    assert_eq!(metadata.mint_account.to_bytes(), [1u8; 32]);
}
