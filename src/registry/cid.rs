use crate::common::token_layout::{CID_INFO1_SKIP, CID_LEN, INFO_LEN};

/// Rebuild the content identifier split across the two info blocks.
///
/// The first 18 bytes of `info1` are dropped, the remaining 14 are followed by all of `info2`.
/// The 46 bytes are decoded as UTF-8 without trimming; invalid sequences become U+FFFD.
pub fn reconstruct_cid(info1: &[u8; INFO_LEN], info2: &[u8; INFO_LEN]) -> String {
    let mut raw_cid = Vec::with_capacity(CID_LEN);
    raw_cid.extend_from_slice(&info1[CID_INFO1_SKIP..]);
    raw_cid.extend_from_slice(info2);
    String::from_utf8_lossy(&raw_cid).into_owned()
}
