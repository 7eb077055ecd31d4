/// Shared constants for the token registry record byte layout.
///
/// Mint account pubkey range `[0..32]`.
pub const MINT_ACCOUNT_OFFSET: usize = 0;
pub const MINT_ACCOUNT_LEN: usize = 32;
pub const MINT_ACCOUNT_END: usize = MINT_ACCOUNT_OFFSET + MINT_ACCOUNT_LEN;

/// Approval flag byte offset. Any nonzero value means approved.
pub const APPROVED_OFFSET: usize = MINT_ACCOUNT_END;
pub const APPROVED_LEN: usize = 1;

/// First info block range `[33..65]`.
pub const INFO1_OFFSET: usize = APPROVED_OFFSET + APPROVED_LEN;
pub const INFO_LEN: usize = 32;
pub const INFO1_END: usize = INFO1_OFFSET + INFO_LEN;

/// Second info block range `[65..97]`.
pub const INFO2_OFFSET: usize = INFO1_END;
pub const INFO2_END: usize = INFO2_OFFSET + INFO_LEN;

/// Total record size, also used as the `dataSize` RPC filter.
pub const TOKEN_LAYOUT_SIZE: usize = INFO2_END;

/// Leading bytes of `info1` that carry no CID data.
pub const CID_INFO1_SKIP: usize = 18;
/// CID length: the tail of `info1` plus all of `info2`.
pub const CID_LEN: usize = (INFO_LEN - CID_INFO1_SKIP) + INFO_LEN;
