//! Fixed-size registry record decoding.
//!
//! On-chain layout (97 bytes, no padding):
//! - mint_account (32 bytes)
//! - approved (1 byte, nonzero is true)
//! - info1 (32 bytes)
//! - info2 (32 bytes)

use borsh::{BorshDeserialize, BorshSerialize};

use super::error::RegistryError;
use crate::common::token_layout::{INFO_LEN, TOKEN_LAYOUT_SIZE};
use crate::common::typedefs::serializable_pubkey::SerializablePubkey;

#[derive(Debug, BorshDeserialize, BorshSerialize)]
struct RawTokenLayout {
    mint_account: SerializablePubkey,
    approved: u8,
    info1: [u8; INFO_LEN],
    info2: [u8; INFO_LEN],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLayout {
    pub mint_account: SerializablePubkey,
    pub approved: bool,
    pub info1: [u8; INFO_LEN],
    pub info2: [u8; INFO_LEN],
}

impl TokenLayout {
    pub fn decode(data: &[u8]) -> Result<Self, RegistryError> {
        let malformed = || RegistryError::MalformedRecord {
            expected: TOKEN_LAYOUT_SIZE,
            actual: data.len(),
        };
        if data.len() != TOKEN_LAYOUT_SIZE {
            return Err(malformed());
        }
        let raw = RawTokenLayout::try_from_slice(data).map_err(|_| malformed())?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawTokenLayout) -> Self {
        TokenLayout {
            mint_account: raw.mint_account,
            approved: raw.approved != 0,
            info1: raw.info1,
            info2: raw.info2,
        }
    }

    /// Re-encode into the on-chain byte layout. `approved` is written as 0 or 1.
    pub fn to_bytes(&self) -> Vec<u8> {
        let raw = RawTokenLayout {
            mint_account: self.mint_account,
            approved: self.approved as u8,
            info1: self.info1,
            info2: self.info2,
        };
        let mut buf = Vec::with_capacity(TOKEN_LAYOUT_SIZE);
        // Writing fixed arrays into a Vec cannot fail.
        let _ = raw.serialize(&mut buf);
        buf
    }
}
