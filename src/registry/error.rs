use thiserror::Error;

use crate::common::typedefs::serializable_pubkey::SerializablePubkey;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Malformed Record: expected {expected} bytes, got {actual}")]
    MalformedRecord { expected: usize, actual: usize },
    #[error("Record {index} ({pubkey}): {source}")]
    Record {
        index: usize,
        pubkey: SerializablePubkey,
        #[source]
        source: Box<RegistryError>,
    },
    #[error("Fetch Error: {0}")]
    FetchError(String),
    #[error("Invalid Config: {0}")]
    InvalidConfig(String),
}

impl RegistryError {
    /// Position of the offending record in the fetch result, if known.
    pub fn record_index(&self) -> Option<usize> {
        match self {
            RegistryError::Record { index, .. } => Some(*index),
            _ => None,
        }
    }
}
