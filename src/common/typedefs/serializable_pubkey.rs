use core::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::de::{self, Visitor};
use serde::ser::{Serialize, Serializer};
use serde::{Deserialize, Deserializer};
use solana_sdk::pubkey::{ParsePubkeyError, Pubkey as SolanaPubkey};
use std::convert::TryFrom;

#[derive(Default, Clone, PartialEq, Eq, Hash, Copy)]
pub struct SerializablePubkey(pub SolanaPubkey);

impl SerializablePubkey {
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    pub fn new_unique() -> Self {
        SerializablePubkey(SolanaPubkey::new_unique())
    }
}

impl BorshDeserialize for SerializablePubkey {
    fn deserialize_reader<R: Read>(reader: &mut R) -> Result<Self, std::io::Error> {
        let mut buffer = [0u8; 32];
        reader.read_exact(&mut buffer)?;
        Ok(SerializablePubkey(SolanaPubkey::new_from_array(buffer)))
    }
}

impl BorshSerialize for SerializablePubkey {
    fn serialize<W: Write>(&self, writer: &mut W) -> Result<(), std::io::Error> {
        writer.write_all(&self.0.to_bytes())
    }
}

impl TryFrom<&str> for SerializablePubkey {
    type Error = ParsePubkeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(SerializablePubkey(SolanaPubkey::from_str(value)?))
    }
}

impl fmt::Display for SerializablePubkey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.0)
    }
}

impl fmt::Debug for SerializablePubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SerializablePubkey({})", self.0)
    }
}

impl From<SolanaPubkey> for SerializablePubkey {
    fn from(pubkey: SolanaPubkey) -> Self {
        SerializablePubkey(pubkey)
    }
}

impl From<&SolanaPubkey> for SerializablePubkey {
    fn from(pubkey: &SolanaPubkey) -> Self {
        SerializablePubkey(*pubkey)
    }
}

impl From<[u8; 32]> for SerializablePubkey {
    fn from(bytes: [u8; 32]) -> Self {
        SerializablePubkey(SolanaPubkey::from(bytes))
    }
}

impl From<SerializablePubkey> for String {
    fn from(val: SerializablePubkey) -> Self {
        val.0.to_string()
    }
}

struct Base58Visitor;

impl<'de> Visitor<'de> for Base58Visitor {
    type Value = SerializablePubkey;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a base58 encoded string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        SerializablePubkey::try_from(value).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for SerializablePubkey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(Base58Visitor)
    }
}

impl Serialize for SerializablePubkey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let base58_string = bs58::encode(self.0).into_string();
        serializer.serialize_str(&base58_string)
    }
}

#[test]
fn test_serialization() {
    let pubkey = SerializablePubkey::new_unique();
    let serialized = serde_json::to_string(&pubkey).unwrap();
    let deserialized: SerializablePubkey = serde_json::from_str(&serialized).unwrap();
    assert_eq!(pubkey, deserialized);
}

#[test]
fn test_base58_matches_display() {
    let pubkey = SerializablePubkey::from([1u8; 32]);
    assert_eq!(
        serde_json::to_string(&pubkey).unwrap(),
        format!("\"{}\"", pubkey)
    );
    assert_eq!(
        pubkey.to_string(),
        "4vJ9JU1bJJE96FWSJKvHsmmFADCg4gpZQff4P3bkLKi"
    );
}
