//! Node identifiers: 16-bit region prefix + SHA-256 of a key.
//!
//! ```text
//! +---------+---------+---------------------------- ... ---+
//! | code hi | code lo |        sha256(key), 32 bytes       |
//! +---------+---------+---------------------------- ... ---+
//! ```
//!
//! Same `(code, key)` in, same 34 bytes out - on any machine, in any run.
//!
//! ## Rust Lesson #21: The ? Operator
//!
//! [`derive_node_id`] returns `Result`, so callers write
//! `let id = derive_node_id(code, key)?;` and an empty key bubbles up as
//! an [`IdentifierError`] without a single `match`.

use std::fmt;

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::codes::RegionCode;
use crate::error::IdentifierError;

/// Length of the region prefix.
pub const REGION_PREFIX_LEN: usize = 2;
/// Length of the key digest.
pub const DIGEST_LEN: usize = 32;
/// Total identifier length.
pub const NODE_ID_LEN: usize = REGION_PREFIX_LEN + DIGEST_LEN;

/// A 34-byte node identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId([u8; NODE_ID_LEN]);

impl NodeId {
    pub fn as_bytes(&self) -> &[u8; NODE_ID_LEN] {
        &self.0
    }

    /// The 16-bit region prefix as stored.
    pub fn region_prefix(&self) -> u16 {
        u16::from_be_bytes([self.0[0], self.0[1]])
    }

    pub fn digest(&self) -> &[u8] {
        &self.0[REGION_PREFIX_LEN..]
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for NodeId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.to_hex())
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Narrow a region code to the 16 bits the identifier has room for.
///
/// Codes above 65535 are truncated, not rejected. The built-in namespace
/// tops out at 9999, so this only bites for codes from elsewhere.
#[inline]
pub fn to_identifier(code: RegionCode) -> u16 {
    (code.value() & 0xFFFF) as u16
}

/// Build the identifier for `key` in region `code`.
///
/// `key` is hashed as raw bytes (typically a public key). An empty key is
/// refused: its digest would look like any other identifier.
pub fn derive_node_id(code: RegionCode, key: &[u8]) -> Result<NodeId, IdentifierError> {
    if key.is_empty() {
        return Err(IdentifierError::EmptyKey);
    }

    let mut bytes = [0u8; NODE_ID_LEN];
    bytes[..REGION_PREFIX_LEN].copy_from_slice(&to_identifier(code).to_be_bytes());
    bytes[REGION_PREFIX_LEN..].copy_from_slice(&Sha256::digest(key));

    Ok(NodeId(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::north_america;
    use proptest::prelude::*;

    #[test]
    fn layout() {
        let id = derive_node_id(north_america::CANADA_WEST, b"test-key").unwrap();
        assert_eq!(id.as_bytes().len(), 34);
        // 2000 = 0x07D0
        assert_eq!(&id.as_bytes()[..2], &[0x07, 0xD0]);
        assert_eq!(id.region_prefix(), 2000);
        assert_eq!(id.digest(), Sha256::digest(b"test-key").as_slice());
    }

    #[test]
    fn known_digest() {
        let id = derive_node_id(RegionCode(0x1234), b"abc").unwrap();
        assert_eq!(
            id.to_hex(),
            "1234ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn empty_key_is_rejected() {
        assert_eq!(
            derive_node_id(north_america::USA_EAST, b""),
            Err(IdentifierError::EmptyKey)
        );
    }

    #[test]
    fn large_codes_are_truncated() {
        assert_eq!(to_identifier(RegionCode(0x1_0001)), 1);
        assert_eq!(to_identifier(RegionCode(65535)), 65535);

        let wide = derive_node_id(RegionCode(0x1_2345), b"k").unwrap();
        let narrow = derive_node_id(RegionCode(0x2345), b"k").unwrap();
        assert_eq!(wide, narrow);
    }

    #[test]
    fn display_is_hex() {
        let id = derive_node_id(RegionCode(1), b"k").unwrap();
        let shown = id.to_string();
        assert_eq!(shown.len(), 68);
        assert!(shown.starts_with("0001"));
        assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{}\"", shown));
    }

    proptest! {
        #[test]
        fn always_34_bytes(code in any::<u32>(), key in prop::collection::vec(any::<u8>(), 1..512)) {
            let id = derive_node_id(RegionCode(code), &key).unwrap();
            prop_assert_eq!(id.as_bytes().len(), NODE_ID_LEN);
        }

        #[test]
        fn deterministic(code in 0u32..10_000, key in prop::collection::vec(any::<u8>(), 1..64)) {
            let a = derive_node_id(RegionCode(code), &key).unwrap();
            let b = derive_node_id(RegionCode(code), &key).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
