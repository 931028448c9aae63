//! Block records and their display helpers.

use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Leader names used for synthetic blocks and offered as staking targets.
pub const LEADERS: [&str; 5] = ["Helios", "Nova", "Lumen", "Pulse", "Vertex"];

/// Characters kept from the start of a hash by [`short_hash`].
pub const HASH_PREFIX_LEN: usize = 10;
/// Characters kept from the end of a hash by [`short_hash`].
pub const HASH_SUFFIX_LEN: usize = 6;

/// One block as shown in the explorer.
///
/// The JSON form is what the live channel sends:
///
/// ```json
/// {"height": 982345, "hash": "9f0c…", "txCount": 1433, "leader": "Nova"}
/// ```
///
/// Live sources are not trusted to count from zero, so `height` and
/// `tx_count` take any JSON number as sent (`-5`, `7.0`, beyond `i64`).
/// Only the generator guarantees an increasing `u64` height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRecord {
    /// Block height.
    pub height: Number,
    /// Opaque block identifier.
    pub hash: String,
    /// Number of transactions.
    pub tx_count: Number,
    /// Name of the producing validator.
    pub leader: String,
}

impl BlockRecord {
    /// Decode a live-channel payload.
    pub fn from_json(payload: &[u8]) -> Result<Self, DecodeError> {
        Ok(serde_json::from_slice(payload)?)
    }

    /// Display form of this record's hash.
    pub fn short_hash(&self) -> String {
        short_hash(&self.hash)
    }
}

/// Shorten a hash to its first 10 and last 6 characters around `...`.
///
/// Hashes with fewer than `HASH_PREFIX_LEN + HASH_SUFFIX_LEN` characters
/// are returned whole instead of producing overlapping halves.
pub fn short_hash(hash: &str) -> String {
    let len = hash.chars().count();
    if len < HASH_PREFIX_LEN + HASH_SUFFIX_LEN {
        return hash.to_string();
    }
    let prefix: String = hash.chars().take(HASH_PREFIX_LEN).collect();
    let suffix: String = hash.chars().skip(len - HASH_SUFFIX_LEN).collect();
    format!("{prefix}...{suffix}")
}
