use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// Length of a [`BlogId`] in bytes.
pub const BLOG_ID_LEN: usize = 12;

/// Store-assigned identifier of a blog record.
///
/// Twelve bytes laid out as a 4-byte big-endian seconds timestamp, 5 bytes of
/// per-process randomness and a 3-byte wrapping counter. The public form is
/// 24 lowercase hex characters, which is also how it serializes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlogId([u8; BLOG_ID_LEN]);

static PROCESS_NONCE: OnceLock<[u8; 5]> = OnceLock::new();
static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

impl BlogId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(0);
        let nonce = PROCESS_NONCE.get_or_init(|| rand::thread_rng().gen());
        let counter = COUNTER
            .get_or_init(|| AtomicU32::new(rand::thread_rng().gen()))
            .fetch_add(1, Ordering::Relaxed);

        let mut bytes = [0u8; BLOG_ID_LEN];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(nonce);
        bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);
        Self(bytes)
    }

    /// Create from raw bytes.
    pub const fn from_raw(bytes: [u8; BLOG_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8; BLOG_ID_LEN] {
        &self.0
    }

    /// Seconds timestamp embedded at generation time.
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a hex string (24 hex characters).
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != BLOG_ID_LEN {
            return Err(TypeError::InvalidLength {
                expected: BLOG_ID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; BLOG_ID_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlogId({})", self.to_hex())
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for BlogId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for BlogId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for BlogId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
