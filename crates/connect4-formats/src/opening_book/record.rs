//! Opening book record

use binrw::{BinRead, BinWrite};
use std::fmt;

/// A single opening book record
///
/// Binary layout in the interleaved book (5 bytes):
/// ```text
/// key:    [u8; 4]   Position key, big-endian
/// value:  u8        Opaque payload
/// ```
///
/// The key is kept exactly as stored so a record always writes back the
/// bytes it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, BinRead, BinWrite)]
#[brw(big)]
pub struct BookRecord {
    /// Key bytes in big-endian order
    pub key: [u8; 4],
    /// Value byte
    pub value: u8,
}

impl BookRecord {
    /// Create a record from big-endian key bytes
    pub const fn new(key: [u8; 4], value: u8) -> Self {
        Self { key, value }
    }

    /// Create a record from a numeric key
    pub const fn from_key(key: u32, value: u8) -> Self {
        Self {
            key: key.to_be_bytes(),
            value,
        }
    }

    /// Create a record from little-endian key bytes
    pub const fn from_le_key(key: [u8; 4], value: u8) -> Self {
        Self::from_key(u32::from_le_bytes(key), value)
    }

    /// Numeric key
    pub const fn key_u32(&self) -> u32 {
        u32::from_be_bytes(self.key)
    }

    /// Key bytes in little-endian order
    pub const fn le_key(&self) -> [u8; 4] {
        self.key_u32().to_le_bytes()
    }
}

impl fmt::Display for BookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {:#04x}", hex::encode(self.key), self.value)
    }
}
