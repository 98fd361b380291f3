//! Primitive types: digests and the pluggable hash capability

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A cryptographic digest (hash output).
///
/// Digest length depends on the selected algorithm (32 bytes for SHA-256
/// and BLAKE3, 48 bytes for SHA-384), so the bytes are held as an opaque,
/// immutable buffer. Digests are only comparable across trees and proofs
/// produced with the same algorithm.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digest(Vec<u8>);

// Custom serde implementation for Digest - serialize as hex for readability
impl Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        Self::from_hex(&hex_str).map_err(serde::de::Error::custom)
    }
}

impl Digest {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn from_slice(slice: &[u8]) -> Self {
        Self(slice.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self(hex::decode(s)?))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = &self.0[..self.0.len().min(8)];
        write!(f, "Digest({})", hex::encode(prefix))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// A pluggable digest algorithm: bytes in, fixed-length digest out.
///
/// The algorithm is a strategy value chosen at tree construction and fixed
/// for the tree's lifetime.
pub trait HashFunction: Send + Sync {
    /// Hash `data` into a fixed-length digest.
    fn digest(&self, data: &[u8]) -> Digest;

    /// Stable lowercase name of the algorithm.
    fn name(&self) -> &'static str;
}

/// SHA-256 (32-byte digests).
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256;

impl HashFunction for Sha256 {
    fn digest(&self, data: &[u8]) -> Digest {
        use sha2::Digest as _;
        Digest::new(sha2::Sha256::digest(data).to_vec())
    }

    fn name(&self) -> &'static str {
        "sha256"
    }
}

/// SHA-384 (48-byte digests).
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha384;

impl HashFunction for Sha384 {
    fn digest(&self, data: &[u8]) -> Digest {
        use sha2::Digest as _;
        Digest::new(sha2::Sha384::digest(data).to_vec())
    }

    fn name(&self) -> &'static str {
        "sha384"
    }
}

/// BLAKE3 (32-byte digests).
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3;

impl HashFunction for Blake3 {
    fn digest(&self, data: &[u8]) -> Digest {
        Digest::from_slice(blake3::hash(data).as_bytes())
    }

    fn name(&self) -> &'static str {
        "blake3"
    }
}

/// Selector for the recognized hash algorithms.
///
/// Serializes as the algorithm's lowercase name so proof bundles record
/// which algorithm they were computed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Blake3,
}

impl HashFunction for HashAlgorithm {
    fn digest(&self, data: &[u8]) -> Digest {
        match self {
            HashAlgorithm::Sha256 => Sha256.digest(data),
            HashAlgorithm::Sha384 => Sha384.digest(data),
            HashAlgorithm::Blake3 => Blake3.digest(data),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => Sha256.name(),
            HashAlgorithm::Sha384 => Sha384.name(),
            HashAlgorithm::Blake3 => Blake3.name(),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "blake3" => Ok(HashAlgorithm::Blake3),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
