//! A self-contained proof-of-work block miner
//!
//! Independent of the Merkle tree: a block commits to its payload, the
//! previous block's hash, a creation timestamp, and a nonce. Mining searches
//! for a nonce whose SHA-256 hash carries a run of leading zero hex digits.

use chrono::{DateTime, Utc};
use mtree_types::{HashFunction, Sha256};

/// A minable block. The hash field always reflects the current nonce.
#[derive(Debug, Clone)]
pub struct Block {
    pub data: String,
    pub previous_hash: String,
    pub timestamp: DateTime<Utc>,
    pub nonce: u64,
    pub hash: String,
}

impl Block {
    /// Create a block stamped with the current time, nonce zero.
    pub fn new(data: String, previous_hash: String) -> Self {
        let mut block = Self {
            data,
            previous_hash,
            timestamp: Utc::now(),
            nonce: 0,
            hash: String::new(),
        };
        block.hash = block.compute_hash();
        block
    }

    /// Hash the block header: data, previous hash, RFC 3339 timestamp, and
    /// the nonce in decimal, concatenated and fed to SHA-256.
    pub fn compute_hash(&self) -> String {
        let mut buf = Vec::new();
        buf.extend_from_slice(self.data.as_bytes());
        buf.extend_from_slice(self.previous_hash.as_bytes());
        buf.extend_from_slice(self.timestamp.to_rfc3339().as_bytes());
        buf.extend_from_slice(self.nonce.to_string().as_bytes());
        Sha256.digest(&buf).to_hex()
    }

    /// Increment the nonce until the hash starts with `difficulty` zero hex
    /// digits. Returns the number of attempts taken.
    pub fn mine(&mut self, difficulty: usize) -> u64 {
        let prefix = "0".repeat(difficulty);
        let mut attempts = 0u64;
        while !self.hash.starts_with(&prefix) {
            self.nonce += 1;
            self.hash = self.compute_hash();
            attempts += 1;
        }
        attempts
    }
}
