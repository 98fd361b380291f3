//! Merkle tree construction, inclusion proofs, and verification
//!
//! This crate provides:
//! - Arena-backed Merkle tree construction over ordered string elements
//! - Inclusion-proof generation from the live tree
//! - Standalone proof verification against a root hash
//! - A self-contained proof-of-work block miner

pub mod miner;
pub mod tree;
pub mod verify;

pub use miner::Block;
pub use tree::MerkleTree;
pub use verify::{verify_bundle, verify_inclusion, VerificationError};
