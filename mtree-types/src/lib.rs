//! Core types for mtree Merkle inclusion proofs
//!
//! This crate defines the digest primitives, the pluggable hash capability,
//! and the proof formats shared by the tree builder, the proof generator,
//! and standalone verifiers.

pub mod error;
pub mod primitives;
pub mod proof;

pub use error::{Error, Result};
pub use primitives::{Blake3, Digest, HashAlgorithm, HashFunction, Sha256, Sha384};
pub use proof::{hash_leaf, hash_pair, InclusionProof, ProofBundle, ProofStep};
