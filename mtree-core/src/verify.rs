//! Standalone proof verification against a root hash
//!
//! Verification never needs the live tree: a root digest, the claimed
//! element, and the sibling path are enough to recompute the commitment.

use mtree_types::{hash_leaf, Digest, HashFunction, InclusionProof, ProofBundle};
use thiserror::Error;

/// Failure reported when a proof does not check out.
#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("inclusion proof does not reconstruct the expected root")]
    RootMismatch,
}

/// Check that `proof` links `element` to `root` under `hasher`.
pub fn verify_inclusion(
    hasher: &dyn HashFunction,
    root: &Digest,
    element: &str,
    proof: &InclusionProof,
) -> bool {
    let leaf = hash_leaf(hasher, element);
    proof.compute_root(&leaf, hasher) == *root
}

/// Verify a self-contained proof bundle using the algorithm it declares.
pub fn verify_bundle(bundle: &ProofBundle) -> Result<(), VerificationError> {
    if verify_inclusion(&bundle.algorithm, &bundle.root, &bundle.element, &bundle.proof) {
        Ok(())
    } else {
        Err(VerificationError::RootMismatch)
    }
}
