//! Inclusion-proof formats and the leaf/pair hashing rules

use crate::primitives::{Digest, HashAlgorithm, HashFunction};
use serde::{Deserialize, Serialize};

/// One step of an inclusion proof: a sibling hash and the side it sits on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofStep {
    pub hash: Digest,
    /// True if this sibling is on the left of the path
    pub is_left: bool,
}

/// An inclusion proof: sibling hashes ordered from the leaf up to the root.
///
/// The root itself is never part of the proof; an empty proof can only
/// arise from a single-leaf tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InclusionProof {
    pub siblings: Vec<ProofStep>,
}

impl InclusionProof {
    /// Number of steps in the proof (the height of the walk to the root).
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Recompute the root this proof commits to, starting from a leaf hash.
    ///
    /// Consumes the steps in leaf-to-root order, placing each sibling on
    /// the side it was recorded on.
    pub fn compute_root(&self, leaf_hash: &Digest, hasher: &dyn HashFunction) -> Digest {
        let mut current = leaf_hash.clone();

        for sibling in &self.siblings {
            current = if sibling.is_left {
                hash_pair(hasher, &sibling.hash, &current)
            } else {
                hash_pair(hasher, &current, &sibling.hash)
            };
        }

        current
    }
}

/// A self-contained inclusion claim, verifiable without the live tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofBundle {
    /// Hash algorithm the tree and proof were computed with
    pub algorithm: HashAlgorithm,
    /// The tree's root hash
    pub root: Digest,
    /// The element whose inclusion is claimed
    pub element: String,
    /// Sibling path from the element's leaf to the root
    pub proof: InclusionProof,
}

/// Hash an input element into its leaf digest.
pub fn hash_leaf(hasher: &dyn HashFunction, element: &str) -> Digest {
    hasher.digest(element.as_bytes())
}

/// Hash a pair of nodes: H(left || right), raw digest bytes, no separator.
pub fn hash_pair(hasher: &dyn HashFunction, left: &Digest, right: &Digest) -> Digest {
    let mut buf = Vec::with_capacity(left.len() + right.len());
    buf.extend_from_slice(left.as_bytes());
    buf.extend_from_slice(right.as_bytes());
    hasher.digest(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Sha256;
    use proptest::prelude::*;

    #[test]
    fn test_compute_root_right_sibling() {
        // Two-leaf tree, proving the left leaf
        let leaf0 = hash_leaf(&Sha256, "a");
        let leaf1 = hash_leaf(&Sha256, "b");
        let root = hash_pair(&Sha256, &leaf0, &leaf1);

        let proof = InclusionProof {
            siblings: vec![ProofStep {
                hash: leaf1,
                is_left: false,
            }],
        };

        assert_eq!(proof.compute_root(&leaf0, &Sha256), root);
    }

    #[test]
    fn test_compute_root_left_sibling() {
        // Two-leaf tree, proving the right leaf
        let leaf0 = hash_leaf(&Sha256, "a");
        let leaf1 = hash_leaf(&Sha256, "b");
        let root = hash_pair(&Sha256, &leaf0, &leaf1);

        let proof = InclusionProof {
            siblings: vec![ProofStep {
                hash: leaf0,
                is_left: true,
            }],
        };

        assert_eq!(proof.compute_root(&leaf1, &Sha256), root);
    }

    #[test]
    fn test_empty_proof_is_identity() {
        let leaf = hash_leaf(&Sha256, "only");
        let proof = InclusionProof { siblings: vec![] };
        assert_eq!(proof.compute_root(&leaf, &Sha256), leaf);
    }

    #[test]
    fn test_bundle_serde_roundtrip() {
        let leaf = hash_leaf(&Sha256, "a");
        let sibling = hash_leaf(&Sha256, "b");
        let bundle = ProofBundle {
            algorithm: HashAlgorithm::Sha256,
            root: hash_pair(&Sha256, &leaf, &sibling),
            element: "a".to_string(),
            proof: InclusionProof {
                siblings: vec![ProofStep {
                    hash: sibling,
                    is_left: false,
                }],
            },
        };

        let json = serde_json::to_string(&bundle).unwrap();
        let parsed: ProofBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(bundle.algorithm, parsed.algorithm);
        assert_eq!(bundle.root, parsed.root);
        assert_eq!(bundle.element, parsed.element);
        assert_eq!(bundle.proof.len(), parsed.proof.len());
    }

    // === Proptest strategies ===

    prop_compose! {
        fn arb_digest()(bytes in prop::array::uniform32(any::<u8>())) -> Digest {
            Digest::from_slice(&bytes)
        }
    }

    proptest! {
        #[test]
        fn prop_hash_pair_deterministic(a in arb_digest(), b in arb_digest()) {
            let h1 = hash_pair(&Sha256, &a, &b);
            let h2 = hash_pair(&Sha256, &a, &b);
            prop_assert_eq!(h1, h2);
        }

        #[test]
        fn prop_hash_pair_non_commutative(a in arb_digest(), b in arb_digest()) {
            prop_assume!(a != b);
            let h1 = hash_pair(&Sha256, &a, &b);
            let h2 = hash_pair(&Sha256, &b, &a);
            prop_assert_ne!(h1, h2, "hash_pair must not be commutative");
        }

        #[test]
        fn prop_hash_leaf_deterministic(s in "\\PC{0,64}") {
            prop_assert_eq!(hash_leaf(&Sha256, &s), hash_leaf(&Sha256, &s));
        }

        #[test]
        fn prop_step_side_matters(a in arb_digest(), b in arb_digest()) {
            prop_assume!(a != b);
            let left = InclusionProof {
                siblings: vec![ProofStep { hash: b.clone(), is_left: true }],
            };
            let right = InclusionProof {
                siblings: vec![ProofStep { hash: b, is_left: false }],
            };
            prop_assert_ne!(
                left.compute_root(&a, &Sha256),
                right.compute_root(&a, &Sha256)
            );
        }
    }
}
