//! Arena-backed Merkle tree construction and proof generation
//!
//! Nodes live in a flat arena indexed by [`NodeId`]; children hold a
//! back-reference to their parent so proof generation can walk leaf-to-root
//! without searching levels.

use mtree_types::{
    hash_leaf, hash_pair, Digest, Error, HashFunction, InclusionProof, ProofStep, Result,
};

use crate::verify::verify_inclusion;

/// Index of a node in the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

#[derive(Debug)]
struct Node {
    hash: Digest,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

/// A Merkle tree over an ordered list of string elements.
///
/// Leaf order follows input order. Construction is a separate step from
/// creation: `new` hashes the leaves, `build` assembles the interior levels.
/// Levels with an odd node count are padded by pairing the last node with
/// itself, so the duplicated node becomes its own sibling in proofs.
pub struct MerkleTree {
    data: Vec<String>,
    hasher: Box<dyn HashFunction>,
    nodes: Vec<Node>,
    leaves: Vec<NodeId>,
    root: Option<NodeId>,
}

impl MerkleTree {
    /// Create a tree over `data`, hashing each element into a leaf.
    ///
    /// The tree has no root until [`build`](Self::build) is called.
    pub fn new(data: Vec<String>, hasher: impl HashFunction + 'static) -> Self {
        let hasher: Box<dyn HashFunction> = Box::new(hasher);
        let mut nodes = Vec::with_capacity(2 * data.len().max(1));
        let leaves = data
            .iter()
            .map(|element| {
                let id = NodeId(nodes.len());
                nodes.push(Node {
                    hash: hash_leaf(hasher.as_ref(), element),
                    left: None,
                    right: None,
                    parent: None,
                });
                id
            })
            .collect();

        Self {
            data,
            hasher,
            nodes,
            leaves,
            root: None,
        }
    }

    /// Assemble interior levels bottom-up and fix the root.
    ///
    /// Fails with [`Error::AlreadyBuilt`] on a second call and
    /// [`Error::EmptyInput`] when there are no leaves.
    pub fn build(&mut self) -> Result<()> {
        if self.root.is_some() {
            return Err(Error::AlreadyBuilt);
        }
        if self.leaves.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut level = self.leaves.clone();
        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            for i in (0..level.len()).step_by(2) {
                let left = level[i];
                // Odd level: the last node pairs with itself.
                let right = if i + 1 < level.len() { level[i + 1] } else { left };

                let hash = hash_pair(
                    self.hasher.as_ref(),
                    &self.nodes[left.0].hash,
                    &self.nodes[right.0].hash,
                );
                let parent = NodeId(self.nodes.len());
                self.nodes.push(Node {
                    hash,
                    left: Some(left),
                    right: Some(right),
                    parent: None,
                });
                self.nodes[left.0].parent = Some(parent);
                self.nodes[right.0].parent = Some(parent);
                next.push(parent);
            }
            level = next;
        }

        self.root = Some(level[0]);
        Ok(())
    }

    /// The root hash, or `None` before [`build`](Self::build).
    pub fn root(&self) -> Option<&Digest> {
        self.root.map(|id| &self.nodes[id.0].hash)
    }

    /// Generate an inclusion proof for `element`.
    ///
    /// The element is located by leaf hash; when the same element appears
    /// more than once, the first (leftmost) occurrence is proven. Siblings
    /// are collected leaf-to-root.
    pub fn prove(&self, element: &str) -> Result<InclusionProof> {
        if self.root.is_none() {
            return Err(Error::NotBuilt);
        }

        let target = hash_leaf(self.hasher.as_ref(), element);
        let mut current = *self
            .leaves
            .iter()
            .find(|id| self.nodes[id.0].hash == target)
            .ok_or_else(|| Error::ElementNotFound(element.to_string()))?;

        let mut siblings = Vec::new();
        while let Some(parent_id) = self.nodes[current.0].parent {
            let parent = &self.nodes[parent_id.0];
            match (parent.left, parent.right) {
                (Some(left), Some(right)) if left == current => {
                    siblings.push(ProofStep {
                        hash: self.nodes[right.0].hash.clone(),
                        is_left: false,
                    });
                }
                (Some(left), Some(_)) => {
                    siblings.push(ProofStep {
                        hash: self.nodes[left.0].hash.clone(),
                        is_left: true,
                    });
                }
                // Interior nodes always carry both children.
                _ => break,
            }
            current = parent_id;
        }

        Ok(InclusionProof { siblings })
    }

    /// Check `proof` against this tree's root for `element`.
    ///
    /// An empty proof is only meaningful for a single-leaf tree; against a
    /// larger tree it is structurally invalid and reports `false`.
    pub fn verify(&self, element: &str, proof: &InclusionProof) -> Result<bool> {
        let root = self.root().ok_or(Error::NotBuilt)?;
        if proof.is_empty() && self.leaves.len() != 1 {
            return Ok(false);
        }
        Ok(verify_inclusion(self.hasher.as_ref(), root, element, proof))
    }

    /// Number of leaves (always equal to the number of input elements).
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Whether [`build`](Self::build) has completed.
    pub fn is_built(&self) -> bool {
        self.root.is_some()
    }

    /// The input elements, in leaf order.
    pub fn elements(&self) -> &[String] {
        &self.data
    }
}

impl std::fmt::Debug for MerkleTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MerkleTree")
            .field("algorithm", &self.hasher.name())
            .field("leaf_count", &self.leaves.len())
            .field("root", &self.root().map(|r| r.to_hex()))
            .finish()
    }
}
