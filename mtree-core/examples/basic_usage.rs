//! Basic usage example for Merkle tree commitments
//!
//! This example demonstrates:
//! - Building a Merkle tree over a batch of elements
//! - Generating inclusion proofs
//! - Verifying a proof bundle independently of the tree
//!
//! Run with: cargo run --example basic_usage

use mtree_core::{verify_bundle, MerkleTree};
use mtree_types::{HashAlgorithm, ProofBundle, Sha256};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Merkle Tree Example");
    println!("===================\n");

    // Step 1: A batch of elements to commit to
    let elements: Vec<String> = (1..=8).map(|i| format!("Transaction {i}")).collect();

    println!("Elements:");
    for (i, element) in elements.iter().enumerate() {
        println!("  {}. {element:?}", i + 1);
    }
    println!();

    // Step 2: Build the tree
    let mut tree = MerkleTree::new(elements.clone(), Sha256);
    tree.build()?;

    println!("Tree Built:");
    println!("  Algorithm: sha256");
    println!("  Leaves:    {}", tree.leaf_count());
    println!("  Root Hash: {}", tree.root().ok_or("tree not built")?);
    println!();

    // Step 3: Generate and check an inclusion proof for each element
    println!("Inclusion Proofs:");
    for element in &elements {
        let proof = tree.prove(element)?;

        println!("  {element:?}:");
        println!("    Path Length: {}", proof.len());

        assert!(
            tree.verify(element, &proof)?,
            "Proof verification failed!"
        );
        println!("    ✓ Proof verified");
    }
    println!();

    // Step 4: Package one proof for a recipient who never sees the tree
    let element = "Transaction 5".to_string();
    let bundle = ProofBundle {
        algorithm: HashAlgorithm::Sha256,
        root: tree.root().ok_or("tree not built")?.clone(),
        element: element.clone(),
        proof: tree.prove(&element)?,
    };

    println!("Proof bundle for {element:?}:");
    println!("{}", serde_json::to_string_pretty(&bundle)?);
    println!();

    // The bundle alone is enough to check the claim
    verify_bundle(&bundle)?;
    println!("✓ Bundle verified without the tree");

    Ok(())
}
