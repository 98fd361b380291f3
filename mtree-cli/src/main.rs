//! Merkle tree CLI: roots, inclusion proofs, and standalone verification

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, Level};

use mtree_core::{verify_bundle, Block, MerkleTree};
use mtree_types::{HashAlgorithm, ProofBundle};

#[derive(Parser)]
#[command(name = "mtree")]
#[command(about = "Merkle tree roots, inclusion proofs, and verification", long_about = None)]
struct Cli {
    /// Hash algorithm: sha256, sha384, or blake3
    #[arg(long, global = true, default_value = "sha256")]
    hash: HashAlgorithm,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the root hash over a file of elements
    Root {
        /// Input file, one element per line ("-" for stdin)
        input: PathBuf,
    },

    /// Generate an inclusion proof for an element
    Prove {
        /// Input file, one element per line ("-" for stdin)
        input: PathBuf,

        /// Element whose inclusion to prove
        element: String,

        /// Output file for the proof bundle (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify a proof bundle
    Verify {
        /// Proof bundle JSON file
        file: PathBuf,
    },

    /// Mine a proof-of-work block (always SHA-256)
    Mine {
        /// Block payload
        data: String,

        /// Hash of the previous block
        #[arg(
            long,
            default_value = "0000000000000000000000000000000000000000000000000000000000000000"
        )]
        previous_hash: String,

        /// Required number of leading zero hex digits
        #[arg(short, long, default_value_t = 3)]
        difficulty: usize,
    },
}

fn read_elements(path: &Path) -> Result<Vec<String>> {
    let contents = if path == Path::new("-") {
        use std::io::Read;

        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    let elements: Vec<String> = contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if elements.is_empty() {
        bail!("no elements found in {}", path.display());
    }
    Ok(elements)
}

fn build_tree(input: &Path, algorithm: HashAlgorithm) -> Result<MerkleTree> {
    let elements = read_elements(input)?;
    let mut tree = MerkleTree::new(elements, algorithm);
    tree.build()?;
    info!(
        leaves = tree.leaf_count(),
        algorithm = %algorithm,
        "tree built"
    );
    Ok(tree)
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Root { input } => {
            let tree = build_tree(&input, cli.hash)?;
            let root = tree.root().context("tree has no root")?;
            println!("{root}");
        }

        Commands::Prove {
            input,
            element,
            output,
        } => {
            let tree = build_tree(&input, cli.hash)?;
            let proof = tree.prove(&element)?;
            info!(element = %element, path_length = proof.len(), "proof generated");

            let bundle = ProofBundle {
                algorithm: cli.hash,
                root: tree.root().context("tree has no root")?.clone(),
                element,
                proof,
            };
            let json = serde_json::to_string_pretty(&bundle)?;

            if let Some(path) = output {
                std::fs::write(&path, json)?;
                println!("Proof written to {}", path.display());
            } else {
                println!("{json}");
            }
        }

        Commands::Verify { file } => {
            let json = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let bundle: ProofBundle = serde_json::from_str(&json)?;

            verify_bundle(&bundle)?;

            println!("Proof verified successfully");
            println!("Algorithm:   {}", bundle.algorithm);
            println!("Element:     {}", bundle.element);
            println!("Root:        {}", bundle.root);
            println!("Path Length: {}", bundle.proof.len());
        }

        Commands::Mine {
            data,
            previous_hash,
            difficulty,
        } => {
            let mut block = Block::new(data, previous_hash);
            info!(difficulty, "mining block");

            let start = Instant::now();
            let attempts = block.mine(difficulty);
            let elapsed = start.elapsed();

            println!("Block mined");
            println!("Hash:     {}", block.hash);
            println!("Nonce:    {}", block.nonce);
            println!("Attempts: {}", attempts);
            println!("Elapsed:  {:.2?}", elapsed);
        }
    }

    Ok(())
}
