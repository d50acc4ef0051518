//! # `.pin` Artifacts
//!
//! A `.pin` file is the portable proof a pinner keeps after pinning: the
//! file's hash, the proof that reduces it to the pinned proof-of-work hash,
//! and where the pin lives. Claim tooling reads `pinData.originalHash` and
//! `pinData.proof` straight into `claim_hash`.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::{Deserialize, Serialize};

use crate::digest::{format_hash, keccak256, parse_hash, parse_prefixed_hash, Hash};
use crate::error::CliError;
use crate::merkle::reduce;
use crate::pow::Nonce;

pub const PIN_FILE_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinFile {
    pub version: String,
    pub file_info: FileInfo,
    pub pin_data: PinData,
    pub pinner_info: PinnerInfo,
    pub blockchain_info: BlockchainInfo,
    pub services: Services,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub hash: String,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinData {
    pub original_hash: String,
    pub pow_hash: String,
    pub timestamp: u64,
    pub metadata: String,
    pub proof: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnerInfo {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ens_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockchainInfo {
    pub network: String,
    pub network_id: u64,
    pub contract_address: String,
    pub transaction_hash: String,
    pub block_number: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Services {
    pub claim_url: String,
    pub verify_url: String,
}

impl PinFile {
    pub fn read(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn write(&self, path: &Path) -> Result<(), CliError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Checks every hash is `0x`-prefixed 32-byte hex and that the proof
    /// reduces the original hash to the recorded proof-of-work hash.
    pub fn check(&self) -> Result<Hash, CliError> {
        let original = parse_prefixed_hash(&self.pin_data.original_hash)?;
        let expected = parse_prefixed_hash(&self.pin_data.pow_hash)?;
        parse_prefixed_hash(&self.file_info.hash)?;

        let proof = self
            .pin_data
            .proof
            .iter()
            .map(|element| parse_prefixed_hash(element))
            .collect::<Result<Vec<_>, _>>()?;

        let actual = reduce(&original, &proof);

        if actual != expected {
            return Err(CliError::ProofMismatch {
                expected: format_hash(&expected),
                actual: format_hash(&actual),
            });
        }

        Ok(actual)
    }
}

/// Best-effort MIME type from the file extension.
pub fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        Some("json") => "application/json",
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("mp3") => "audio/mpeg",
        Some("mp4") => "video/mp4",
        _ => "application/octet-stream",
    }
}

/// Arguments for `hashpin pin-file`.
#[derive(Args, Debug)]
pub struct PinFileArgs {
    #[command(subcommand)]
    pub command: PinFileCommand,
}

#[derive(Subcommand, Debug)]
pub enum PinFileCommand {
    /// Write a `.pin` file for a pinned file.
    Create(CreateArgs),

    /// Validate a `.pin` file and re-check its proof.
    Check {
        #[arg(value_name = "PIN_FILE")]
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// The pinned file. Its keccak-256 is the proof's leaf.
    #[arg(long)]
    pub file: PathBuf,

    /// Nonce the pin was mined with (decimal or 0x hex, up to 256 bits).
    #[arg(long)]
    pub nonce: Nonce,

    /// Batch siblings combined before the nonce, in order.
    #[arg(long = "sibling", value_name = "HEX")]
    pub siblings: Vec<String>,

    #[arg(long)]
    pub pinner: String,

    #[arg(long)]
    pub ens_name: Option<String>,

    #[arg(long, default_value = "")]
    pub metadata: String,

    /// Pin time in unix seconds; defaults to now.
    #[arg(long)]
    pub timestamp: Option<u64>,

    #[arg(long, default_value = "testnet")]
    pub network: String,

    #[arg(long, default_value_t = 0)]
    pub network_id: u64,

    #[arg(long, default_value = "")]
    pub contract: String,

    #[arg(long, default_value = "")]
    pub transaction_hash: String,

    #[arg(long, default_value_t = 0)]
    pub block_number: u64,

    #[arg(long, default_value = "")]
    pub claim_url: String,

    #[arg(long, default_value = "")]
    pub verify_url: String,

    /// Output path; defaults to `<file>.pin`.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Builds the `.pin` document for `args`, reading and hashing the file.
pub fn build(args: &CreateArgs) -> Result<PinFile> {
    let content = std::fs::read(&args.file)
        .with_context(|| format!("failed to read file: {}", args.file.display()))?;
    let original = keccak256(&[&content]);

    let mut proof = args
        .siblings
        .iter()
        .map(|sibling| parse_hash(sibling))
        .collect::<Result<Vec<_>, _>>()
        .context("invalid --sibling")?;
    proof.push(args.nonce.word());

    let pow_hash = reduce(&original, &proof);

    let timestamp = match args.timestamp {
        Some(timestamp) => timestamp,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock before unix epoch")?
            .as_secs(),
    };

    let name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(PinFile {
        version: PIN_FILE_VERSION.to_string(),
        file_info: FileInfo {
            hash: format_hash(&original),
            name,
            size: content.len() as u64,
            mime_type: mime_type_for(&args.file).to_string(),
        },
        pin_data: PinData {
            original_hash: format_hash(&original),
            pow_hash: format_hash(&pow_hash),
            timestamp,
            metadata: args.metadata.clone(),
            proof: proof.iter().map(format_hash).collect(),
        },
        pinner_info: PinnerInfo {
            address: args.pinner.clone(),
            ens_name: args.ens_name.clone(),
        },
        blockchain_info: BlockchainInfo {
            network: args.network.clone(),
            network_id: args.network_id,
            contract_address: args.contract.clone(),
            transaction_hash: args.transaction_hash.clone(),
            block_number: args.block_number,
        },
        services: Services {
            claim_url: args.claim_url.clone(),
            verify_url: args.verify_url.clone(),
        },
    })
}

pub fn run_pin_file(args: &PinFileArgs) -> Result<u8> {
    match &args.command {
        PinFileCommand::Create(create) => cmd_create(create),
        PinFileCommand::Check { path } => cmd_check(path),
    }
}

fn cmd_create(args: &CreateArgs) -> Result<u8> {
    let pin_file = build(args)?;

    let out = args.out.clone().unwrap_or_else(|| {
        let mut path = args.file.clone().into_os_string();
        path.push(".pin");
        PathBuf::from(path)
    });

    pin_file
        .write(&out)
        .with_context(|| format!("failed to write {}", out.display()))?;

    tracing::info!(path = %out.display(), pow_hash = %pin_file.pin_data.pow_hash, "pin file written");

    println!("OK: wrote {}", out.display());

    Ok(0)
}

fn cmd_check(path: &Path) -> Result<u8> {
    let pin_file =
        PinFile::read(path).with_context(|| format!("failed to load {}", path.display()))?;

    match pin_file.check() {
        Ok(pow_hash) => {
            println!(
                "OK: {} reduces to {}",
                pin_file.pin_data.original_hash,
                format_hash(&pow_hash)
            );
            Ok(0)
        }
        Err(error) => {
            println!("FAIL: {error}");
            Ok(1)
        }
    }
}
