//! Client library for a Solana merkle-distributor token airdrop.
//!
//! Given an RPC provider, the distributed token's mint, and a proof-service
//! URL, [`DistributorClient`] fetches a claimant's eligibility proof, derives
//! the claim-status PDA and token accounts, and assembles the instruction
//! sequence that claims the allocation once signed and submitted. Signing and
//! submission stay with the caller.

mod api;
mod client;
mod error;
mod onchain;

pub use api::schemas::ClaimRecord;
pub use client::{ClaimStatusSummary, DistributorClient, DistributorOptions};
pub use error::ClientError;
pub use onchain::client::init_rpc_client;
pub use onchain::constants::MERKLE_DISTRIBUTOR_PROGRAM_ID;
pub use onchain::derive::{derive_ata, derive_claim_status};
pub use onchain::ixs::get_or_create_ata_instruction;
pub use onchain::state::ClaimStatus;
