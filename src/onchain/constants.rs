use solana_program::pubkey;
use solana_sdk::pubkey::Pubkey;

pub const SYSTEM_PROGRAM_ID: Pubkey = pubkey!("11111111111111111111111111111111");

pub const TOKEN_PROGRAM_ID: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey =
    pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

pub const MERKLE_DISTRIBUTOR_PROGRAM_ID: Pubkey =
    pubkey!("meRjbQXFNf5En86FXT2YPz1dQzLj4Yb3xK8u1MVgqpb");

/// Anchor discriminator of the `new_claim` instruction:
/// `sha256("global:new_claim")[..8]`.
pub const NEW_CLAIM_IX_DISCRIMINATOR: [u8; 8] = [78, 177, 98, 123, 210, 21, 187, 83];

/// Anchor discriminator of the `ClaimStatus` account:
/// `sha256("account:ClaimStatus")[..8]`.
pub const CLAIM_STATUS_DISCRIMINATOR: [u8; 8] = [22, 183, 249, 157, 247, 95, 150, 96];

/// ATA-program tag for `CreateIdempotent`; a no-op when the account already
/// exists, so two callers racing on creation cannot break each other.
pub const CREATE_ATA_IDEMPOTENT: u8 = 1;
