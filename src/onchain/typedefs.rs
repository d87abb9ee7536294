use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;

pub struct CreateAtaArgs {
    pub funding_address: Pubkey,
    pub associated_account_address: Pubkey,
    pub wallet_address: Pubkey,
    pub token_mint_address: Pubkey,
    pub token_program_id: Pubkey,
    pub instruction: u8,
}

#[derive(Debug)]
pub struct NewClaimArgs {
    pub program_id: Pubkey,
    pub distributor: Pubkey,
    pub claim_status: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub claimant: Pubkey,
    pub amount_unlocked: u64,
    pub amount_locked: u64,
    pub proof: Vec<[u8; 32]>,
}

/// Borsh payload of `new_claim`, placed after the instruction discriminator.
#[derive(Debug, BorshSerialize, BorshDeserialize)]
pub struct NewClaimInput {
    amount_unlocked: u64,
    amount_locked: u64,
    proof: Vec<[u8; 32]>,
}

impl NewClaimInput {
    pub fn new(amount_unlocked: u64, amount_locked: u64, proof: Vec<[u8; 32]>) -> Self {
        Self {
            amount_unlocked,
            amount_locked,
            proof,
        }
    }
}
