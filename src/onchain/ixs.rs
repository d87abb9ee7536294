use solana_client::nonblocking::rpc_client::RpcClient;
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;

use crate::error::ClientError;

use super::constants::{
    ASSOCIATED_TOKEN_PROGRAM_ID, CREATE_ATA_IDEMPOTENT, NEW_CLAIM_IX_DISCRIMINATOR,
    SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID,
};
use super::derive::derive_ata;
use super::typedefs::{CreateAtaArgs, NewClaimArgs, NewClaimInput};

pub struct Instructions {}

impl Instructions {
    pub fn create_ata(args: CreateAtaArgs) -> Instruction {
        Instruction {
            program_id: ASSOCIATED_TOKEN_PROGRAM_ID,
            accounts: vec![
                AccountMeta::new(args.funding_address, true),
                AccountMeta::new(args.associated_account_address, false),
                AccountMeta::new_readonly(args.wallet_address, false),
                AccountMeta::new_readonly(args.token_mint_address, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
                AccountMeta::new_readonly(args.token_program_id, false),
            ],
            data: vec![args.instruction],
        }
    }

    /// The distributor program's `new_claim` instruction. Account order
    /// matches the program's `NewClaim` context; the claim-status PDA is
    /// initialized by the program, so it must not exist yet.
    pub fn new_claim(args: NewClaimArgs) -> Result<Instruction, ClientError> {
        let input = NewClaimInput::new(args.amount_unlocked, args.amount_locked, args.proof);

        let mut data = NEW_CLAIM_IX_DISCRIMINATOR.to_vec();
        data.extend(
            borsh::to_vec(&input)
                .map_err(|e| ClientError::Decode(format!("new_claim input: {e}")))?,
        );

        Ok(Instruction {
            program_id: args.program_id,
            accounts: vec![
                AccountMeta::new(args.distributor, false),
                AccountMeta::new(args.claim_status, false),
                AccountMeta::new(args.from, false),
                AccountMeta::new(args.to, false),
                AccountMeta::new(args.claimant, true),
                AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
            data,
        })
    }
}

/// Resolves the ATA of `(owner, token_mint)` and, when it does not exist yet,
/// also returns the instruction creating it with `payer` funding the rent.
///
/// Account absence is a normal outcome here; only node-level RPC failures
/// propagate.
pub async fn get_or_create_ata_instruction(
    provider: &RpcClient,
    token_mint: &Pubkey,
    owner: &Pubkey,
    payer: &Pubkey,
) -> Result<(Pubkey, Option<Instruction>), ClientError> {
    let (ata, _) = derive_ata(owner, token_mint, &TOKEN_PROGRAM_ID);

    let existing = provider
        .get_account_with_commitment(&ata, provider.commitment())
        .await?
        .value;

    if existing.is_some() {
        return Ok((ata, None));
    }

    let create_ix = Instructions::create_ata(CreateAtaArgs {
        funding_address: *payer,
        associated_account_address: ata,
        wallet_address: *owner,
        token_mint_address: *token_mint,
        token_program_id: TOKEN_PROGRAM_ID,
        instruction: CREATE_ATA_IDEMPOTENT,
    });

    Ok((ata, Some(create_ix)))
}

/// Orders a claim's instructions: ATA creations first (claimant's before the
/// distributor's), then `new_claim`, which writes into both token accounts.
pub fn claim_token_sequence(
    to_ata_ix: Option<Instruction>,
    distributor_ata_ix: Option<Instruction>,
    new_claim_ix: Instruction,
) -> Vec<Instruction> {
    let mut ixs = Vec::with_capacity(3);

    ixs.extend(to_ata_ix);
    ixs.extend(distributor_ata_ix);
    ixs.push(new_claim_ix);

    ixs
}
