use borsh::BorshDeserialize;
use solana_sdk::pubkey::Pubkey;

use crate::error::ClientError;

use super::constants::CLAIM_STATUS_DISCRIMINATOR;

/// Leading fields of the on-chain `ClaimStatus` account. The program appends
/// reserved fields after these, so unpacking tolerates trailing bytes.
#[derive(Debug, BorshDeserialize)]
pub struct ClaimStatus {
    pub claimant: Pubkey,
    pub locked_amount: u64,
    pub locked_amount_withdrawn: u64,
    pub unlocked_amount: u64,
}

impl ClaimStatus {
    pub fn unpack(data: &[u8]) -> Result<Self, ClientError> {
        let payload = data
            .strip_prefix(&CLAIM_STATUS_DISCRIMINATOR)
            .ok_or_else(|| ClientError::Decode("claim status discriminator mismatch".into()))?;

        Self::deserialize(&mut &*payload)
            .map_err(|e| ClientError::Decode(format!("claim status account: {e}")))
    }
}
