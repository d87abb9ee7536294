use std::str::FromStr;

use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;

use crate::error::ClientError;

/// Raw proof-service payload: `{ merkle_tree, amount, proof }` where each
/// proof entry is a JSON array of bytes.
#[derive(Deserialize, Debug)]
pub struct ClaimProofJson {
    pub merkle_tree: String,
    pub amount: u64,
    pub proof: Vec<Vec<u8>>,
}

/// One claimant's entitlement under one distribution tree, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRecord {
    pub distributor: Pubkey,
    pub amount: u64,
    pub proof: Vec<[u8; 32]>,
}

impl TryFrom<ClaimProofJson> for ClaimRecord {
    type Error = ClientError;

    fn try_from(json: ClaimProofJson) -> Result<Self, Self::Error> {
        let distributor = Pubkey::from_str(&json.merkle_tree).map_err(|e| {
            ClientError::Decode(format!(
                "merkle_tree `{}` is not a pubkey: {e}",
                json.merkle_tree
            ))
        })?;

        let proof = json
            .proof
            .into_iter()
            .enumerate()
            .map(|(i, node)| {
                <[u8; 32]>::try_from(node.as_slice()).map_err(|_| {
                    ClientError::Decode(format!(
                        "proof entry {i} has {} bytes, expected 32",
                        node.len()
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            distributor,
            amount: json.amount,
            proof,
        })
    }
}
