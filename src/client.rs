use std::sync::Arc;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_program::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;

use crate::api::{api::get_claim_proof, schemas::ClaimRecord};
use crate::error::ClientError;
use crate::onchain::constants::MERKLE_DISTRIBUTOR_PROGRAM_ID;
use crate::onchain::derive::derive_claim_status;
use crate::onchain::ixs::{claim_token_sequence, get_or_create_ata_instruction, Instructions};
use crate::onchain::state::ClaimStatus;
use crate::onchain::typedefs::NewClaimArgs;

pub struct DistributorOptions {
    pub target_token: Pubkey,
    pub claim_proof_endpoint: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimStatusSummary {
    pub amount: u64,
    pub is_claimed: bool,
}

/// Client for one merkle-distributor campaign: looks up eligibility on the
/// proof service and assembles the instructions that claim the allocation.
///
/// All fields are fixed at construction; every call re-derives what it needs,
/// so a single instance can serve concurrent callers.
pub struct DistributorClient {
    provider: Arc<RpcClient>,
    http: reqwest::Client,
    mint: Pubkey,
    claim_proof_endpoint: String,
    program_id: Pubkey,
}

impl DistributorClient {
    pub fn new(provider: Arc<RpcClient>, options: DistributorOptions) -> Self {
        Self {
            provider,
            http: reqwest::Client::new(),
            mint: options.target_token,
            claim_proof_endpoint: options.claim_proof_endpoint,
            program_id: MERKLE_DISTRIBUTOR_PROGRAM_ID,
        }
    }

    /// Eligibility record for `claimant`, or `Ok(None)` when the proof
    /// service has no entry.
    pub async fn get_user(&self, claimant: &Pubkey) -> Result<Option<ClaimRecord>, ClientError> {
        get_claim_proof(&self.http, &self.claim_proof_endpoint, &self.mint, claimant).await
    }

    /// Builds the instruction sequence claiming `claimant`'s allocation, or
    /// `Ok(None)` when the claimant is not eligible. ATA-creation
    /// instructions come first since `new_claim` writes into both token
    /// accounts; the claimant funds any creations and signs the claim.
    pub async fn claim_token(
        &self,
        claimant: &Pubkey,
    ) -> Result<Option<Vec<Instruction>>, ClientError> {
        let Some(record) = self.get_user(claimant).await? else {
            return Ok(None);
        };

        let (claim_status, _bump) =
            derive_claim_status(claimant, &record.distributor, &self.program_id);

        let (to_ata, to_ata_ix) =
            get_or_create_ata_instruction(&self.provider, &self.mint, claimant, claimant).await?;

        let (distributor_ata, distributor_ata_ix) = get_or_create_ata_instruction(
            &self.provider,
            &self.mint,
            &record.distributor,
            claimant,
        )
        .await?;

        tracing::debug!(
            "Claiming {} for `{claimant}` from distributor `{}`",
            record.amount,
            record.distributor
        );

        // The locked amount is fixed at zero: this path claims only the
        // unlocked allocation.
        let new_claim_ix = Instructions::new_claim(NewClaimArgs {
            program_id: self.program_id,
            distributor: record.distributor,
            claim_status,
            from: distributor_ata,
            to: to_ata,
            claimant: *claimant,
            amount_unlocked: record.amount,
            amount_locked: 0,
            proof: record.proof,
        })?;

        Ok(Some(claim_token_sequence(
            to_ata_ix,
            distributor_ata_ix,
            new_claim_ix,
        )))
    }

    /// Whether `claimant` has already claimed. The claim-status PDA only
    /// exists after a successful claim, so an absent account reads as
    /// unclaimed with the entitled amount from the proof service.
    pub async fn get_claim_status(
        &self,
        claimant: &Pubkey,
    ) -> Result<Option<ClaimStatusSummary>, ClientError> {
        let Some(record) = self.get_user(claimant).await? else {
            return Ok(None);
        };

        let (claim_status, _bump) =
            derive_claim_status(claimant, &record.distributor, &self.program_id);

        let account = self
            .provider
            .get_account_with_commitment(&claim_status, self.provider.commitment())
            .await?
            .value;

        let is_claimed = match account {
            Some(account) => {
                ClaimStatus::unpack(&account.data)?;
                true
            }
            None => false,
        };

        Ok(Some(ClaimStatusSummary {
            amount: record.amount,
            is_claimed,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onchain::constants::{
        CLAIM_STATUS_DISCRIMINATOR, NEW_CLAIM_IX_DISCRIMINATOR, TOKEN_PROGRAM_ID,
    };
    use crate::onchain::derive::derive_ata;
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde_json::json;
    use solana_client::{rpc_client::Mocks, rpc_request::RpcRequest};
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn serve(status_line: &'static str, body: String) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;

                let response = format!(
                    "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(response.as_bytes()).await.unwrap();
            }
        });

        addr
    }

    fn record_body(distributor: &Pubkey, amount: u64) -> String {
        format!(
            r#"{{"merkle_tree":"{distributor}","amount":{amount},"proof":[{}]}}"#,
            serde_json::to_string(&vec![5u8; 32]).unwrap()
        )
    }

    fn client_with(provider: RpcClient, addr: SocketAddr, mint: Pubkey) -> DistributorClient {
        DistributorClient::new(
            Arc::new(provider),
            DistributorOptions {
                target_token: mint,
                claim_proof_endpoint: format!("http://{addr}"),
            },
        )
    }

    fn claim_status_account_response() -> serde_json::Value {
        let mut data = CLAIM_STATUS_DISCRIMINATOR.to_vec();
        data.extend_from_slice(&[0u8; 56]);

        json!({
            "context": { "slot": 1 },
            "value": {
                "lamports": 1_000_000u64,
                "data": [STANDARD.encode(data), "base64"],
                "owner": MERKLE_DISTRIBUTOR_PROGRAM_ID.to_string(),
                "executable": false,
                "rentEpoch": 0u64,
            }
        })
    }

    #[tokio::test]
    async fn missing_entry_yields_none_across_operations() {
        let addr = serve("404 Not Found", String::new()).await;
        let client = client_with(
            RpcClient::new_mock("succeeds".to_string()),
            addr,
            Pubkey::new_unique(),
        );
        let claimant = Pubkey::new_unique();

        assert!(client.get_user(&claimant).await.unwrap().is_none());
        assert!(client.claim_token(&claimant).await.unwrap().is_none());
        assert!(client.get_claim_status(&claimant).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn claim_token_orders_creations_before_claim() {
        let mint = Pubkey::new_unique();
        let distributor = Pubkey::new_unique();
        let claimant = Pubkey::new_unique();
        let addr = serve("200 OK", record_body(&distributor, 4242)).await;
        let client = client_with(RpcClient::new_mock("succeeds".to_string()), addr, mint);

        let ixs = client.claim_token(&claimant).await.unwrap().unwrap();

        assert_eq!(ixs.len(), 3);
        assert_eq!(
            ixs[0].accounts[1].pubkey,
            derive_ata(&claimant, &mint, &TOKEN_PROGRAM_ID).0
        );
        assert_eq!(
            ixs[1].accounts[1].pubkey,
            derive_ata(&distributor, &mint, &TOKEN_PROGRAM_ID).0
        );
        assert_eq!(ixs[2].program_id, MERKLE_DISTRIBUTOR_PROGRAM_ID);
        assert_eq!(&ixs[2].data[..8], &NEW_CLAIM_IX_DISCRIMINATOR);
    }

    #[tokio::test]
    async fn unclaimed_status_carries_record_amount() {
        let distributor = Pubkey::new_unique();
        let addr = serve("200 OK", record_body(&distributor, 4242)).await;
        let client = client_with(
            RpcClient::new_mock("succeeds".to_string()),
            addr,
            Pubkey::new_unique(),
        );

        let summary = client
            .get_claim_status(&Pubkey::new_unique())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            summary,
            ClaimStatusSummary {
                amount: 4242,
                is_claimed: false
            }
        );
    }

    #[tokio::test]
    async fn existing_claim_status_reads_as_claimed() {
        let distributor = Pubkey::new_unique();
        let addr = serve("200 OK", record_body(&distributor, 4242)).await;

        let mut mocks = Mocks::default();
        mocks.insert(RpcRequest::GetAccountInfo, claim_status_account_response());
        let provider = RpcClient::new_mock_with_mocks("succeeds".to_string(), mocks);

        let client = client_with(provider, addr, Pubkey::new_unique());

        let summary = client
            .get_claim_status(&Pubkey::new_unique())
            .await
            .unwrap()
            .unwrap();

        assert!(summary.is_claimed);
        assert_eq!(summary.amount, 4242);
    }
}
