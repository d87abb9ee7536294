use reqwest::{Client, StatusCode};
use solana_sdk::pubkey::Pubkey;

use crate::error::ClientError;

use super::schemas::{ClaimProofJson, ClaimRecord};

/// Fetches the claim proof for `claimant` under `mint`'s distribution.
///
/// A single GET to `{endpoint}/{mint}/{claimant}`, no retries. 404 means the
/// claimant has no entry and maps to `Ok(None)`; every other failure keeps
/// its shape so callers can decide what is worth retrying.
pub async fn get_claim_proof(
    http: &Client,
    endpoint: &str,
    mint: &Pubkey,
    claimant: &Pubkey,
) -> Result<Option<ClaimRecord>, ClientError> {
    let url = format!("{endpoint}/{mint}/{claimant}");

    let response = http
        .get(&url)
        .send()
        .await
        .inspect_err(|e| tracing::warn!("Proof request failed: {e}"))?;

    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        tracing::debug!("No claim entry for `{claimant}`");
        return Ok(None);
    }

    let text = response
        .text()
        .await
        .inspect_err(|e| tracing::warn!("Failed to retrieve proof response text: {e}"))?;

    if !status.is_success() {
        tracing::warn!("Proof service returned {status} for `{claimant}`: {text}");
        return Err(ClientError::Service { status, body: text });
    }

    let payload = serde_json::from_str::<ClaimProofJson>(&text).map_err(|e| {
        tracing::warn!("Failed to deserialize proof response: {e}\n {text}");
        ClientError::Decode(e.to_string())
    })?;

    ClaimRecord::try_from(payload).map(Some)
}
