use reqwest::StatusCode;
use thiserror::Error;

/// Failures a distributor-client call can surface.
///
/// "No entry for this claimant" is not an error: lookups return `Ok(None)`
/// for that case so callers can tell a terminal miss apart from a transport
/// failure worth retrying.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("proof service transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("proof service returned {status}: {body}")]
    Service { status: StatusCode, body: String },

    #[error("malformed payload: {0}")]
    Decode(String),

    #[error("rpc error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),
}
