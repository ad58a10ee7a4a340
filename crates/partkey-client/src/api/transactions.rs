//! Transaction endpoints: suggested params, submission, confirmation.

use crate::AlgodClient;
use partkey_core::{NodeStatus, PendingTransaction, PartkeyError, Result, SubmitResponse, SuggestedParams};
use tracing::{debug, info};

/// Transaction endpoints
pub struct TransactionsApi<'a> {
    client: &'a AlgodClient,
}

impl<'a> TransactionsApi<'a> {
    pub(crate) fn new(client: &'a AlgodClient) -> Self {
        Self { client }
    }

    /// Get the network's suggested transaction parameters
    pub async fn suggested_params(&self) -> Result<SuggestedParams> {
        self.client.get("/v2/transactions/params").await
    }

    /// Submit a raw signed transaction, returning its transaction ID
    pub async fn submit(&self, raw: Vec<u8>) -> Result<String> {
        let response: SubmitResponse = self.client.post_raw("/v2/transactions", raw).await?;
        Ok(response.tx_id)
    }

    /// Pending state of a submitted transaction
    pub async fn pending(&self, txid: &str) -> Result<PendingTransaction> {
        self.client
            .get_with_query(
                &format!("/v2/transactions/pending/{txid}"),
                &[("format", "json")],
            )
            .await
    }

    /// Block until the transaction is confirmed, rejected, or `wait_rounds`
    /// rounds have passed since submission.
    ///
    /// Returns the confirmation round. A pool error surfaces as
    /// [`PartkeyError::Rejected`]; running out of rounds as
    /// [`PartkeyError::ConfirmationTimeout`]. Strictly sequential: one
    /// pending check per round, suspending on the node's
    /// `wait-for-block-after` endpoint in between.
    pub async fn wait_for_confirmation(&self, txid: &str, wait_rounds: u64) -> Result<u64> {
        let status: NodeStatus = self.client.get("/v2/status").await?;
        let mut round = status.last_round;
        let deadline = status.last_round + wait_rounds;

        loop {
            let pending = self.pending(txid).await?;

            if let Some(confirmed) = pending.confirmation() {
                info!(txid, round = confirmed, "transaction confirmed");
                return Ok(confirmed);
            }
            if !pending.pool_error.is_empty() {
                return Err(PartkeyError::Rejected {
                    message: pending.pool_error,
                });
            }
            if round >= deadline {
                return Err(PartkeyError::ConfirmationTimeout {
                    txid: txid.to_string(),
                    rounds: wait_rounds,
                });
            }

            debug!(txid, round, "not confirmed yet, waiting for next round");
            self.client
                .get::<NodeStatus>(&format!("/v2/status/wait-for-block-after/{round}"))
                .await?;
            round += 1;
        }
    }
}
