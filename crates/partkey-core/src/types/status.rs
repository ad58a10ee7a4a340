use serde::{Deserialize, Serialize};

/// Node status from `GET /v2/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeStatus {
    /// Most recent round the node has agreed on
    #[serde(rename = "last-round")]
    pub last_round: u64,

    /// Consensus version of the last round
    #[serde(default, rename = "last-version")]
    pub last_version: Option<String>,

    /// Time since the last round, in nanoseconds
    #[serde(default, rename = "time-since-last-round")]
    pub time_since_last_round: u64,

    /// Remaining catchup time, in nanoseconds. 0 when caught up.
    #[serde(default, rename = "catchup-time")]
    pub catchup_time: u64,
}

impl NodeStatus {
    /// Returns true if the node is caught up with the network.
    #[must_use]
    pub const fn is_caught_up(&self) -> bool {
        self.catchup_time == 0
    }
}

/// Pending transaction state from `GET /v2/transactions/pending/{txid}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingTransaction {
    /// Round the transaction was confirmed in; absent or 0 while pending
    #[serde(default, rename = "confirmed-round")]
    pub confirmed_round: Option<u64>,

    /// Why the transaction was dropped from the pool; empty if it wasn't
    #[serde(default, rename = "pool-error")]
    pub pool_error: String,
}

impl PendingTransaction {
    /// The confirmation round, if the transaction has been included.
    #[must_use]
    pub fn confirmation(&self) -> Option<u64> {
        self.confirmed_round.filter(|r| *r > 0)
    }
}

/// Response body of `POST /v2/transactions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// ID of the accepted transaction
    #[serde(rename = "txId")]
    pub tx_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_with_zero_round_is_unconfirmed() {
        let pending: PendingTransaction =
            serde_json::from_str(r#"{"confirmed-round": 0, "pool-error": ""}"#).unwrap();
        assert_eq!(pending.confirmation(), None);
        assert!(pending.pool_error.is_empty());
    }

    #[test]
    fn pending_with_round_is_confirmed() {
        let pending: PendingTransaction =
            serde_json::from_str(r#"{"confirmed-round": 1234}"#).unwrap();
        assert_eq!(pending.confirmation(), Some(1234));
    }
}
