//! Node status endpoints.

use crate::AlgodClient;
use partkey_core::{NodeStatus, Result};

/// Node status endpoints
pub struct NodeApi<'a> {
    client: &'a AlgodClient,
}

impl<'a> NodeApi<'a> {
    pub(crate) fn new(client: &'a AlgodClient) -> Self {
        Self { client }
    }

    /// Current node status
    pub async fn status(&self) -> Result<NodeStatus> {
        self.client.get("/v2/status").await
    }

    /// Block until the node has processed a round past the given one
    pub async fn wait_for_block_after(&self, round: u64) -> Result<NodeStatus> {
        self.client
            .get(&format!("/v2/status/wait-for-block-after/{round}"))
            .await
    }
}
