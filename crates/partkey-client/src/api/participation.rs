//! Participation key endpoints.

use crate::AlgodClient;
use partkey_core::{Address, ParticipationKey, PartkeyError, Result};
use std::time::Duration;
use tracing::debug;

/// Interval between polls while the node generates a key
const GENERATE_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Participation key endpoints
pub struct ParticipationApi<'a> {
    client: &'a AlgodClient,
}

impl<'a> ParticipationApi<'a> {
    pub(crate) fn new(client: &'a AlgodClient) -> Self {
        Self { client }
    }

    /// List every participation key the node holds
    pub async fn list(&self) -> Result<Vec<ParticipationKey>> {
        // algod returns a JSON null body when the node holds no keys
        let keys: Option<Vec<ParticipationKey>> =
            self.client.get("/v2/participation").await?;
        Ok(keys.unwrap_or_default())
    }

    /// Get a specific participation key by ID
    pub async fn get(&self, id: &str) -> Result<ParticipationKey> {
        self.client.get(&format!("/v2/participation/{id}")).await
    }

    /// Find the key registered for an account address.
    ///
    /// A missing match is the named error [`PartkeyError::NoMatchingKey`],
    /// never a silent success.
    pub async fn find_for_address(&self, address: &Address) -> Result<ParticipationKey> {
        let wanted = address.to_string();
        self.list()
            .await?
            .into_iter()
            .find(|key| key.address == wanted)
            .ok_or(PartkeyError::NoMatchingKey { address: wanted })
    }

    /// Ask the node to generate a new keypair for an address and wait for
    /// it to appear in the key list. Generation runs asynchronously on the
    /// node and can take minutes for large validity ranges.
    pub async fn generate(
        &self,
        address: &Address,
        first: u64,
        last: u64,
        dilution: Option<u64>,
        wait: Duration,
    ) -> Result<ParticipationKey> {
        let first_str = first.to_string();
        let last_str = last.to_string();
        let mut params: Vec<(&str, &str)> =
            vec![("first", first_str.as_str()), ("last", last_str.as_str())];
        let dilution_str = dilution.map(|d| d.to_string());
        if let Some(d) = &dilution_str {
            params.push(("dilution", d.as_str()));
        }

        self.client
            .post_empty(&format!("/v2/participation/generate/{address}"), &params)
            .await?;

        let wanted = address.to_string();
        let deadline = tokio::time::Instant::now() + wait;
        loop {
            tokio::time::sleep(GENERATE_POLL_INTERVAL).await;

            let found = self.list().await?.into_iter().find(|key| {
                key.address == wanted
                    && key.key.vote_first_valid == first
                    && key.key.vote_last_valid == last
            });
            if let Some(key) = found {
                return Ok(key);
            }

            debug!(address = %wanted, "generated key not visible yet");
            if tokio::time::Instant::now() >= deadline {
                return Err(PartkeyError::GenerationTimeout {
                    secs: wait.as_secs(),
                });
            }
        }
    }

    /// Delete a participation key from the node
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/v2/participation/{id}")).await
    }
}
