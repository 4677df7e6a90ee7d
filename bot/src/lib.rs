//! Natural-language dex assistant.
//!
//! [`Bot`] owns the per-request control flow: classify the question, fetch
//! the records the intent needs, run the derived-fact computation, and render
//! a single reply line. Failures are translated at this boundary; callers
//! always get a printable string back.

pub mod render;

use rotom_client::{DexClient, FetchError};
use rotom_dex::Creature;
use rotom_dex::query::{effectiveness, lineages};
use rotom_query::{Intent, classify};

pub struct Bot {
    client: DexClient,
}

impl Bot {
    /// Assistant backed by the public reference-data service.
    pub fn new() -> Self {
        Self { client: DexClient::new() }
    }

    /// Assistant backed by a preconfigured client (alternate base URL).
    pub fn with_client(client: DexClient) -> Self {
        Self { client }
    }

    /// Answer a free-text question.
    ///
    /// Never fails: any fetch or computation failure is caught here and
    /// rendered as a single user-facing line embedding the error description.
    pub async fn answer(&self, question: &str) -> String {
        let intent = classify(question);
        tracing::debug!(?intent, "classified query");

        match self.respond(&intent).await {
            Ok(reply) => reply,
            Err(error) => {
                tracing::warn!(error = %error, "query failed");
                format!("Sorry, I couldn't answer that: {error}.")
            }
        }
    }

    /// Direct-lookup passthrough for the hosting layer.
    pub async fn lookup(&self, name: &str) -> Result<Creature, FetchError> {
        self.client.creature(name).await
    }

    async fn respond(&self, intent: &Intent) -> Result<String, FetchError> {
        match intent {
            Intent::Types { name } => {
                let creature = self.client.creature(name).await?;
                Ok(render::types_line(&creature))
            }

            Intent::Stats { name } => {
                let creature = self.client.creature(name).await?;
                Ok(render::stats_line(&creature))
            }

            Intent::Weaknesses { name } => {
                let creature = self.client.creature(name).await?;
                let mut records = Vec::with_capacity(creature.types.len());
                for kind in &creature.types {
                    records.push(self.client.type_record(kind.as_str()).await?);
                }
                Ok(render::weaknesses_line(&creature.name, &effectiveness(&records)))
            }

            Intent::Evolution { name } => {
                let species = self.client.species(name).await?;
                let root = self.client.evolution_chain(&species.evolution_chain_url).await?;
                Ok(render::evolution_line(&species.name, &lineages(&root)))
            }

            Intent::CompareSpeed { first, second } => {
                // both fetches in flight before either is awaited
                let (a, b) = tokio::join!(self.client.creature(first), self.client.creature(second));
                Ok(render::compare_line(&a?, &b?))
            }

            Intent::MoveInfo { name } => {
                let record = self.client.move_record(name).await?;
                Ok(render::move_lines(&record))
            }

            Intent::Dex { name } => {
                let creature = self.client.creature(name).await?;
                Ok(render::dex_line(&creature))
            }
        }
    }
}

impl Default for Bot {
    fn default() -> Self {
        Self::new()
    }
}
